// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the interaction state logic separated from the main
//! App struct, following the principle of separation of concerns.

pub mod pinch;
pub mod zoom;

// Re-export commonly used types for convenience
pub use pinch::PinchTracker;
pub use zoom::{ZoomScale, ZoomState};
