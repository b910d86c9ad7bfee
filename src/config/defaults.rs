// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Session**: Catalog size, step count, options per step
//! - **Timing**: Transition and reveal delays
//! - **Zoom**: Viewer scale bounds and input sensitivity
//! - **Media**: Decode and obscured-variant parameters

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Number of photos a session draws from.
pub const CATALOG_SIZE: usize = 12;

/// Number of forced-choice questions per session.
pub const TOTAL_STEPS: usize = 6;

/// Index of the last (obscured) step, 0-based.
pub const FINAL_STEP_INDEX: usize = 5;

/// Photos presented per step.
pub const CHOICES_PER_STEP: usize = 2;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Hold after a non-final choice before the step transition starts.
pub const POST_CHOICE_DELAY_MS: u64 = 600;

/// Hold after the final choice, long enough to take the reveal in.
pub const FINAL_REVEAL_DELAY_MS: u64 = 3000;

/// Duration of the exit transition between steps and into the results.
pub const STEP_TRANSITION_MS: u64 = 400;

/// Staggered reveal delays for the six result photos, by index.
pub const RESULT_REVEAL_DELAYS_MS: [u64; TOTAL_STEPS] = [0, 400, 800, 1200, 1600, 2000];

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale applied when the viewer opens a photo (identity).
pub const DEFAULT_ZOOM_SCALE: f32 = 1.0;

/// Minimum allowed viewer scale.
pub const MIN_ZOOM_SCALE: f32 = 0.5;

/// Maximum allowed viewer scale.
pub const MAX_ZOOM_SCALE: f32 = 4.0;

/// Scale change applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Scale change per pixel of two-finger spread change.
pub const PINCH_ZOOM_FACTOR: f32 = 0.01;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Edge length the obscured variant is downscaled to before blurring.
pub const OBSCURED_PREVIEW_EDGE: u32 = 64;

/// Gaussian blur sigma for the obscured variant.
pub const OBSCURED_BLUR_SIGMA: f32 = 4.0;

/// Decoded photos kept in memory at once.
pub const PHOTO_CACHE_CAPACITY: usize = 16;

/// Photo directory scanned when neither the CLI nor the config names one.
pub const DEFAULT_PHOTO_DIR: &str = "photos";

/// Longest display edge of the modal viewer at identity scale.
pub const VIEWER_BASE_EDGE: f32 = 480.0;
