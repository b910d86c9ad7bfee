// SPDX-License-Identifier: MPL-2.0
//! UI modules: screens, shared components, styles, and interaction state.

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod quiz;
pub mod results;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
