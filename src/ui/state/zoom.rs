// SPDX-License-Identifier: MPL-2.0
//! Zoom state management for the modal photo viewer.
//!
//! This module handles all zoom-related state and logic, including:
//! - The clamped scale factor
//! - Wheel input mapping
//! - Reset on viewer open

use crate::config::{DEFAULT_ZOOM_SCALE, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, WHEEL_ZOOM_STEP};

/// Viewer scale factor, guaranteed to be within the valid range (0.5–4.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self(scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_SCALE
    }

    /// Returns the scale shifted by `delta`, clamped.
    #[must_use]
    pub fn shifted_by(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_SCALE)
    }
}

/// Manages the zoom scale for the modal photo viewer.
#[derive(Debug, Clone, Default)]
pub struct ZoomState {
    scale: ZoomScale,
}

impl ZoomState {
    /// Resets the scale to identity; called each time a photo opens.
    pub fn reset(&mut self) {
        self.scale = ZoomScale::default();
    }

    /// Shifts the scale by `delta`, clamping into the valid range.
    /// Out-of-range requests are absorbed silently.
    pub fn apply_delta(&mut self, delta: f32) {
        self.scale = self.scale.shifted_by(delta);
    }

    /// Applies one wheel notch. Scrolling up (positive `y`) zooms in.
    pub fn handle_wheel(&mut self, y: f32) {
        let delta = if y > 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            -WHEEL_ZOOM_STEP
        };
        self.apply_delta(delta);
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn default_scale_is_identity() {
        let state = ZoomState::default();
        assert_abs_diff_eq!(state.scale(), DEFAULT_ZOOM_SCALE, epsilon = F32_EPSILON);
    }

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(ZoomScale::new(0.0).value(), MIN_ZOOM_SCALE);
        assert_abs_diff_eq!(ZoomScale::new(100.0).value(), MAX_ZOOM_SCALE);
        assert_abs_diff_eq!(ZoomScale::new(2.5).value(), 2.5);
    }

    #[test]
    fn min_max_flags_track_bounds() {
        assert!(ZoomScale::new(MIN_ZOOM_SCALE).is_min());
        assert!(ZoomScale::new(MAX_ZOOM_SCALE).is_max());
        assert!(!ZoomScale::new(1.0).is_min());
        assert!(!ZoomScale::new(1.0).is_max());
    }

    #[test]
    fn apply_delta_absorbs_extreme_values() {
        let mut state = ZoomState::default();

        state.apply_delta(1000.0);
        assert_abs_diff_eq!(state.scale(), MAX_ZOOM_SCALE, epsilon = F32_EPSILON);

        state.apply_delta(-1000.0);
        assert_abs_diff_eq!(state.scale(), MIN_ZOOM_SCALE, epsilon = F32_EPSILON);
    }

    #[test]
    fn wheel_up_from_identity_lands_on_one_point_one() {
        let mut state = ZoomState::default();
        state.handle_wheel(1.0);
        assert_abs_diff_eq!(state.scale(), 1.1, epsilon = F32_EPSILON);
    }

    #[test]
    fn wheel_up_near_ceiling_clamps_to_max() {
        let mut state = ZoomState::default();
        state.apply_delta(2.95);
        assert_abs_diff_eq!(state.scale(), 3.95, epsilon = F32_EPSILON);

        state.handle_wheel(1.0);
        assert_abs_diff_eq!(state.scale(), MAX_ZOOM_SCALE, epsilon = F32_EPSILON);
    }

    #[test]
    fn wheel_down_zooms_out() {
        let mut state = ZoomState::default();
        state.handle_wheel(-3.0);
        assert_abs_diff_eq!(state.scale(), 0.9, epsilon = F32_EPSILON);
    }

    #[test]
    fn reset_restores_identity_from_any_scale() {
        let mut state = ZoomState::default();
        state.apply_delta(2.37);
        state.reset();
        assert_abs_diff_eq!(state.scale(), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn scale_survives_arbitrary_delta_storms() {
        let mut state = ZoomState::default();
        for delta in [-0.3, 5.0, -7.7, 0.05, 1000.0, -1000.0, 0.1] {
            state.apply_delta(delta);
            assert!(state.scale() >= MIN_ZOOM_SCALE);
            assert!(state.scale() <= MAX_ZOOM_SCALE);
        }
    }
}
