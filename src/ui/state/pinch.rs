// SPDX-License-Identifier: MPL-2.0
//! Two-finger pinch tracking for the modal photo viewer.
//!
//! The tracker mirrors the touch contract of the viewer: the distance
//! baseline is captured fresh on gesture start (the first frame with exactly
//! two touch points) and refreshed on every subsequent move, so each move
//! yields a delta proportional to the finger-spread change in pixels.

use crate::config::PINCH_ZOOM_FACTOR;
use iced::touch::Finger;
use iced::Point;

/// Tracks active touch points and the previous two-finger distance.
#[derive(Debug, Clone, Default)]
pub struct PinchTracker {
    fingers: Vec<(Finger, Point)>,
    last_distance: Option<f32>,
}

impl PinchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a finger landing on the surface.
    pub fn press(&mut self, finger: Finger, position: Point) {
        if let Some(entry) = self.fingers.iter_mut().find(|(id, _)| *id == finger) {
            entry.1 = position;
        } else {
            self.fingers.push((finger, position));
        }
        self.reset_baseline();
    }

    /// Updates a finger position. Returns a zoom delta while exactly two
    /// fingers are down and a baseline exists; the first two-finger frame
    /// only establishes the baseline.
    pub fn moved(&mut self, finger: Finger, position: Point) -> Option<f32> {
        let entry = self.fingers.iter_mut().find(|(id, _)| *id == finger)?;
        entry.1 = position;

        if self.fingers.len() != 2 {
            return None;
        }

        let distance = Self::distance(self.fingers[0].1, self.fingers[1].1);
        let delta = self
            .last_distance
            .map(|previous| (distance - previous) * PINCH_ZOOM_FACTOR);
        self.last_distance = Some(distance);
        delta
    }

    /// Removes a lifted or lost finger and drops the gesture baseline.
    pub fn release(&mut self, finger: Finger) {
        self.fingers.retain(|(id, _)| *id != finger);
        self.reset_baseline();
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn active_fingers(&self) -> usize {
        self.fingers.len()
    }

    /// Captures the baseline when a two-finger gesture starts and clears it
    /// for any other finger count.
    fn reset_baseline(&mut self) {
        self.last_distance = if self.fingers.len() == 2 {
            Some(Self::distance(self.fingers[0].1, self.fingers[1].1))
        } else {
            None
        };
    }

    fn distance(a: Point, b: Point) -> f32 {
        (a.x - b.x).hypot(a.y - b.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn finger(id: u64) -> Finger {
        Finger(id)
    }

    #[test]
    fn single_finger_produces_no_delta() {
        let mut tracker = PinchTracker::new();
        tracker.press(finger(1), Point::new(0.0, 0.0));

        assert_eq!(tracker.moved(finger(1), Point::new(50.0, 0.0)), None);
    }

    #[test]
    fn spread_produces_proportional_positive_delta() {
        let mut tracker = PinchTracker::new();
        tracker.press(finger(1), Point::new(0.0, 0.0));
        tracker.press(finger(2), Point::new(100.0, 0.0));

        let delta = tracker
            .moved(finger(2), Point::new(150.0, 0.0))
            .expect("two-finger move should yield a delta");

        assert_abs_diff_eq!(delta, 50.0 * PINCH_ZOOM_FACTOR, epsilon = F32_EPSILON);
    }

    #[test]
    fn squeeze_produces_negative_delta() {
        let mut tracker = PinchTracker::new();
        tracker.press(finger(1), Point::new(0.0, 0.0));
        tracker.press(finger(2), Point::new(200.0, 0.0));

        let delta = tracker
            .moved(finger(2), Point::new(120.0, 0.0))
            .expect("two-finger move should yield a delta");

        assert_abs_diff_eq!(delta, -80.0 * PINCH_ZOOM_FACTOR, epsilon = F32_EPSILON);
    }

    #[test]
    fn baseline_refreshes_every_move() {
        let mut tracker = PinchTracker::new();
        tracker.press(finger(1), Point::new(0.0, 0.0));
        tracker.press(finger(2), Point::new(100.0, 0.0));

        tracker.moved(finger(2), Point::new(130.0, 0.0));
        let second = tracker
            .moved(finger(2), Point::new(140.0, 0.0))
            .expect("move should yield a delta");

        // Only the change since the previous sample counts.
        assert_abs_diff_eq!(second, 10.0 * PINCH_ZOOM_FACTOR, epsilon = F32_EPSILON);
    }

    #[test]
    fn lifting_a_finger_ends_the_gesture() {
        let mut tracker = PinchTracker::new();
        tracker.press(finger(1), Point::new(0.0, 0.0));
        tracker.press(finger(2), Point::new(100.0, 0.0));
        tracker.release(finger(2));

        assert_eq!(tracker.active_fingers(), 1);
        assert_eq!(tracker.moved(finger(1), Point::new(10.0, 0.0)), None);
    }

    #[test]
    fn new_gesture_starts_with_fresh_baseline() {
        let mut tracker = PinchTracker::new();
        tracker.press(finger(1), Point::new(0.0, 0.0));
        tracker.press(finger(2), Point::new(100.0, 0.0));
        tracker.moved(finger(2), Point::new(300.0, 0.0));
        tracker.release(finger(2));

        // Second gesture: the old 300px spread must not leak into the new
        // baseline.
        tracker.press(finger(3), Point::new(40.0, 0.0));
        let delta = tracker
            .moved(finger(3), Point::new(50.0, 0.0))
            .expect("move should yield a delta");
        assert_abs_diff_eq!(delta, 10.0 * PINCH_ZOOM_FACTOR, epsilon = F32_EPSILON);
    }

    #[test]
    fn third_finger_suspends_deltas() {
        let mut tracker = PinchTracker::new();
        tracker.press(finger(1), Point::new(0.0, 0.0));
        tracker.press(finger(2), Point::new(100.0, 0.0));
        tracker.press(finger(3), Point::new(50.0, 50.0));

        assert_eq!(tracker.moved(finger(2), Point::new(200.0, 0.0)), None);
    }
}
