// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning the image.

use crate::geometry::{Offset, Point};

/// New image origin for a drag that started at `start` with the image at
/// `base`: the image follows the cursor one-for-one.
///
/// Pure arithmetic. The result is not clamped; a drag may leave the image
/// partly or fully off-canvas.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn pan_offset(start: Point, current: Point, base: Offset) -> Offset {
    Offset::new(
        base.x + (current.x - start.x) as i32,
        base.y + (current.y - start.y) as i32,
    )
}

/// Tracks an in-progress pan gesture.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    is_dragging: bool,
    start_position: Option<Point>,
    start_offset: Option<Offset>,
}

impl DragState {
    /// Starts a drag at `position`, capturing the image origin at that
    /// moment.
    pub fn start(&mut self, position: Point, offset: Offset) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Ends the drag.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Image origin for the cursor now being at `current`.
    ///
    /// `None` while no drag is in progress.
    #[must_use]
    pub fn offset_for(&self, current: Point) -> Option<Offset> {
        if !self.is_dragging {
            return None;
        }
        let start = self.start_position?;
        let base = self.start_offset?;
        Some(pan_offset(start, current, base))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_drag_is_identity() {
        let start = Point::new(40.0, 60.0);
        let base = Offset::new(-12, 7);
        assert_eq!(pan_offset(start, start, base), base);
    }

    #[test]
    fn pan_follows_the_cursor() {
        let moved = pan_offset(
            Point::new(100.0, 100.0),
            Point::new(120.0, 90.0),
            Offset::new(10, 10),
        );
        assert_eq!(moved, Offset::new(30, 0));
    }

    #[test]
    fn pan_is_not_clamped_to_the_canvas() {
        let moved = pan_offset(
            Point::new(0.0, 0.0),
            Point::new(-5000.0, -5000.0),
            Offset::ZERO,
        );
        assert_eq!(moved, Offset::new(-5000, -5000));
    }

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.offset_for(Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn start_then_move_reports_shifted_offset() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Offset::new(50, 30));

        let offset = state.offset_for(Point::new(180.0, 130.0));
        assert_eq!(offset, Some(Offset::new(30, 10)));
    }

    #[test]
    fn stop_ends_the_gesture() {
        let mut state = DragState::default();
        state.start(Point::new(0.0, 0.0), Offset::ZERO);
        state.stop();

        assert!(!state.is_dragging());
        assert!(state.offset_for(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn later_moves_still_measure_from_the_gesture_start() {
        let mut state = DragState::default();
        state.start(Point::new(0.0, 0.0), Offset::ZERO);

        state.offset_for(Point::new(100.0, 0.0));
        let offset = state.offset_for(Point::new(10.0, 10.0));

        // Intermediate moves leave no trace; only the start point matters.
        assert_eq!(offset, Some(Offset::new(10, 10)));
    }
}
