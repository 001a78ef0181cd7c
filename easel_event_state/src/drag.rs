// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag tracking in surface pixels.
//!
//! A drag begins on pointer-down, reports the pixel delta since the previous
//! position on every move, and ends on pointer-up. The surface applies those
//! deltas directly to the view offset, which lives in the same pixel space.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use easel_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! assert_eq!(drag.update(Point::new(3.0, 3.0)), None);
//!
//! drag.start(Point::new(10.0, 20.0));
//! assert_eq!(drag.update(Point::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
//! assert_eq!(drag.update(Point::new(16.0, 18.0)), Some(Vec2::new(1.0, 0.0)));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// State of an in-progress drag, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    last: Option<Point>,
}

impl DragState {
    /// Begins a drag at `pos`, replacing any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Moves the drag to `pos` and returns the delta from the previous
    /// position, or `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last.as_mut()?;
        let delta = pos - *last;
        *last = pos;
        Some(delta)
    }

    /// Ends the drag. Safe to call when idle.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_reports_nothing() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn deltas_are_incremental() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn restart_discards_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(10.0, 10.0));

        drag.start(Point::new(50.0, 60.0));
        assert_eq!(drag.update(Point::new(45.0, 65.0)), Some(Vec2::new(-5.0, 5.0)));
    }

    #[test]
    fn end_is_idempotent() {
        let mut drag = DragState::default();
        drag.end();
        drag.start(Point::new(1.0, 2.0));
        drag.end();
        drag.end();
        assert!(!drag.is_dragging());
    }
}
