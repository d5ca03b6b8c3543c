// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracker: start and current pointer positions of one gesture.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use quill_gesture::drag::DragTracker;
//!
//! let mut drag = DragTracker::new(Point::new(10.0, 20.0));
//!
//! // Move to (15, 25): delta since last position is (5, 5).
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//! assert_eq!(drag.total_offset(), Vec2::new(5.0, 5.0));
//!
//! // Dragging back past the start still yields a normalized rectangle.
//! drag.update(Point::new(0.0, 0.0));
//! assert_eq!(drag.rect(), Rect::new(0.0, 0.0, 10.0, 20.0));
//! ```

use kurbo::{Point, Rect, Vec2};

/// Start and current positions of a pointer drag, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    start: Point,
    current: Point,
}

impl DragTracker {
    /// Starts tracking at `pos`.
    #[must_use]
    pub fn new(pos: Point) -> Self {
        Self {
            start: pos,
            current: pos,
        }
    }

    /// Where the pointer went down.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Most recent pointer position.
    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Records a new position and returns the movement since the last one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.current;
        self.current = pos;
        delta
    }

    /// Offset of the current position from the start.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.current - self.start
    }

    /// Returns `true` once the pointer is strictly farther than `threshold`
    /// from the start.
    #[must_use]
    pub fn exceeds(&self, threshold: f64) -> bool {
        let threshold = threshold.max(0.0);
        self.total_offset().hypot2() > threshold * threshold
    }

    /// Rectangle spanned by start and current, normalized so `x0 <= x1` and
    /// `y0 <= y1` regardless of drag direction.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.start, self.current)
    }
}
