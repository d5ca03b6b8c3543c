// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyline-oriented helpers for precise hit testing.
//!
//! Tests run in a stroke's native coordinates. Layout and viewport apply a
//! uniform positive scale plus a translation, so screen-space distances are
//! native distances multiplied by that scale; callers convert tolerances
//! rather than transforming every sample.

use kurbo::{Line, ParamCurveNearest, Point};

use crate::HitScore;

/// A stroke centerline as an open polyline.
#[derive(Clone, Copy, Debug)]
pub struct Polyline<'a> {
    /// Sample points, in order.
    pub points: &'a [Point],
}

impl Polyline<'_> {
    /// Distance from `pt` to the closest point of the polyline.
    ///
    /// A single sample is treated as a dot. Returns `None` for an empty polyline.
    #[must_use]
    pub fn distance_to(&self, pt: Point) -> Option<f64> {
        match self.points {
            [] => None,
            [only] => Some(only.distance(pt)),
            points => points
                .windows(2)
                .map(|seg| {
                    Line::new(seg[0], seg[1])
                        .nearest(pt, 0.)
                        .distance_sq
                        .sqrt()
                })
                .reduce(f64::min),
        }
    }

    /// Returns a score if `pt` lies within `radius` of the polyline.
    #[must_use]
    pub fn hit_test(&self, pt: Point, radius: f64) -> Option<HitScore> {
        let distance = self.distance_to(pt)?;
        (distance <= radius).then_some(HitScore { distance })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_hit_and_miss() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let line = Polyline { points: &points };

        assert_eq!(line.hit_test(Point::new(5.0, 0.0), 1.0).unwrap().distance, 0.0);
        assert!(line.hit_test(Point::new(5.0, 0.5), 1.0).is_some());
        assert!(line.hit_test(Point::new(11.0, 5.0), 1.0).is_some());
        assert!(line.hit_test(Point::new(5.0, 5.0), 1.0).is_none());
    }

    #[test]
    fn single_sample_is_a_dot() {
        let points = [Point::new(3.0, 4.0)];
        let dot = Polyline { points: &points };
        assert_eq!(dot.distance_to(Point::ORIGIN), Some(5.0));
        assert!(dot.hit_test(Point::ORIGIN, 5.0).is_some());
        assert!(dot.hit_test(Point::ORIGIN, 4.9).is_none());
    }

    #[test]
    fn empty_polyline_never_hits() {
        let empty = Polyline { points: &[] };
        assert_eq!(empty.distance_to(Point::ORIGIN), None);
        assert!(empty.hit_test(Point::ORIGIN, f64::INFINITY).is_none());
    }
}
