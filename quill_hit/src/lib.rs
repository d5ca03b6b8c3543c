// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Hit: screen-space geometry queries over ink strokes.
//!
//! This crate answers the two questions a selection gesture asks:
//!
//! - Which strokes does this screen rectangle touch? See
//!   [`HitTester::indices_within`], built on [`HitTester::bounds_of`] and the
//!   inclusive AABB test [`intersects`].
//! - Which stroke is directly under the pointer? See [`HitTester::stroke_at`].
//!
//! All queries run under the current [`PageLayout`] and [`Viewport`], which
//! the [`HitTester`] borrows for the duration of one input event. Strokes are
//! passed in as [`StrokeRef`]s so callers decide which strokes are visible.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quill_hit::{HitParams, HitTester, StrokeRef};
//! use quill_page::PageKey;
//! use quill_view::{PageLayout, Viewport};
//!
//! let key = PageKey::new(0, 0, 1, 1);
//! let mut layout = PageLayout::new();
//! layout.get_or_init(key, Point::ORIGIN);
//! let viewport = Viewport::new();
//!
//! let a = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
//! let b = [Point::new(20.0, 20.0), Point::new(30.0, 30.0)];
//! let strokes = [
//!     StrokeRef { index: 0, key, points: &a },
//!     StrokeRef { index: 1, key, points: &b },
//! ];
//!
//! let hits = HitTester::new(&layout, &viewport, HitParams::default());
//! assert_eq!(hits.indices_within(strokes, Rect::new(5.0, 5.0, 25.0, 25.0)), [0, 1]);
//! assert_eq!(hits.stroke_at(strokes, Point::new(21.0, 21.0)), Some(1));
//! ```

use core::cmp::Ordering;

use kurbo::{Point, Rect};
use quill_page::PageKey;
use quill_view::{LayoutEntry, PageLayout, Viewport, to_native, to_screen};
use serde::{Deserialize, Serialize};

/// Polyline-oriented hit helpers.
pub mod stroke;

use stroke::Polyline;

/// Parameters controlling hit tests, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitParams {
    /// Half-extent of the box around a single-sample stroke, so dots stay
    /// hit-testable by rectangles.
    pub point_radius: f64,
    /// How far from a stroke's centerline a pointer-down still picks it.
    pub stroke_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            point_radius: 3.0,
            stroke_tolerance: 4.0,
        }
    }
}

/// Score returned from a precise hit. Lower distance is better.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance from the query point, in the space the test ran in.
    pub distance: f64,
}

impl HitScore {
    /// Compare two scores by distance; `NaN` compares equal.
    #[must_use]
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// A stroke as seen by the hit tester: its index in the caller's stroke list,
/// its resolved page, and its native samples.
#[derive(Clone, Copy, Debug)]
pub struct StrokeRef<'a> {
    /// Index in the caller's stroke list; reported back by queries.
    pub index: usize,
    /// Page the stroke belongs to.
    pub key: PageKey,
    /// Native sample points.
    pub points: &'a [Point],
}

/// Inclusive axis-aligned overlap test: touching edges intersect.
///
/// Both rectangles are expected in normalized form (`x0 <= x1`, `y0 <= y1`).
#[must_use]
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

/// Borrowing view over layout and viewport that answers hit queries.
#[derive(Clone, Copy, Debug)]
pub struct HitTester<'a> {
    layout: &'a PageLayout,
    viewport: &'a Viewport,
    params: HitParams,
}

impl<'a> HitTester<'a> {
    /// Creates a tester over the given state.
    #[must_use]
    pub fn new(layout: &'a PageLayout, viewport: &'a Viewport, params: HitParams) -> Self {
        Self {
            layout,
            viewport,
            params,
        }
    }

    /// Hit parameters in use.
    #[must_use]
    pub fn params(&self) -> HitParams {
        self.params
    }

    /// Screen-space bounding box of a stroke.
    ///
    /// Single-sample strokes are inflated by [`HitParams::point_radius`].
    /// Returns `None` for strokes without samples. A page with no layout entry
    /// is treated as if the stroke's first sample were its origin; the layout
    /// itself is not modified.
    #[must_use]
    pub fn bounds_of(&self, key: &PageKey, points: &[Point]) -> Option<Rect> {
        let first = *points.first()?;
        let entry = self.entry_for(key, first);
        let native = points
            .iter()
            .fold(Rect::from_points(first, first), |acc, pt| acc.union_pt(*pt));
        // Layout and viewport scale uniformly by a positive factor, so the
        // native min/max corners stay min/max on screen.
        let min = to_screen(Point::new(native.x0, native.y0), &entry, self.viewport);
        let max = to_screen(Point::new(native.x1, native.y1), &entry, self.viewport);
        let bounds = Rect::new(min.x, min.y, max.x, max.y);
        if points.len() == 1 {
            Some(bounds.inflate(self.params.point_radius, self.params.point_radius))
        } else {
            Some(bounds)
        }
    }

    /// Indices of strokes whose bounds intersect `rect`, ascending.
    ///
    /// `rect` may be given in any corner order. Strokes without samples never
    /// match.
    pub fn indices_within<'s, I>(&self, strokes: I, rect: Rect) -> Vec<usize>
    where
        I: IntoIterator<Item = StrokeRef<'s>>,
    {
        let rect = rect.abs();
        let mut hits: Vec<usize> = strokes
            .into_iter()
            .filter(|stroke| {
                self.bounds_of(&stroke.key, stroke.points)
                    .is_some_and(|bounds| intersects(bounds, rect))
            })
            .map(|stroke| stroke.index)
            .collect();
        hits.sort_unstable();
        hits.dedup();
        hits
    }

    /// Screen-space distance from `pt` to a stroke, if within tolerance.
    ///
    /// Single-sample strokes accept hits within
    /// `point_radius + stroke_tolerance`; longer strokes within
    /// `stroke_tolerance` of the centerline.
    #[must_use]
    pub fn hit_stroke(&self, stroke: &StrokeRef<'_>, pt: Point) -> Option<HitScore> {
        let first = *stroke.points.first()?;
        let entry = self.entry_for(&stroke.key, first);
        let k = entry.scale() * self.viewport.zoom();
        let radius = if stroke.points.len() == 1 {
            self.params.point_radius + self.params.stroke_tolerance
        } else {
            self.params.stroke_tolerance
        };
        let native_pt = to_native(pt, &entry, self.viewport);
        Polyline {
            points: stroke.points,
        }
        .hit_test(native_pt, radius / k)
        .map(|score| HitScore {
            distance: score.distance * k,
        })
    }

    /// The stroke under `pt`: the closest hit, ties going to the later
    /// (topmost) stroke.
    pub fn stroke_at<'s, I>(&self, strokes: I, pt: Point) -> Option<usize>
    where
        I: IntoIterator<Item = StrokeRef<'s>>,
    {
        let reach = self.params.point_radius + self.params.stroke_tolerance;
        let probe = Rect::from_center_size(pt, (0.0, 0.0)).inflate(reach, reach);
        let mut best: Option<(usize, HitScore)> = None;
        for stroke in strokes {
            let near = self
                .bounds_of(&stroke.key, stroke.points)
                .is_some_and(|bounds| intersects(bounds, probe));
            if !near {
                continue;
            }
            let Some(score) = self.hit_stroke(&stroke, pt) else {
                continue;
            };
            let better = match &best {
                None => true,
                Some((index, current)) => match score.cmp_distance(current) {
                    Ordering::Less => true,
                    Ordering::Equal => stroke.index > *index,
                    Ordering::Greater => false,
                },
            };
            if better {
                best = Some((stroke.index, score));
            }
        }
        best.map(|(index, _)| index)
    }

    fn entry_for(&self, key: &PageKey, first: Point) -> LayoutEntry {
        self.layout.entry_or_default(key, first)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};
    use quill_page::PageKey;
    use quill_view::{PageLayout, Viewport};

    use super::*;

    const KEY: PageKey = PageKey::new(0, 0, 1, 1);

    fn identity() -> (PageLayout, Viewport) {
        let mut layout = PageLayout::new();
        layout.get_or_init(KEY, Point::ORIGIN);
        (layout, Viewport::new())
    }

    #[test]
    fn intersects_is_inclusive() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(intersects(a, Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(intersects(a, Rect::new(-5.0, 3.0, 0.0, 4.0)));
        assert!(intersects(a, Rect::new(2.0, 2.0, 3.0, 3.0)));
        assert!(!intersects(a, Rect::new(10.5, 0.0, 20.0, 10.0)));
        assert!(!intersects(a, Rect::new(0.0, -3.0, 10.0, -0.1)));
    }

    #[test]
    fn bounds_follow_layout_and_viewport() {
        let mut layout = PageLayout::new();
        layout.get_or_init(KEY, Point::new(100.0, 100.0));
        layout.rescale(KEY, 2.0, Point::new(100.0, 100.0));
        let mut viewport = Viewport::new();
        viewport.set_pan(Vec2::new(10.0, 20.0));
        viewport.set_zoom(0.5);

        let tester = HitTester::new(&layout, &viewport, HitParams::default());
        let points = [Point::new(110.0, 130.0), Point::new(104.0, 150.0)];
        assert_eq!(
            tester.bounds_of(&KEY, &points),
            Some(Rect::new(14.0, 50.0, 20.0, 70.0))
        );
    }

    #[test]
    fn single_point_bounds_are_inflated() {
        let (layout, viewport) = identity();
        let tester = HitTester::new(
            &layout,
            &viewport,
            HitParams {
                point_radius: 2.0,
                ..HitParams::default()
            },
        );
        assert_eq!(
            tester.bounds_of(&KEY, &[Point::new(5.0, 5.0)]),
            Some(Rect::new(3.0, 3.0, 7.0, 7.0))
        );
        assert_eq!(tester.bounds_of(&KEY, &[]), None);
    }

    #[test]
    fn disjoint_boxes_are_selected_separately() {
        let (layout, viewport) = identity();
        let tester = HitTester::new(&layout, &viewport, HitParams::default());
        let a = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let b = [Point::new(20.0, 20.0), Point::new(30.0, 30.0)];
        let strokes = [
            StrokeRef {
                index: 0,
                key: KEY,
                points: &a,
            },
            StrokeRef {
                index: 1,
                key: KEY,
                points: &b,
            },
        ];

        assert_eq!(
            tester.indices_within(strokes, Rect::new(0.0, 0.0, 10.0, 10.0)),
            [0]
        );
        assert_eq!(
            tester.indices_within(strokes, Rect::new(5.0, 5.0, 25.0, 25.0)),
            [0, 1]
        );
        // Corner order does not matter.
        assert_eq!(
            tester.indices_within(strokes, Rect::new(25.0, 25.0, 5.0, 5.0)),
            [0, 1]
        );
        assert!(
            tester
                .indices_within(strokes, Rect::new(12.0, 12.0, 18.0, 18.0))
                .is_empty()
        );
    }

    #[test]
    fn indices_are_reported_in_ascending_order() {
        let (layout, viewport) = identity();
        let tester = HitTester::new(&layout, &viewport, HitParams::default());
        let pts = [Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let strokes = [7, 3, 5].map(|index| StrokeRef {
            index,
            key: KEY,
            points: &pts,
        });
        assert_eq!(
            tester.indices_within(strokes, Rect::new(0.0, 0.0, 3.0, 3.0)),
            [3, 5, 7]
        );
    }

    #[test]
    fn stroke_at_prefers_closest_then_topmost() {
        let (layout, viewport) = identity();
        let tester = HitTester::new(&layout, &viewport, HitParams::default());
        let low = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let high = [Point::new(0.0, 3.0), Point::new(100.0, 3.0)];
        let strokes = [
            StrokeRef {
                index: 0,
                key: KEY,
                points: &low,
            },
            StrokeRef {
                index: 1,
                key: KEY,
                points: &high,
            },
        ];

        assert_eq!(tester.stroke_at(strokes, Point::new(50.0, 0.5)), Some(0));
        assert_eq!(tester.stroke_at(strokes, Point::new(50.0, 2.5)), Some(1));
        assert_eq!(tester.stroke_at(strokes, Point::new(50.0, 1.5)), Some(1));
        assert_eq!(tester.stroke_at(strokes, Point::new(50.0, 40.0)), None);
    }

    #[test]
    fn stroke_tolerance_is_measured_on_screen() {
        let mut layout = PageLayout::new();
        layout.get_or_init(KEY, Point::ORIGIN);
        layout.rescale(KEY, 10.0, Point::ORIGIN);
        let viewport = Viewport::new();
        let tester = HitTester::new(&layout, &viewport, HitParams::default());
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let stroke = StrokeRef {
            index: 0,
            key: KEY,
            points: &pts,
        };

        // Screen line runs from (0,0) to (100,0); 4px tolerance on screen.
        let near = tester.hit_stroke(&stroke, Point::new(50.0, 3.5)).unwrap();
        assert!((near.distance - 3.5).abs() < 1e-9);
        assert!(tester.hit_stroke(&stroke, Point::new(50.0, 4.5)).is_none());
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: HitParams = serde_json::from_str(r#"{"stroke_tolerance": 8.0}"#).unwrap();
        assert_eq!(params.stroke_tolerance, 8.0);
        assert_eq!(params.point_radius, HitParams::default().point_radius);
    }
}
