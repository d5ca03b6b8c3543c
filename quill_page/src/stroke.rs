// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke records as handed over by the import collaborator.

use std::sync::Arc;

use kurbo::Point;

use crate::PageInfo;

/// Stable identifier of a stroke: its start timestamp or an explicit id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub u64);

/// An ordered sequence of sample points in native device coordinates.
///
/// Strokes are immutable once captured. The point buffer is shared, so
/// cloning a stroke is cheap.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    page_info: Option<PageInfo>,
    points: Arc<[Point]>,
}

impl Stroke {
    /// Creates a stroke from its id, raw page identity, and samples.
    pub fn new(id: StrokeId, page_info: Option<PageInfo>, points: impl Into<Arc<[Point]>>) -> Self {
        Self {
            id,
            page_info,
            points: points.into(),
        }
    }

    /// The stroke id.
    #[must_use]
    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Raw page identity, if the pen reported one.
    #[must_use]
    pub fn page_info(&self) -> Option<&PageInfo> {
        self.page_info.as_ref()
    }

    /// Sample points in native coordinates.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The first sample, if any.
    #[must_use]
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Returns `true` if the stroke has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
