// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use quill_gesture::GestureScene;
use quill_hit::HitTester;

use crate::document::StrokeDocument;

/// Gesture queries answered from the visible strokes under the current layout
/// and viewport.
pub(crate) struct CanvasScene<'a> {
    pub(crate) document: &'a StrokeDocument,
    pub(crate) hits: HitTester<'a>,
}

impl GestureScene for CanvasScene<'_> {
    fn stroke_at(&self, pt: Point) -> Option<usize> {
        self.hits.stroke_at(self.document.visible_refs(), pt)
    }

    fn strokes_in(&self, rect: Rect) -> Vec<usize> {
        self.hits.indices_within(self.document.visible_refs(), rect)
    }

    fn visible_strokes(&self) -> Vec<usize> {
        self.document.visible().to_vec()
    }
}
