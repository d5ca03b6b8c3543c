// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};
use quill_page::PageKey;
use quill_view::{PageLayout, Viewport, page_to_screen};

/// Read-only copy of everything a renderer needs for one frame.
///
/// Taken once at the start of a frame with
/// [`CanvasState::frame`](crate::CanvasState::frame), so a rescale or
/// selection change arriving mid-frame cannot tear the picture.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    /// Global pan and zoom.
    pub viewport: Viewport,
    /// Per-page placement.
    pub layout: PageLayout,
    /// Selected stroke indices, ascending.
    pub selection: Vec<usize>,
    /// Live selection box overlay, if a box select is in progress.
    pub selection_box: Option<Rect>,
    /// [`PageLayout::revision`] at capture time.
    pub layout_revision: u64,
    /// Selection revision at capture time.
    pub selection_revision: u64,
}

impl FrameSnapshot {
    /// Native-to-screen transform for `key`, if the page has been laid out.
    #[must_use]
    pub fn page_transform(&self, key: &PageKey) -> Option<Affine> {
        self.layout
            .entry(key)
            .map(|entry| page_to_screen(entry, &self.viewport))
    }

    /// Returns `true` if stroke `index` should be drawn highlighted.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.binary_search(&index).is_ok()
    }
}
