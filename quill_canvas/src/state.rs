// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use quill_gesture::{GestureState, InputEvent, Modifiers, RenderHint};
use quill_hit::HitTester;
use quill_page::{PageFilter, PageKey, Stroke};
use quill_selection::SelectionSet;
use quill_view::{LayoutEntry, LayoutSnapshot, PageLayout, Viewport};

use crate::document::StrokeDocument;
use crate::scene::CanvasScene;
use crate::{CanvasConfig, CanvasError, FrameSnapshot};

/// The single owner of a canvas's layout, viewport, selection and gesture.
///
/// Every mutation goes through a method here; nothing else holds a mutable
/// reference to the layout, viewport, or selection. Events must be fed in
/// arrival order.
#[derive(Clone, Debug)]
pub struct CanvasState {
    config: CanvasConfig,
    document: StrokeDocument,
    layout: PageLayout,
    viewport: Viewport,
    selection: SelectionSet,
    gesture: GestureState,
    selection_stale: bool,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CanvasState {
    /// Creates an empty canvas.
    ///
    /// Unusable tolerances in `config` fall back to their defaults; see
    /// [`CanvasConfig::sanitized`].
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        let config = config.sanitized();
        Self {
            config,
            document: StrokeDocument::default(),
            layout: PageLayout::with_limits(config.scale_limits),
            viewport: Viewport::with_limits(config.zoom_limits),
            selection: SelectionSet::new(),
            gesture: GestureState::Idle,
            selection_stale: false,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    // --- Stroke ingestion ---

    /// Replaces the stroke list with a new merged, time-ordered list.
    ///
    /// Resolves every stroke's page, gives pages seen for the first time a
    /// default layout anchored at their first sample, and cancels any gesture
    /// in progress. Selected indices that no longer name a visible stroke are
    /// pruned on the next read.
    pub fn set_strokes(&mut self, strokes: Vec<Stroke>) {
        self.document.set_strokes(strokes);
        self.prime_layout();
        self.invalidate_selection();
        tracing::debug!(
            strokes = self.document.strokes().len(),
            visible = self.document.visible().len(),
            pages = self.layout.len(),
            "strokes replaced"
        );
    }

    /// Changes which pages are visible.
    pub fn set_page_filter(&mut self, filter: PageFilter) {
        self.document.set_filter(filter);
        self.invalidate_selection();
        tracing::debug!(visible = self.document.visible().len(), "page filter changed");
    }

    /// Current page filter.
    #[must_use]
    pub fn page_filter(&self) -> &PageFilter {
        self.document.filter()
    }

    /// All strokes, visible or not.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        self.document.strokes()
    }

    /// Visible stroke indices in display order.
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        self.document.visible()
    }

    /// Page that stroke `index` was resolved to.
    #[must_use]
    pub fn page_of(&self, index: usize) -> Option<PageKey> {
        self.document.key_of(index)
    }

    /// Number of distinct strokes that fell back to the fallback page.
    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.document.resolver().diagnostic_count()
    }

    // --- Gestures ---

    /// Feeds one input event through the gesture machine.
    ///
    /// Pan hints are applied to the viewport before being returned.
    pub fn handle(&mut self, event: InputEvent) -> Option<RenderHint> {
        self.prune_selection();
        let scene = CanvasScene {
            document: &self.document,
            hits: HitTester::new(&self.layout, &self.viewport, self.config.hit),
        };
        let (next, hint) = quill_gesture::step(
            self.gesture,
            &mut self.selection,
            event,
            &scene,
            &self.config.gesture,
        );
        if next.name() != self.gesture.name() {
            tracing::debug!(from = self.gesture.name(), to = next.name(), ?event, "gesture transition");
        }
        self.gesture = next;
        if let Some(RenderHint::Pan(delta)) = hint {
            self.viewport.pan_by(delta);
        }
        hint
    }

    /// Pointer pressed at `pos` with `modifiers` held.
    pub fn start_pointer(&mut self, pos: Point, modifiers: Modifiers) -> Option<RenderHint> {
        self.handle(InputEvent::PointerDown { pos, modifiers })
    }

    /// Pointer moved to `pos`.
    pub fn move_pointer(&mut self, pos: Point) -> Option<RenderHint> {
        self.handle(InputEvent::PointerMove { pos })
    }

    /// Pointer released at `pos`.
    pub fn end_pointer(&mut self, pos: Point) -> Option<RenderHint> {
        self.handle(InputEvent::PointerUp { pos })
    }

    /// Pointer left the canvas.
    pub fn pointer_left(&mut self) -> Option<RenderHint> {
        self.handle(InputEvent::PointerLeave)
    }

    /// Discards the gesture in progress (Escape).
    pub fn cancel_gesture(&mut self) -> Option<RenderHint> {
        self.handle(InputEvent::Escape)
    }

    /// Selects every visible stroke.
    pub fn select_all(&mut self) -> Option<RenderHint> {
        self.handle(InputEvent::SelectAll)
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) -> Option<RenderHint> {
        self.handle(InputEvent::ClearSelection)
    }

    /// Selects the visible strokes between the selection anchor and `index`.
    ///
    /// Ignored while a gesture is in progress.
    pub fn extend_selection_to(&mut self, index: usize) -> Option<RenderHint> {
        self.prune_selection();
        if !self.gesture.is_idle() || !self.document.is_visible(index) {
            return None;
        }
        let before = self.selection.revision();
        self.selection
            .extend_range_to(index, self.document.visible());
        (self.selection.revision() != before).then_some(RenderHint::SelectionChanged)
    }

    /// Current gesture state.
    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gesture
    }

    /// Live selection box, while a box select is active.
    #[must_use]
    pub fn selection_box(&self) -> Option<Rect> {
        self.gesture.selection_box()
    }

    /// The selection, after dropping indices that went stale.
    pub fn selection(&mut self) -> &SelectionSet {
        self.prune_selection();
        &self.selection
    }

    // --- Layout ---

    /// Layout entries of every page seen so far.
    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Rescales page `key`, keeping `anchor` (native coordinates) fixed on
    /// screen. Without an anchor the page's current origin is used.
    pub fn rescale_page(&mut self, key: PageKey, scale: f64, anchor: Option<Point>) -> LayoutEntry {
        let anchor = anchor.unwrap_or_else(|| self.page_origin(&key));
        let entry = self.layout.rescale(key, scale, anchor);
        tracing::debug!(page = %key, scale = entry.scale(), "page rescaled");
        entry
    }

    /// Moves page `key` so its origin is `origin` (native coordinates).
    pub fn reposition_page(&mut self, key: PageKey, origin: Point) -> LayoutEntry {
        let entry = self.layout.reposition(key, origin);
        tracing::debug!(page = %key, x = origin.x, y = origin.y, "page repositioned");
        entry
    }

    /// Drags page `key` by a screen-space delta.
    pub fn move_page_by(&mut self, key: PageKey, delta: Vec2) -> Option<LayoutEntry> {
        self.layout.move_by_screen(key, delta, &self.viewport)
    }

    /// Reverts one page, or every page, to its computed default placement.
    ///
    /// Returns how many custom entries were dropped. Calling it again is a
    /// no-op.
    pub fn reset_layout(&mut self, key: Option<&PageKey>) -> usize {
        let removed = self.layout.reset(key);
        self.prime_layout();
        match key {
            Some(key) => tracing::info!(page = %key, removed, "page layout reset"),
            None => tracing::info!(removed, "layout reset"),
        }
        removed
    }

    /// Serializable copy of the layout.
    #[must_use]
    pub fn layout_snapshot(&self) -> LayoutSnapshot {
        self.layout.snapshot()
    }

    /// Replaces the layout with `snapshot`. Pages with strokes but no entry in
    /// the snapshot get their default placement. On error nothing changes.
    pub fn restore_layout(&mut self, snapshot: &LayoutSnapshot) -> Result<(), CanvasError> {
        self.layout.restore(snapshot)?;
        self.prime_layout();
        Ok(())
    }

    /// [`CanvasState::restore_layout`] from JSON text.
    pub fn restore_layout_json(&mut self, text: &str) -> Result<(), CanvasError> {
        let snapshot = LayoutSnapshot::from_json(text)?;
        self.restore_layout(&snapshot)
    }

    /// Screen-space bounds of stroke `index`.
    #[must_use]
    pub fn stroke_bounds(&self, index: usize) -> Option<Rect> {
        let key = self.document.key_of(index)?;
        let stroke = self.document.strokes().get(index)?;
        HitTester::new(&self.layout, &self.viewport, self.config.hit).bounds_of(&key, stroke.points())
    }

    // --- Viewport ---

    /// Global pan and zoom.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.viewport.pan_by(delta);
    }

    /// Multiplies zoom by `factor`, keeping the screen point `anchor` fixed.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        self.viewport.zoom_about_screen_point(anchor, factor);
    }

    /// Sets the zoom directly, clamped to the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    // --- Frames ---

    /// Captures the state a renderer needs for one frame.
    pub fn frame(&mut self) -> FrameSnapshot {
        self.prune_selection();
        FrameSnapshot {
            viewport: self.viewport,
            layout: self.layout.clone(),
            selection: self.selection.indices().to_vec(),
            selection_box: self.gesture.selection_box(),
            layout_revision: self.layout.revision(),
            selection_revision: self.selection.revision(),
        }
    }

    fn page_origin(&self, key: &PageKey) -> Point {
        self.layout
            .entry(key)
            .map(LayoutEntry::origin)
            .or_else(|| self.document.first_sample_on(key))
            .unwrap_or(Point::ORIGIN)
    }

    fn prime_layout(&mut self) {
        for (key, first) in self.document.first_samples() {
            self.layout.get_or_init(key, first);
        }
    }

    fn invalidate_selection(&mut self) {
        self.selection_stale = true;
        if !self.gesture.is_idle() {
            tracing::debug!(state = self.gesture.name(), "gesture cancelled by stroke update");
            self.gesture = GestureState::Idle;
        }
    }

    fn prune_selection(&mut self) {
        if !self.selection_stale {
            return;
        }
        self.selection_stale = false;
        let document = &self.document;
        let dropped = self.selection.retain(|index| document.is_visible(index));
        if dropped > 0 {
            tracing::debug!(dropped, "pruned stale selection indices");
        }
    }
}
