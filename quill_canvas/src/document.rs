// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use quill_hit::StrokeRef;
use quill_page::{PageFilter, PageKey, PageKeyResolver, Stroke};

/// The strokes a canvas currently shows, with their resolved page keys and
/// the page filter.
///
/// Strokes are read-only here; the import collaborator replaces the whole list
/// through [`StrokeDocument::set_strokes`].
#[derive(Clone, Debug, Default)]
pub(crate) struct StrokeDocument {
    strokes: Vec<Stroke>,
    keys: Vec<PageKey>,
    resolver: PageKeyResolver,
    filter: PageFilter,
    visible: Vec<usize>,
}

impl StrokeDocument {
    pub(crate) fn set_strokes(&mut self, strokes: Vec<Stroke>) {
        self.keys = strokes
            .iter()
            .map(|stroke| self.resolver.resolve(stroke))
            .collect();
        self.strokes = strokes;
        self.refresh_visible();
    }

    pub(crate) fn set_filter(&mut self, filter: PageFilter) {
        self.filter = filter;
        self.refresh_visible();
    }

    pub(crate) fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub(crate) fn filter(&self) -> &PageFilter {
        &self.filter
    }

    pub(crate) fn resolver(&self) -> &PageKeyResolver {
        &self.resolver
    }

    pub(crate) fn key_of(&self, index: usize) -> Option<PageKey> {
        self.keys.get(index).copied()
    }

    /// Visible stroke indices in display order.
    pub(crate) fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub(crate) fn is_visible(&self, index: usize) -> bool {
        self.visible.binary_search(&index).is_ok()
    }

    /// Hit-test views of the visible strokes.
    pub(crate) fn visible_refs(&self) -> impl Iterator<Item = StrokeRef<'_>> + Clone + '_ {
        self.visible.iter().map(|&index| StrokeRef {
            index,
            key: self.keys[index],
            points: self.strokes[index].points(),
        })
    }

    /// First sample of every stroke with samples, paired with its page, in
    /// stroke order. The first pair for each page defines its default origin.
    pub(crate) fn first_samples(&self) -> impl Iterator<Item = (PageKey, Point)> + '_ {
        self.strokes
            .iter()
            .zip(&self.keys)
            .filter_map(|(stroke, key)| stroke.first_point().map(|pt| (*key, pt)))
    }

    /// First sample recorded on `key`, if any stroke lands there.
    pub(crate) fn first_sample_on(&self, key: &PageKey) -> Option<Point> {
        self.first_samples()
            .find(|(page, _)| page == key)
            .map(|(_, pt)| pt)
    }

    fn refresh_visible(&mut self) {
        self.visible = self
            .keys
            .iter()
            .enumerate()
            .filter(|(_, key)| self.filter.allows(key))
            .map(|(index, _)| index)
            .collect();
    }
}
