// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Selection: the set of selected strokes.
//!
//! This crate focuses on the _bookkeeping_ of a selection over stroke indices:
//! which strokes are selected, which stroke is the **anchor** for range-style
//! follow-up operations, and a **revision** counter that bumps only when the
//! selection actually changes. It does **not** know where strokes are drawn;
//! the gesture layer decides which indices a click or box select affects.
//!
//! Indices are kept sorted and unique, so [`SelectionSet::indices`] is always
//! the ascending sequence that downstream consumers (for example, a
//! transcription request) expect.
//!
//! ## Minimal example
//!
//! ```rust
//! use quill_selection::SelectionSet;
//!
//! let mut selection = SelectionSet::new();
//!
//! // Plain click: replace the selection with one stroke.
//! selection.select_only(2);
//! assert_eq!(selection.anchor(), Some(2));
//!
//! // Additive box select: union in the strokes under the box.
//! selection.extend_with([0, 1]);
//! assert_eq!(selection.indices(), &[0, 1, 2]);
//!
//! // Modifier click: toggle one stroke.
//! selection.toggle(1);
//! assert_eq!(selection.indices(), &[0, 2]);
//! ```
//!
//! ## Stale indices
//!
//! Strokes live in an external store. When strokes disappear (or a page filter
//! hides them), the owner calls [`SelectionSet::retain`] with a predicate
//! describing which indices are still valid. This is done lazily, on the next
//! read, rather than on every store mutation.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// A sorted set of selected stroke indices plus an anchor and a revision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: Vec<usize>,
    anchor: Option<usize>,
    revision: u64,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
            anchor: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of selected strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Selected stroke indices in ascending order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterates over selected indices in ascending order.
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, usize>> {
        self.indices.iter().copied()
    }

    /// Returns `true` if `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// The anchor used as the pivot for [`SelectionSet::extend_range_to`].
    ///
    /// The anchor is always a selected index, or `None`.
    #[must_use]
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Monotonic counter bumped only when contents or anchor change.
    ///
    /// No-op calls (for example, selecting the already-selected singleton)
    /// leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything and clears the anchor.
    pub fn clear(&mut self) {
        if self.indices.is_empty() && self.anchor.is_none() {
            return;
        }
        self.indices.clear();
        self.anchor = None;
        self.bump_revision();
    }

    /// Replaces the selection with a single stroke, which becomes the anchor.
    pub fn select_only(&mut self, index: usize) {
        if self.indices.as_slice() == [index] && self.anchor == Some(index) {
            return;
        }
        self.indices.clear();
        self.indices.push(index);
        self.anchor = Some(index);
        self.bump_revision();
    }

    /// Toggles `index`.
    ///
    /// A newly added index becomes the anchor. Removing the anchor clears it.
    pub fn toggle(&mut self, index: usize) {
        match self.indices.binary_search(&index) {
            Ok(pos) => {
                self.indices.remove(pos);
                if self.anchor == Some(index) {
                    self.anchor = None;
                }
            }
            Err(pos) => {
                self.indices.insert(pos, index);
                self.anchor = Some(index);
            }
        }
        self.bump_revision();
    }

    /// Replaces the selection with `indices`. Duplicates are ignored.
    ///
    /// The previous anchor is kept if it is still selected; otherwise the
    /// smallest new index becomes the anchor.
    pub fn replace_with<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let mut next: Vec<usize> = indices.into_iter().collect();
        next.sort_unstable();
        next.dedup();

        let anchor = match self.anchor {
            Some(anchor) if next.binary_search(&anchor).is_ok() => Some(anchor),
            _ => next.first().copied(),
        };
        if next == self.indices && anchor == self.anchor {
            return;
        }
        self.indices = next;
        self.anchor = anchor;
        self.bump_revision();
    }

    /// Adds `indices` to the selection (set union). The anchor is unchanged
    /// unless the selection was empty, in which case the smallest new index
    /// becomes the anchor.
    pub fn extend_with<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let before = self.indices.len();
        self.indices.extend(indices);
        self.indices.sort_unstable();
        self.indices.dedup();
        if self.indices.len() == before {
            return;
        }
        if self.anchor.is_none() {
            self.anchor = self.indices.first().copied();
        }
        self.bump_revision();
    }

    /// Selects the run of `visible_order` between the anchor and `target`,
    /// inclusive, replacing the current selection. The anchor stays put.
    ///
    /// Without an anchor, or when either end is not in `visible_order`, this
    /// behaves like [`SelectionSet::select_only`] on `target`.
    pub fn extend_range_to(&mut self, target: usize, visible_order: &[usize]) {
        let Some(anchor) = self.anchor else {
            self.select_only(target);
            return;
        };
        let position = |index: usize| visible_order.iter().position(|&i| i == index);
        let (Some(a), Some(b)) = (position(anchor), position(target)) else {
            self.select_only(target);
            return;
        };
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        self.replace_with(visible_order[start..=end].iter().copied());
    }

    /// Makes `index` the anchor if it is selected.
    pub fn set_anchor(&mut self, index: usize) {
        if self.anchor != Some(index) && self.contains(index) {
            self.anchor = Some(index);
            self.bump_revision();
        }
    }

    /// Keeps only the indices for which `keep` returns `true`, returning how
    /// many were dropped.
    ///
    /// This is how stale indices are pruned after the stroke store or the page
    /// filter changes. Dropping the anchor clears it.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(usize) -> bool,
    {
        let before = self.indices.len();
        self.indices.retain(|&index| keep(index));
        let dropped = before - self.indices.len();
        if dropped == 0 {
            return 0;
        }
        if let Some(anchor) = self.anchor
            && !self.contains(anchor)
        {
            self.anchor = None;
        }
        self.bump_revision();
        dropped
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl FromIterator<usize> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut selection = Self::new();
        selection.replace_with(iter);
        selection
    }
}
