// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;

use crate::PageKey;

/// Which pages are currently visible on the canvas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageFilter {
    /// Every page is visible.
    #[default]
    All,
    /// Only the listed pages are visible.
    Only(HashSet<PageKey>),
}

impl PageFilter {
    /// Builds a filter showing only `keys`.
    pub fn only<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = PageKey>,
    {
        Self::Only(keys.into_iter().collect())
    }

    /// Returns `true` if strokes on `key` are visible.
    #[must_use]
    pub fn allows(&self, key: &PageKey) -> bool {
        match self {
            Self::All => true,
            Self::Only(keys) => keys.contains(key),
        }
    }
}
