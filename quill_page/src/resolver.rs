// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke to page key resolution with de-duplicated diagnostics.

use hashbrown::HashSet;

use crate::{MissingField, PageKey, Stroke, StrokeId};

/// Resolves strokes to their [`PageKey`].
///
/// Strokes without a usable identity resolve to [`PageKey::FALLBACK`]. Each
/// offending stroke is reported with a single `tracing` warning, no matter how
/// often it is resolved again (every render frame, every re-import), so the
/// log is not flooded.
#[derive(Clone, Debug, Default)]
pub struct PageKeyResolver {
    reported: HashSet<StrokeId>,
}

impl PageKeyResolver {
    /// Creates a resolver with no recorded diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key for `stroke`, falling back to [`PageKey::FALLBACK`].
    pub fn resolve(&mut self, stroke: &Stroke) -> PageKey {
        let resolved = stroke
            .page_info()
            .ok_or(MissingField::PageInfo)
            .and_then(|info| info.key());
        match resolved {
            Ok(key) => key,
            Err(missing) => {
                if self.reported.insert(stroke.id()) {
                    tracing::warn!(
                        stroke = stroke.id().0,
                        %missing,
                        "stroke has no {missing}; drawing it on fallback page {}",
                        PageKey::FALLBACK
                    );
                }
                PageKey::FALLBACK
            }
        }
    }

    /// Number of distinct strokes reported so far.
    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.reported.len()
    }

    /// Returns `true` if `id` has already been reported.
    #[must_use]
    pub fn was_reported(&self, id: StrokeId) -> bool {
        self.reported.contains(&id)
    }

    /// Forgets all recorded diagnostics.
    pub fn clear(&mut self) {
        self.reported.clear();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::PageInfo;

    fn stroke(id: u64, info: Option<PageInfo>) -> Stroke {
        Stroke::new(StrokeId(id), info, vec![Point::new(1.0, 1.0)])
    }

    #[test]
    fn complete_identity_resolves_without_diagnostics() {
        let mut resolver = PageKeyResolver::new();
        let key = resolver.resolve(&stroke(1, Some(PageInfo::new(None, Some(5), Some(2), Some(8)))));
        assert_eq!(key, PageKey::new(0, 5, 2, 8));
        assert_eq!(resolver.diagnostic_count(), 0);
    }

    #[test]
    fn missing_page_info_resolves_to_fallback() {
        let mut resolver = PageKeyResolver::new();
        let key = resolver.resolve(&stroke(7, None));
        assert_eq!(key, PageKey::FALLBACK);
        assert_eq!(key.to_string(), "S0/O0/B0/P0");
        assert!(resolver.was_reported(StrokeId(7)));
    }

    #[test]
    fn each_offending_stroke_is_reported_once() {
        let mut resolver = PageKeyResolver::new();
        let orphan = stroke(1, Some(PageInfo::new(Some(1), Some(1), None, Some(3))));
        for _ in 0..100 {
            assert_eq!(resolver.resolve(&orphan), PageKey::FALLBACK);
        }
        assert_eq!(resolver.diagnostic_count(), 1);

        resolver.resolve(&stroke(2, None));
        assert_eq!(resolver.diagnostic_count(), 2);

        resolver.clear();
        assert!(!resolver.was_reported(StrokeId(1)));
    }
}
