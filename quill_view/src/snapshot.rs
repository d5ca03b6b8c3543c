// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serializable form of a [`PageLayout`].

use std::collections::BTreeMap;

use hashbrown::HashMap;
use kurbo::Point;
use quill_page::{PageKey, ParsePageKeyError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{LayoutEntry, PageLayout};

/// Errors raised while restoring a [`LayoutSnapshot`].
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// A snapshot key is not a canonical page key.
    #[error(transparent)]
    InvalidKey(#[from] ParsePageKeyError),
    /// A snapshot entry has a `NaN` or infinite origin.
    #[error("page {key} has a non-finite origin")]
    NonFiniteOrigin {
        /// The offending page.
        key: PageKey,
    },
    /// The snapshot text is not valid JSON of the expected shape.
    #[error("malformed layout snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// One page's persisted layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    /// Native X of the page origin.
    pub origin_x: f64,
    /// Native Y of the page origin.
    pub origin_y: f64,
    /// Page scale.
    pub scale: f64,
    /// Whether the page was moved or resized by the user.
    pub is_custom_position: bool,
}

impl From<&LayoutEntry> for SnapshotEntry {
    fn from(entry: &LayoutEntry) -> Self {
        Self {
            origin_x: entry.origin.x,
            origin_y: entry.origin.y,
            scale: entry.scale,
            is_custom_position: entry.is_custom_position,
        }
    }
}

/// Mapping from canonical page key string to [`SnapshotEntry`].
///
/// Serializes as a plain JSON object ordered by key, for example
/// `{"S0/O0/B1/P1":{"originX":0.0,"originY":0.0,"scale":1.0,"isCustomPosition":false}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutSnapshot {
    pages: BTreeMap<String, SnapshotEntry>,
}

impl LayoutSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the snapshot has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The entry stored for `key`.
    #[must_use]
    pub fn get(&self, key: &PageKey) -> Option<&SnapshotEntry> {
        self.pages.get(&key.to_string())
    }

    /// Inserts or replaces the entry for `key`.
    pub fn insert(&mut self, key: PageKey, entry: SnapshotEntry) {
        self.pages.insert(key.to_string(), entry);
    }

    /// Iterates over `(canonical key, entry)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnapshotEntry)> {
        self.pages.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serializes to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a snapshot from JSON. Keys are validated on restore.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl PageLayout {
    /// Captures every entry, default and custom, as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            pages: self
                .entries
                .iter()
                .map(|(key, entry)| (key.to_string(), SnapshotEntry::from(entry)))
                .collect(),
        }
    }

    /// Replaces all entries with the contents of `snapshot`.
    ///
    /// Scales are clamped into [`PageLayout::limits`]. The restore is
    /// all-or-nothing: on error the current layout is left untouched.
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) -> Result<(), SnapshotError> {
        let mut entries = HashMap::with_capacity(snapshot.len());
        for (text, saved) in snapshot.iter() {
            let key: PageKey = text.parse()?;
            let origin = Point::new(saved.origin_x, saved.origin_y);
            if !origin.is_finite() {
                return Err(SnapshotError::NonFiniteOrigin { key });
            }
            let entry = LayoutEntry {
                origin,
                scale: self.clamp_scale(&key, saved.scale),
                is_custom_position: saved.is_custom_position,
            };
            entries.insert(key, entry);
        }
        tracing::info!(pages = entries.len(), "restored page layout snapshot");
        self.replace_all(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use quill_page::PageKey;

    use super::{LayoutSnapshot, SnapshotEntry, SnapshotError};
    use crate::{PageLayout, Viewport, to_screen};

    const A: PageKey = PageKey::new(0, 0, 1, 1);
    const B: PageKey = PageKey::new(3, 27, 2, 9);

    fn sample_layout() -> PageLayout {
        let mut layout = PageLayout::new();
        layout.get_or_init(A, Point::new(12.5, 40.0));
        layout.get_or_init(B, Point::new(0.1, 0.2));
        layout.rescale(B, 1.0 / 3.0, Point::new(7.3, -2.9));
        layout
    }

    #[test]
    fn snapshot_uses_canonical_keys_and_camel_case() {
        let json = sample_layout().snapshot().to_json().unwrap();
        assert!(json.contains("\"S0/O0/B1/P1\""), "{json}");
        assert!(json.contains("\"S3/O27/B2/P9\""), "{json}");
        assert!(json.contains("\"originX\""), "{json}");
        assert!(json.contains("\"isCustomPosition\":true"), "{json}");
    }

    #[test]
    fn restore_reproduces_screen_positions() {
        let layout = sample_layout();
        let json = layout.snapshot().to_json().unwrap();

        let mut restored = PageLayout::new();
        restored
            .restore(&LayoutSnapshot::from_json(&json).unwrap())
            .unwrap();

        let mut vp = Viewport::new();
        vp.set_pan(Vec2::new(-11.0, 300.0));
        vp.set_zoom(1.7);
        for key in [A, B] {
            let pt = Point::new(3.3, 4.4);
            let original = to_screen(pt, layout.entry(&key).unwrap(), &vp);
            let again = to_screen(pt, restored.entry(&key).unwrap(), &vp);
            assert_eq!(original, again);
        }
        assert_eq!(restored.snapshot(), layout.snapshot());
    }

    #[test]
    fn restore_rejects_bad_keys_without_partial_update() {
        let mut layout = sample_layout();
        let before = layout.snapshot();

        let mut bad = LayoutSnapshot::new();
        bad.insert(
            A,
            SnapshotEntry {
                origin_x: 0.0,
                origin_y: 0.0,
                scale: 1.0,
                is_custom_position: false,
            },
        );
        let json = bad.to_json().unwrap().replace("S0/O0/B1/P1", "page one");
        let parsed = LayoutSnapshot::from_json(&json).unwrap();

        let err = layout.restore(&parsed).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidKey(_)));
        assert_eq!(layout.snapshot(), before);
    }

    #[test]
    fn restore_rejects_aliases_of_a_canonical_key() {
        let mut layout = sample_layout();
        let before = layout.snapshot();

        let entry = r#"{"originX":1.0,"originY":2.0,"scale":1.0,"isCustomPosition":true}"#;
        for alias in ["S+0/O0/B1/P1", "S0/O0/B01/P1"] {
            let json = format!(r#"{{"{alias}":{entry},"S0/O0/B1/P1":{entry}}}"#);
            let parsed = LayoutSnapshot::from_json(&json).unwrap();
            assert_eq!(parsed.len(), 2);

            let err = layout.restore(&parsed).unwrap_err();
            assert!(matches!(err, SnapshotError::InvalidKey(ref e) if e.input() == alias), "{err}");
            assert_eq!(layout.snapshot(), before);
        }
    }

    #[test]
    fn restore_rejects_non_finite_origin() {
        let mut snapshot = LayoutSnapshot::new();
        snapshot.insert(
            B,
            SnapshotEntry {
                origin_x: f64::NAN,
                origin_y: 0.0,
                scale: 1.0,
                is_custom_position: true,
            },
        );
        let err = PageLayout::new().restore(&snapshot).unwrap_err();
        assert!(matches!(err, SnapshotError::NonFiniteOrigin { key } if key == B));
    }

    #[test]
    fn restore_clamps_scale() {
        let mut snapshot = LayoutSnapshot::new();
        snapshot.insert(
            A,
            SnapshotEntry {
                origin_x: 1.0,
                origin_y: 2.0,
                scale: 500.0,
                is_custom_position: true,
            },
        );
        let mut layout = PageLayout::new();
        layout.restore(&snapshot).unwrap();
        assert_eq!(layout.entry(&A).unwrap().scale(), 20.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            LayoutSnapshot::from_json("[1, 2]"),
            Err(SnapshotError::Json(_))
        ));
    }
}
