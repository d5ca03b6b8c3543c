// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-page layout: origin, scale, and the anchor-preserving rescale.

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use quill_page::PageKey;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Viewport;
use crate::limits::{self, InvalidLimits, RawLimits};
use crate::transform;

/// Allowed range for per-page scale factors.
///
/// Requests outside the range are clamped, never rejected. Both bounds are
/// finite and positive with `min <= max`, so a clamped scale is always usable
/// as a divisor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Creates limits, normalizing so that `min <= max`.
    ///
    /// A bound that is not finite and positive is replaced by its default.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let default = Self::default();
        let (min, max) = limits::normalize(min, max, (default.min, default.max));
        Self { min, max }
    }

    /// Creates limits, rejecting any range [`ScaleLimits::new`] would repair.
    pub fn try_new(min: f64, max: f64) -> Result<Self, InvalidLimits> {
        let (min, max) = limits::check(min, max)?;
        Ok(Self { min, max })
    }

    /// Smallest page scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest page scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the range. `NaN` maps to `min`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            self.min
        } else {
            scale.clamp(self.min, self.max)
        }
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: 0.05,
            max: 20.0,
        }
    }
}

impl<'de> Deserialize<'de> for ScaleLimits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawLimits::deserialize(deserializer)?;
        let default = Self::default();
        Self::try_new(raw.min.unwrap_or(default.min), raw.max.unwrap_or(default.max))
            .map_err(D::Error::custom)
    }
}

/// Placement of one page: where its native origin sits and how it is scaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEntry {
    pub(crate) origin: Point,
    pub(crate) scale: f64,
    pub(crate) is_custom_position: bool,
}

impl LayoutEntry {
    /// The computed default entry: `origin` at scale `1.0`, not custom.
    #[must_use]
    pub fn at(origin: Point) -> Self {
        Self {
            origin,
            scale: 1.0,
            is_custom_position: false,
        }
    }

    /// A custom entry with an explicit scale.
    ///
    /// A scale that is not finite and positive becomes `1.0`. [`PageLayout`]
    /// additionally clamps into its [`ScaleLimits`] on every write.
    #[must_use]
    pub fn new(origin: Point, scale: f64) -> Self {
        Self {
            origin,
            scale: if scale.is_finite() && scale > 0.0 { scale } else { 1.0 },
            is_custom_position: true,
        }
    }

    /// Native-space point that maps onto the pan offset.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Page scale factor, always positive.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Whether the user moved or resized this page.
    #[must_use]
    pub fn is_custom_position(&self) -> bool {
        self.is_custom_position
    }
}

/// Owner of every page's [`LayoutEntry`], keyed by [`PageKey`].
///
/// Entries are created lazily by [`PageLayout::get_or_init`] the first time a
/// page is seen and change only through [`PageLayout::rescale`],
/// [`PageLayout::reposition`], [`PageLayout::move_by_screen`],
/// [`PageLayout::reset`], and snapshot restore. Each of those bumps
/// [`PageLayout::revision`].
#[derive(Clone, Debug, Default)]
pub struct PageLayout {
    pub(crate) entries: HashMap<PageKey, LayoutEntry>,
    pub(crate) limits: ScaleLimits,
    revision: u64,
}

impl PageLayout {
    /// Creates an empty layout with default scale limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty layout with the given scale limits.
    #[must_use]
    pub fn with_limits(limits: ScaleLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Scale limits applied to every write.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Number of pages with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no page has an entry yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monotonic counter bumped whenever an entry is created or changed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&PageKey, &LayoutEntry)> {
        self.entries.iter()
    }

    /// The entry for `key`, if one exists.
    #[must_use]
    pub fn entry(&self, key: &PageKey) -> Option<&LayoutEntry> {
        self.entries.get(key)
    }

    /// The entry for `key`, or the default that [`PageLayout::get_or_init`]
    /// would synthesize from `first_seen`, without storing it.
    #[must_use]
    pub fn entry_or_default(&self, key: &PageKey, first_seen: Point) -> LayoutEntry {
        self.entries
            .get(key)
            .copied()
            .unwrap_or_else(|| LayoutEntry::at(first_seen))
    }

    /// Returns the entry for `key`, synthesizing and caching the default if absent.
    ///
    /// The default places `first_seen`, conventionally the page's first native
    /// sample, at the origin with scale `1.0`. Once cached, later calls return
    /// the same entry regardless of `first_seen`.
    pub fn get_or_init(&mut self, key: PageKey, first_seen: Point) -> LayoutEntry {
        if let Some(entry) = self.entries.get(&key) {
            return *entry;
        }
        tracing::debug!(page = %key, x = first_seen.x, y = first_seen.y, "synthesized page layout");
        let entry = LayoutEntry::at(first_seen);
        self.entries.insert(key, entry);
        self.bump_revision();
        entry
    }

    /// Changes the scale of `key` while keeping `anchor` visually fixed.
    ///
    /// With the current origin `O`, scale `s`, and the clamped new scale `s'`:
    ///
    /// ```text
    /// origin' = anchor - (anchor - O) * (s / s')
    /// ```
    ///
    /// The general form is used even when `anchor == O`, so a page that was
    /// repositioned earlier still resizes around the requested point. A page
    /// without an entry is first initialized with `anchor` as its first-seen
    /// point. Marks the entry as custom.
    pub fn rescale(&mut self, key: PageKey, new_scale: f64, anchor: Point) -> LayoutEntry {
        let current = self.get_or_init(key, anchor);
        let scale = self.clamp_scale(&key, new_scale);
        let ratio = current.scale / scale;
        let origin = anchor - (anchor - current.origin) * ratio;
        self.store(key, LayoutEntry::new(origin, scale))
    }

    /// Moves `key` so that `origin` becomes its native origin. Marks the entry
    /// as custom and keeps the current scale.
    pub fn reposition(&mut self, key: PageKey, origin: Point) -> LayoutEntry {
        let current = self.get_or_init(key, origin);
        self.store(key, LayoutEntry::new(origin, current.scale))
    }

    /// Moves `key` by a screen-space delta under `viewport`.
    ///
    /// Returns `None` if the page has no entry yet, since there is nothing on
    /// screen to drag.
    pub fn move_by_screen(
        &mut self,
        key: PageKey,
        delta: Vec2,
        viewport: &Viewport,
    ) -> Option<LayoutEntry> {
        let current = *self.entries.get(&key)?;
        let native_delta = transform::screen_delta_to_native(delta, &current, viewport);
        Some(self.reposition(key, current.origin - native_delta))
    }

    /// Drops custom entries so they revert to computed defaults.
    ///
    /// With `Some(key)` only that page is reset. Default entries are kept,
    /// which makes the call idempotent. Returns the number of entries removed.
    pub fn reset(&mut self, key: Option<&PageKey>) -> usize {
        let removed = match key {
            Some(key) => {
                let custom = self
                    .entries
                    .get(key)
                    .is_some_and(LayoutEntry::is_custom_position);
                if custom {
                    self.entries.remove(key);
                    1
                } else {
                    0
                }
            }
            None => {
                let before = self.entries.len();
                self.entries.retain(|_, entry| !entry.is_custom_position);
                before - self.entries.len()
            }
        };
        if removed > 0 {
            self.bump_revision();
        }
        removed
    }

    /// Screen position of `native` on page `key`, initializing the page with
    /// `native` as its first-seen point if it has no entry.
    pub fn to_screen(&mut self, key: PageKey, native: Point, viewport: &Viewport) -> Point {
        let entry = self.get_or_init(key, native);
        transform::to_screen(native, &entry, viewport)
    }

    /// Native position of `screen` on page `key`, or `None` if the page has no entry.
    #[must_use]
    pub fn to_native(&self, key: &PageKey, screen: Point, viewport: &Viewport) -> Option<Point> {
        self.entries
            .get(key)
            .map(|entry| transform::to_native(screen, entry, viewport))
    }

    pub(crate) fn clamp_scale(&self, key: &PageKey, requested: f64) -> f64 {
        let scale = self.limits.clamp(requested);
        if scale != requested {
            tracing::debug!(page = %key, requested, clamped = scale, "page scale clamped");
        }
        scale
    }

    pub(crate) fn replace_all(&mut self, entries: HashMap<PageKey, LayoutEntry>) {
        self.entries = entries;
        self.bump_revision();
    }

    fn store(&mut self, key: PageKey, entry: LayoutEntry) -> LayoutEntry {
        self.entries.insert(key, entry);
        self.bump_revision();
        entry
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
