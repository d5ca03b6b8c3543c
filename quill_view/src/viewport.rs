// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::limits::{self, InvalidLimits, RawLimits};

/// Allowed range for the global zoom factor.
///
/// Both bounds are finite and positive with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Creates limits, normalizing so that `min <= max`.
    ///
    /// A bound that is not finite and positive is replaced by its default.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let default = Self::default();
        let (min, max) = limits::normalize(min, max, (default.min, default.max));
        Self { min, max }
    }

    /// Creates limits, rejecting any range [`ZoomLimits::new`] would repair.
    pub fn try_new(min: f64, max: f64) -> Result<Self, InvalidLimits> {
        let (min, max) = limits::check(min, max)?;
        Ok(Self { min, max })
    }

    /// Smallest zoom factor.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest zoom factor.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into the range. `NaN` maps to `min`.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            self.min
        } else {
            zoom.clamp(self.min, self.max)
        }
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.05,
            max: 50.0,
        }
    }
}

impl<'de> Deserialize<'de> for ZoomLimits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawLimits::deserialize(deserializer)?;
        let default = Self::default();
        Self::try_new(raw.min.unwrap_or(default.min), raw.max.unwrap_or(default.max))
            .map_err(D::Error::custom)
    }
}

/// Global pan and zoom applied on top of every page's layout.
///
/// Screen coordinates are obtained from page-space coordinates by scaling with
/// [`Viewport::zoom`] and then translating by [`Viewport::pan`]. There is a
/// single viewport per canvas; pages never carry their own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pan: Vec2,
    zoom: f64,
    limits: ZoomLimits,
}

impl Viewport {
    /// Creates a viewport with zero pan, zoom `1.0`, and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(ZoomLimits::default())
    }

    /// Creates an identity viewport with the given zoom limits.
    #[must_use]
    pub fn with_limits(limits: ZoomLimits) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: limits.clamp(1.0),
            limits,
        }
    }

    /// Current pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Current zoom factor, always positive.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits and clamps the current zoom into them.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.zoom = limits.clamp(self.zoom);
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, pan: Vec2) {
        if pan.is_finite() {
            self.pan = pan;
        }
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.set_pan(self.pan + delta);
    }

    /// Sets the zoom factor, clamped into the limits.
    ///
    /// Non-finite or non-positive requests are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = self.limits.clamp(zoom);
        }
    }

    /// Multiplies the zoom by `factor` while keeping `anchor` (screen space) fixed.
    pub fn zoom_about_screen_point(&mut self, anchor: Point, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let new_zoom = self.limits.clamp(self.zoom * factor);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let page_space = self.screen_to_page_space(anchor);
        self.zoom = new_zoom;
        self.pan = anchor.to_vec2() - page_space.to_vec2() * new_zoom;
    }

    /// Maps a scaled page-space point (before pan/zoom) to the screen.
    #[must_use]
    pub fn page_space_to_screen(&self, pt: Point) -> Point {
        Point::new(pt.x * self.zoom + self.pan.x, pt.y * self.zoom + self.pan.y)
    }

    /// Inverse of [`Viewport::page_space_to_screen`].
    #[must_use]
    pub fn screen_to_page_space(&self, pt: Point) -> Point {
        Point::new((pt.x - self.pan.x) / self.zoom, (pt.y - self.pan.y) / self.zoom)
    }

    /// The pan/zoom part of the screen transform as an affine map.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
