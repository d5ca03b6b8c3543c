// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use quill_gesture::GestureConfig;
use quill_hit::HitParams;
use quill_view::{ScaleLimits, ZoomLimits};
use serde::{Deserialize, Serialize};

use crate::CanvasError;

/// Every tunable of a [`CanvasState`](crate::CanvasState).
///
/// Missing fields take their defaults, so `{}` is a valid configuration:
///
/// ```rust
/// use quill_canvas::CanvasConfig;
///
/// let config = CanvasConfig::from_json(r#"{ "gesture": { "drag_threshold": 8.0 } }"#)?;
/// assert_eq!(config.gesture.drag_threshold, 8.0);
/// assert_eq!(config.hit.stroke_tolerance, 4.0);
/// # Ok::<(), quill_canvas::CanvasError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Click versus drag disambiguation.
    pub gesture: GestureConfig,
    /// Hit-test tolerances in screen pixels.
    pub hit: HitParams,
    /// Allowed per-page scale range.
    pub scale_limits: ScaleLimits,
    /// Allowed viewport zoom range.
    pub zoom_limits: ZoomLimits,
}

impl CanvasConfig {
    /// Parses and validates a configuration from JSON.
    pub fn from_json(text: &str) -> Result<Self, CanvasError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every value is usable.
    ///
    /// Scale and zoom limits are valid by construction and need no check here.
    pub fn validate(&self) -> Result<(), CanvasError> {
        non_negative("gesture.drag_threshold", self.gesture.drag_threshold)?;
        non_negative("hit.point_radius", self.hit.point_radius)?;
        non_negative("hit.stroke_tolerance", self.hit.stroke_tolerance)?;
        Ok(())
    }

    /// Returns a copy with every unusable value replaced by its default.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let gesture = GestureConfig::default();
        let hit = HitParams::default();
        repair(
            "gesture.drag_threshold",
            &mut self.gesture.drag_threshold,
            gesture.drag_threshold,
        );
        repair("hit.point_radius", &mut self.hit.point_radius, hit.point_radius);
        repair(
            "hit.stroke_tolerance",
            &mut self.hit.stroke_tolerance,
            hit.stroke_tolerance,
        );
        self
    }
}

fn repair(key: &'static str, value: &mut f64, default: f64) {
    if non_negative(key, *value).is_err() {
        tracing::warn!(key, value = *value, default, "replacing unusable setting");
        *value = default;
    }
}

fn non_negative(key: &'static str, value: f64) -> Result<(), CanvasError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CanvasError::InvalidSetting {
            key,
            reason: "must be a finite, non-negative number",
        })
    }
}
