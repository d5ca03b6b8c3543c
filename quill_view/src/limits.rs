// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared checks for the scale and zoom ranges.

use serde::Deserialize;
use thiserror::Error;

/// Error returned when a `min`/`max` pair is not a usable factor range.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("invalid limits: need finite 0 < min <= max, got min = {min}, max = {max}")]
pub struct InvalidLimits {
    /// Requested lower bound.
    pub min: f64,
    /// Requested upper bound.
    pub max: f64,
}

/// Wire form of a range; absent bounds take the type's defaults.
#[derive(Deserialize)]
pub(crate) struct RawLimits {
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
}

fn usable(bound: f64) -> bool {
    bound.is_finite() && bound > 0.0
}

pub(crate) fn check(min: f64, max: f64) -> Result<(f64, f64), InvalidLimits> {
    if usable(min) && usable(max) && min <= max {
        Ok((min, max))
    } else {
        Err(InvalidLimits { min, max })
    }
}

/// Replaces unusable bounds with the defaults, then orders the pair.
pub(crate) fn normalize(min: f64, max: f64, default: (f64, f64)) -> (f64, f64) {
    let min = if usable(min) { min } else { default.0 };
    let max = if usable(max) { max } else { default.1 };
    if min <= max { (min, max) } else { (max, min) }
}
