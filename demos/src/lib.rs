// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Quill demos.

use kurbo::Point;
use quill_page::{PageInfo, Stroke, StrokeId};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A small notebook: two pages of handwriting plus one stroke the pen sent
/// without page identity.
#[must_use]
pub fn sample_strokes() -> Vec<Stroke> {
    let page_1 = PageInfo::new(Some(3), Some(27), Some(1), Some(1));
    let page_2 = PageInfo::new(Some(3), Some(27), Some(1), Some(2));
    let wave = |x0: f64, y0: f64| -> Vec<Point> {
        (0..24)
            .map(|i| {
                let t = f64::from(i);
                Point::new(x0 + t * 2.0, y0 + (t * 0.5).sin() * 4.0)
            })
            .collect()
    };

    vec![
        Stroke::new(StrokeId(1), Some(page_1), wave(100.0, 100.0)),
        Stroke::new(StrokeId(2), Some(page_1), wave(100.0, 130.0)),
        Stroke::new(StrokeId(3), Some(page_1), vec![Point::new(160.0, 160.0)]),
        Stroke::new(StrokeId(4), Some(page_2), wave(10.0, 10.0)),
        Stroke::new(StrokeId(5), None, wave(0.0, 0.0)),
    ]
}
