// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between a page's native coordinates and screen pixels.
//!
//! ```text
//! screen = (native - origin) * scale * zoom + pan
//! native = (screen - pan) / (scale * zoom) + origin
//! ```

use kurbo::{Affine, Point, Vec2};

use crate::{LayoutEntry, Viewport};

/// Maps a native point on a page to screen pixels.
#[must_use]
pub fn to_screen(native: Point, entry: &LayoutEntry, viewport: &Viewport) -> Point {
    let k = entry.scale * viewport.zoom();
    let pan = viewport.pan();
    Point::new(
        (native.x - entry.origin.x) * k + pan.x,
        (native.y - entry.origin.y) * k + pan.y,
    )
}

/// Maps a screen point back into a page's native coordinates.
///
/// Inverse of [`to_screen`] up to floating-point rounding.
#[must_use]
pub fn to_native(screen: Point, entry: &LayoutEntry, viewport: &Viewport) -> Point {
    let k = entry.scale * viewport.zoom();
    let pan = viewport.pan();
    Point::new(
        (screen.x - pan.x) / k + entry.origin.x,
        (screen.y - pan.y) / k + entry.origin.y,
    )
}

/// The page-to-screen mapping as an affine transform, for renderers.
#[must_use]
pub fn page_to_screen(entry: &LayoutEntry, viewport: &Viewport) -> Affine {
    viewport.affine() * Affine::scale(entry.scale) * Affine::translate(-entry.origin.to_vec2())
}

pub(crate) fn screen_delta_to_native(delta: Vec2, entry: &LayoutEntry, viewport: &Viewport) -> Vec2 {
    delta / (entry.scale * viewport.zoom())
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use proptest::prelude::*;

    use super::{page_to_screen, to_native, to_screen};
    use crate::{LayoutEntry, Viewport};

    fn viewport(pan: Vec2, zoom: f64) -> Viewport {
        let mut vp = Viewport::new();
        vp.set_pan(pan);
        vp.set_zoom(zoom);
        vp
    }

    #[test]
    fn identity_layout_is_pan_zoom_only() {
        let entry = LayoutEntry::at(Point::ORIGIN);
        let vp = viewport(Vec2::new(10.0, 20.0), 2.0);
        assert_eq!(to_screen(Point::new(3.0, 4.0), &entry, &vp), Point::new(16.0, 28.0));
    }

    #[test]
    fn origin_maps_to_pan() {
        let entry = LayoutEntry::new(Point::new(120.0, -40.0), 3.0);
        let vp = viewport(Vec2::new(5.0, 7.0), 0.5);
        assert_eq!(to_screen(entry.origin(), &entry, &vp), Point::new(5.0, 7.0));
    }

    #[test]
    fn affine_agrees_with_formula() {
        let entry = LayoutEntry::new(Point::new(12.0, 8.0), 1.75);
        let vp = viewport(Vec2::new(-33.0, 41.0), 1.2);
        let pt = Point::new(-4.0, 19.5);
        let a = page_to_screen(&entry, &vp) * pt;
        let b = to_screen(pt, &entry, &vp);
        assert!((a - b).hypot() < 1e-9);
    }

    proptest! {
        #[test]
        fn native_screen_roundtrip(
            x in -1.0e4..1.0e4_f64,
            y in -1.0e4..1.0e4_f64,
            ox in -1.0e4..1.0e4_f64,
            oy in -1.0e4..1.0e4_f64,
            scale in 0.05..20.0_f64,
            px in -1.0e4..1.0e4_f64,
            py in -1.0e4..1.0e4_f64,
            zoom in 0.05..50.0_f64,
        ) {
            let entry = LayoutEntry::new(Point::new(ox, oy), scale);
            let vp = viewport(Vec2::new(px, py), zoom);
            let p = Point::new(x, y);
            let back = to_native(to_screen(p, &entry, &vp), &entry, &vp);
            let tol = 1e-9 * (1.0 + x.abs().max(y.abs()).max(ox.abs()).max(oy.abs()))
                + 1e-9 * (px.abs().max(py.abs())) / (scale * zoom);
            prop_assert!((back.x - x).abs() <= tol, "x: {} vs {}", back.x, x);
            prop_assert!((back.y - y).abs() <= tol, "y: {} vs {}", back.y, y);
        }
    }
}
