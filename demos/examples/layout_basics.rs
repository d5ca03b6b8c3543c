// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page layout basics.
//!
//! Lay out two pages, resize one around an anchor, and show that the anchor
//! stays put on screen while everything else moves.
//!
//! Run:
//! - `cargo run -p quill_demos --example layout_basics`

use kurbo::{Point, Vec2};
use quill_page::PageKey;
use quill_view::{PageLayout, Viewport, to_screen};

fn main() {
    quill_demos::init_logging();

    let left = PageKey::new(0, 0, 1, 1);
    let right = PageKey::new(0, 0, 1, 2);
    let mut layout = PageLayout::new();
    let mut viewport = Viewport::new();
    viewport.set_pan(Vec2::new(40.0, 40.0));

    layout.get_or_init(left, Point::new(120.0, 80.0));
    layout.get_or_init(right, Point::new(5.0, 5.0));
    layout.reposition(right, Point::new(-400.0, 5.0));

    let anchor = Point::new(150.0, 100.0);
    let corner = Point::new(300.0, 300.0);
    let show = |label: &str, layout: &PageLayout| {
        let Some(entry) = layout.entry(&left) else {
            return;
        };
        println!(
            "{label:>7}: scale {:>4} anchor {:?} corner {:?}",
            entry.scale(),
            to_screen(anchor, entry, &viewport),
            to_screen(corner, entry, &viewport),
        );
    };

    show("before", &layout);
    for scale in [2.0, 0.5, 40.0] {
        layout.rescale(left, scale, anchor);
        show("after", &layout);
    }
}
