// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless replay of a short selection session.
//!
//! Feeds a scripted sequence of pointer events into a canvas and prints the
//! selection after each gesture, then the persisted layout.
//!
//! Run:
//! - `cargo run -p quill_demos --bin replay`
//! - `RUST_LOG=debug cargo run -p quill_demos --bin replay -- config.json`

use std::error::Error;

use kurbo::Point;
use quill_canvas::{CanvasConfig, CanvasState};
use quill_gesture::{InputEvent, Modifiers};

fn main() -> Result<(), Box<dyn Error>> {
    quill_demos::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => CanvasConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => CanvasConfig::default(),
    };
    let mut canvas = CanvasState::new(config);
    canvas.set_strokes(quill_demos::sample_strokes());
    tracing::info!(
        strokes = canvas.strokes().len(),
        fallback = canvas.diagnostic_count(),
        "canvas ready"
    );

    let down = |x, y, modifiers| InputEvent::PointerDown {
        pos: Point::new(x, y),
        modifiers,
    };
    let to = |x, y| InputEvent::PointerMove {
        pos: Point::new(x, y),
    };
    let up = |x, y| InputEvent::PointerUp {
        pos: Point::new(x, y),
    };

    let script: [(&str, Vec<InputEvent>); 6] = [
        ("click first stroke", vec![down(2.0, 0.0, Modifiers::NONE), up(3.0, 1.0)]),
        (
            "box over page 1",
            vec![down(-10.0, -10.0, Modifiers::NONE), to(20.0, 20.0), to(70.0, 70.0), up(70.0, 70.0)],
        ),
        ("toggle the dot", vec![down(60.0, 60.0, Modifiers::TOGGLE), up(60.0, 60.0)]),
        (
            "cancelled box",
            vec![down(-10.0, -10.0, Modifiers::NONE), to(90.0, 90.0), InputEvent::Escape],
        ),
        ("pan", vec![down(0.0, 0.0, Modifiers::PAN), to(15.0, 5.0), up(15.0, 5.0)]),
        ("select all", vec![InputEvent::SelectAll]),
    ];

    for (label, events) in script {
        for event in events {
            if let Some(hint) = canvas.handle(event) {
                tracing::debug!(?hint, "render hint");
            }
        }
        println!("{label:>18}: selected {:?}", canvas.selection().indices());
    }

    if let Some(key) = canvas.page_of(0) {
        canvas.rescale_page(key, 1.5, None);
    }
    println!("{}", canvas.layout_snapshot().to_json()?);
    Ok(())
}
