// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use quill_canvas::CanvasState;
use quill_gesture::Modifiers;
use quill_page::{PageInfo, Stroke, StrokeId};
use quill_view::LayoutSnapshot;

fn canvas(pages: u32, per_page: u32) -> CanvasState {
    let mut strokes = Vec::new();
    for page in 0..pages {
        let info = PageInfo::new(Some(0), Some(0), Some(1), Some(page));
        for i in 0..per_page {
            let x = f64::from(i % 32) * 25.0;
            let y = f64::from(i / 32) * 25.0;
            let points: Vec<Point> = (0..12)
                .map(|s| Point::new(x + f64::from(s), y + f64::from(s % 3)))
                .collect();
            strokes.push(Stroke::new(
                StrokeId((u64::from(page) << 32) | u64::from(i)),
                Some(info),
                points,
            ));
        }
    }
    let mut canvas = CanvasState::default();
    canvas.set_strokes(strokes);
    canvas
}

fn bench_box_select(c: &mut Criterion) {
    let base = canvas(8, 512);
    c.bench_function("canvas/box_select", |b| {
        b.iter_batched(
            || base.clone(),
            |mut canvas| {
                canvas.start_pointer(Point::new(-5.0, -5.0), Modifiers::NONE);
                for step in 1..=20 {
                    canvas.move_pointer(Point::new(f64::from(step) * 10.0, f64::from(step) * 10.0));
                }
                canvas.end_pointer(Point::new(200.0, 200.0));
                black_box(canvas.selection().len());
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut base = canvas(64, 1);
    for (i, key) in (0..64).filter_map(|i| base.page_of(i)).enumerate().collect::<Vec<_>>() {
        base.rescale_page(key, 1.0 + i as f64 / 64.0, None);
    }
    let json = base.layout_snapshot().to_json().unwrap_or_default();

    c.bench_function("canvas/snapshot_to_json", |b| {
        b.iter(|| black_box(base.layout_snapshot().to_json()));
    });
    c.bench_function("canvas/snapshot_restore", |b| {
        b.iter_batched(
            || base.clone(),
            |mut canvas| {
                let snapshot: LayoutSnapshot = serde_json::from_str(&json).unwrap_or_default();
                black_box(canvas.restore_layout(&snapshot).is_ok());
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_box_select, bench_snapshot);
criterion_main!(benches);
