// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use quill_hit::{HitParams, HitTester, StrokeRef};
use quill_page::PageKey;
use quill_view::{PageLayout, Viewport};

const PAGES: u32 = 4;

/// `n` short zig-zag strokes per page, laid out on a grid.
fn gen_strokes(n: usize, samples: usize) -> Vec<(PageKey, Vec<Point>)> {
    let mut out = Vec::with_capacity(n * PAGES as usize);
    let side = (n as f64).sqrt().ceil() as usize;
    for page in 0..PAGES {
        let key = PageKey::new(0, 0, 1, page);
        for i in 0..n {
            let x0 = (i % side) as f64 * 20.0;
            let y0 = (i / side) as f64 * 20.0;
            let points = (0..samples)
                .map(|s| Point::new(x0 + s as f64, y0 + (s % 2) as f64 * 4.0))
                .collect();
            out.push((key, points));
        }
    }
    out
}

fn layout_for(strokes: &[(PageKey, Vec<Point>)]) -> PageLayout {
    let mut layout = PageLayout::new();
    for (key, points) in strokes {
        layout.get_or_init(*key, points[0]);
    }
    for page in 0..PAGES {
        let key = PageKey::new(0, 0, 1, page);
        layout.reposition(key, Point::new(-(page as f64) * 1_000.0, 0.0));
        layout.rescale(key, 0.5 + page as f64 * 0.25, Point::ORIGIN);
    }
    layout
}

fn refs(strokes: &[(PageKey, Vec<Point>)]) -> impl Iterator<Item = StrokeRef<'_>> + Clone {
    strokes.iter().enumerate().map(|(index, (key, points))| StrokeRef {
        index,
        key: *key,
        points,
    })
}

fn bench_indices_within(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/indices_within");
    let viewport = Viewport::new();

    for n in [256usize, 1_024, 4_096] {
        let strokes = gen_strokes(n, 16);
        let layout = layout_for(&strokes);
        let hits = HitTester::new(&layout, &viewport, HitParams::default());
        group.throughput(Throughput::Elements(strokes.len() as u64));

        group.bench_with_input(BenchmarkId::new("small_box", n), &strokes, |b, strokes| {
            b.iter(|| {
                black_box(hits.indices_within(refs(strokes), Rect::new(0.0, 0.0, 60.0, 60.0)))
            });
        });
        group.bench_with_input(BenchmarkId::new("everything", n), &strokes, |b, strokes| {
            b.iter(|| {
                black_box(hits.indices_within(
                    refs(strokes),
                    Rect::new(-1e6, -1e6, 1e6, 1e6),
                ))
            });
        });
    }

    group.finish();
}

fn bench_stroke_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/stroke_at");
    let viewport = Viewport::new();

    for n in [256usize, 1_024, 4_096] {
        let strokes = gen_strokes(n, 16);
        let layout = layout_for(&strokes);
        let hits = HitTester::new(&layout, &viewport, HitParams::default());
        group.throughput(Throughput::Elements(strokes.len() as u64));

        group.bench_with_input(BenchmarkId::new("grid", n), &strokes, |b, strokes| {
            b.iter(|| black_box(hits.stroke_at(refs(strokes), Point::new(45.0, 41.0))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_indices_within, bench_stroke_at);
criterion_main!(benches);
