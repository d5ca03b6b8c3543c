// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use quill_selection::SelectionSet;

fn bench_replace_and_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/batch");

    for len in [128usize, 2_048, 32_768] {
        let all: Vec<usize> = (0..len).rev().collect();
        let evens: Vec<usize> = (0..len).step_by(2).collect();
        group.throughput(Throughput::Elements(len as u64));

        // Select-all style input, reversed to exercise the sort.
        group.bench_with_input(BenchmarkId::new("replace_with", len), &all, |b, all| {
            b.iter_batched(
                SelectionSet::new,
                |mut sel| {
                    sel.replace_with(all.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });

        // Additive box select on top of an existing selection.
        group.bench_with_input(BenchmarkId::new("extend_with", len), &all, |b, all| {
            b.iter_batched(
                || evens.iter().copied().collect::<SelectionSet>(),
                |mut sel| {
                    sel.extend_with(all.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/toggle");

    for len in [128usize, 32_768] {
        let base: SelectionSet = (0..len).step_by(2).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut sel| {
                    for i in (0..len).step_by(7) {
                        sel.toggle(i);
                    }
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_replace_and_extend, bench_toggle);
criterion_main!(benches);
