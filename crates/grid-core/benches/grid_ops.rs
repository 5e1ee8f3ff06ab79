// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for grid copies and clamped reads.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_core::{Grid, GridView};

/// Side lengths of the square grids under test.
const SIZES: [usize; 3] = [64, 256, 1024];

/// Extra elements per row in the padded source buffer.
const PADDING: usize = 16;

fn padded_source(side: usize) -> Vec<f32> {
    (0..side * (side + PADDING)).map(|i| i as f32).collect()
}

fn bench_copy_from_padded_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_from_padded_view");
    for side in SIZES {
        let data = padded_source(side);
        let src = GridView::new(side, side, side + PADDING, &data).unwrap();
        let mut dst: Grid<f32> = Grid::new();
        group.bench_with_input(BenchmarkId::from_parameter(side), &src, |b, src| {
            b.iter(|| dst.assign_from_view(black_box(src)));
        });
    }
    group.finish();
}

fn bench_clone_owned(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_from_owned");
    for side in SIZES {
        let src: Grid<f32> = Grid::with_stride(side, side, side + PADDING);
        let mut dst: Grid<f32> = Grid::new();
        group.bench_with_input(BenchmarkId::from_parameter(side), &src, |b, src| {
            b.iter(|| dst.clone_from(black_box(src)));
        });
    }
    group.finish();
}

fn bench_clamped_border_sum(c: &mut Criterion) {
    let side = 256;
    let data = padded_source(side);
    let view = GridView::new(side, side, side + PADDING, &data).unwrap();
    let n = side as isize;

    c.bench_function("clamp_get_border_sum", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for i in -1..=n {
                sum += *view.clamp_get(i, -1) + *view.clamp_get(i, n);
            }
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_copy_from_padded_view,
    bench_clone_owned,
    bench_clamped_border_sum
);
criterion_main!(benches);
