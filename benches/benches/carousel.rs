// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the carousel phase function and engine hot path.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use folio_carousel::{
    CarouselEngine, DEFAULT_SCROLL_END, ScrollDirection, panel_transform,
};

/// Evaluating the full strip once, as a renderer does per frame.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_transform_full_deck");
    for len in [10_usize, 24, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut position = 0.0;
            b.iter(|| {
                position += 0.013;
                let mut acc = 0.0;
                for index in 0..len {
                    let transform = panel_transform(black_box(position), index, len);
                    acc += transform.x_percent + transform.opacity;
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

/// A sustained scroll: one surface update per simulated frame.
fn bench_engine_scroll(c: &mut Criterion) {
    c.bench_function("engine_scroll_frame", |b| {
        let mut engine = CarouselEngine::new(10);
        engine.bind_scroll_surface(DEFAULT_SCROLL_END);
        let mut offset = 0.0;
        let mut now_ms = 0;
        b.iter(|| {
            offset = (offset + 7.0) % (DEFAULT_SCROLL_END - 2.0);
            now_ms += 16;
            let command = engine.on_scroll(black_box(offset), ScrollDirection::Forward, now_ms);
            black_box(engine.poll(now_ms));
            black_box(command)
        });
    });
}

criterion_group!(benches, bench_transform, bench_engine_scroll);
criterion_main!(benches);
