// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the cursor-trail chain advance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

use folio_event_state::pointer::TrailChain;

fn bench_trail_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("trail_advance");
    for len in [21_usize, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut trail = TrailChain::new(len);
            let mut t = 0.0_f64;
            b.iter(|| {
                // A moving pointer; the exact path is irrelevant.
                t += 1.0;
                let head = Point::new(t % 1280.0, (t * 0.61) % 720.0);
                trail.advance(black_box(head));
                black_box(trail.node(len - 1))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_trail_advance);
criterion_main!(benches);
