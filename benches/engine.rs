// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the slider engine hot paths.
//!
//! Measures the performance of:
//! - Nearest-step snapping (runs on every pointer move during a drag)
//! - Geometry layout (runs on tariff-list or track-length changes)

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tariff_slider::domain::tariff::{Tariff, TariffList};
use tariff_slider::engine::{snap, step_fractions, PointerEvent, SliderEngine};

fn tariffs(count: usize) -> TariffList {
    let entries = (0..count)
        .map(|i| Tariff::new(format!("{}", i + 1), (i as u32 + 1) * 100))
        .collect();
    TariffList::new(entries).expect("generated ids are unique")
}

/// Benchmark snapping across a spread of pointer values.
fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    let steps = step_fractions(6);
    group.bench_function("snap_six_steps", |b| {
        b.iter(|| {
            for value in [0.0, 0.13, 0.26, 0.41, 0.55, 0.72, 0.9, 1.0] {
                black_box(snap(black_box(value), &steps));
            }
        });
    });

    group.finish();
}

/// Benchmark geometry recomputation for a large tariff set.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    let list = tariffs(100);
    group.bench_function("layout_hundred_markers", |b| {
        b.iter(|| {
            let engine =
                SliderEngine::new(list.clone(), 1200.0).expect("valid configuration");
            black_box(engine.render());
        });
    });

    group.finish();
}

/// Benchmark a full drag gesture through the state machine.
fn bench_drag_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    let list = tariffs(6);
    group.bench_function("drag_gesture", |b| {
        b.iter(|| {
            let mut engine =
                SliderEngine::new(list.clone(), 300.0).expect("valid configuration");
            engine.handle_pointer(PointerEvent::Press { x: 0.0 });
            for step in 1..=20 {
                engine.handle_pointer(PointerEvent::Move {
                    x: step as f32 * 15.0,
                });
            }
            black_box(engine.handle_pointer(PointerEvent::Release { x: 300.0 }));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_snap, bench_layout, bench_drag_gesture);
criterion_main!(benches);
