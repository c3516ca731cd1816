//! Criterion micro-benchmarks for beats and manual ripples.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use signal_core::NodeId;
use signal_bench::{bus_field, reference_profile, stress_profile};

/// Benchmark: one forced beat over the 64x64 reference wiring.
fn bench_beat_reference(c: &mut Criterion) {
    let mut world = reference_profile(42);
    c.bench_function("beat_reference_64x64", |b| {
        b.iter(|| black_box(world.beat()));
    });
}

/// Benchmark: one forced beat over the 256x256 stress wiring.
fn bench_beat_stress(c: &mut Criterion) {
    let mut world = stress_profile(42);
    c.bench_function("beat_stress_256x256", |b| {
        b.iter(|| black_box(world.beat()));
    });
}

/// Benchmark: a manual trigger rippling through a solid bus field.
///
/// The beat before each trigger replenishes every budget, so each
/// iteration walks the whole field.
fn bench_bus_field_ripple(c: &mut Criterion) {
    let mut world = bus_field(128);
    let centre = NodeId(64 * 128 + 64);
    c.bench_function("bus_field_ripple_128x128", |b| {
        b.iter(|| {
            world.beat();
            black_box(world.trigger(centre))
        });
    });
}

/// Benchmark: headless frames at 60 fps, beats included as they fall due.
fn bench_frames(c: &mut Criterion) {
    let mut world = reference_profile(7);
    c.bench_function("frame_reference_60fps", |b| {
        b.iter(|| black_box(world.step(1.0 / 60.0)));
    });
}

criterion_group!(
    benches,
    bench_beat_reference,
    bench_beat_stress,
    bench_bus_field_ripple,
    bench_frames
);
criterion_main!(benches);
