//! Criterion micro-benchmarks for engine stepping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim2d_bench::{seed_field, REFERENCE_NX, REFERENCE_NY, STRESS_NX, STRESS_NY};
use sim2d_core::Integrator;
use sim2d_engines::{Heat2D, Life2D, SubstepController, Wave2D};

/// Benchmark: one FTCS step on the reference grid.
fn bench_heat_step_reference(c: &mut Criterion) {
    let mut heat = Heat2D::new(REFERENCE_NX, REFERENCE_NY).unwrap();
    seed_field(heat.field_mut(), REFERENCE_NX);

    c.bench_function("heat_step_reference", |b| {
        b.iter(|| {
            heat.step();
            black_box(heat.field());
        });
    });
}

/// Benchmark: one FTCS step on the stress grid.
fn bench_heat_step_stress(c: &mut Criterion) {
    let mut heat = Heat2D::new(STRESS_NX, STRESS_NY).unwrap();
    seed_field(heat.field_mut(), STRESS_NX);

    c.bench_function("heat_step_stress", |b| {
        b.iter(|| {
            heat.step();
            black_box(heat.field());
        });
    });
}

/// Benchmark: one leapfrog step on the reference grid.
fn bench_wave_step_reference(c: &mut Criterion) {
    let mut wave = Wave2D::new(REFERENCE_NX, REFERENCE_NY).unwrap();
    seed_field(wave.field_mut(), REFERENCE_NX);

    c.bench_function("wave_step_reference", |b| {
        b.iter(|| {
            wave.step();
            black_box(wave.field());
        });
    });
}

/// Benchmark: one Life generation on the reference grid.
fn bench_life_step_reference(c: &mut Criterion) {
    let mut life = Life2D::new(REFERENCE_NX, REFERENCE_NY);
    life.randomize(0.15, &mut ChaCha8Rng::seed_from_u64(12345));

    c.bench_function("life_step_reference", |b| {
        b.iter(|| {
            life.step();
            black_box(life.cells());
        });
    });
}

/// Benchmark: a substepped advance with dt pinned at 5x the stability
/// bound, so every frame splits into 5 engine steps.
fn bench_heat_substepped_advance(c: &mut Criterion) {
    let mut heat = Heat2D::new(REFERENCE_NX, REFERENCE_NY).unwrap();
    seed_field(heat.field_mut(), REFERENCE_NX);
    let dt = heat.stable_dt_max() * 5.0;
    heat.set_dt(dt);
    let controller = SubstepController::new();

    c.bench_function("heat_substepped_advance_5x", |b| {
        b.iter(|| {
            let taken = controller.advance(&mut heat);
            black_box(taken);
        });
    });
}

criterion_group!(
    benches,
    bench_heat_step_reference,
    bench_heat_step_stress,
    bench_wave_step_reference,
    bench_life_step_reference,
    bench_heat_substepped_advance,
);
criterion_main!(benches);
