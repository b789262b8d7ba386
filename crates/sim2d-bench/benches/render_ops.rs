//! Criterion micro-benchmarks for frame shading.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sim2d_bench::{seed_field, REFERENCE_NX, REFERENCE_NY};
use sim2d_core::Command;
use sim2d_render::{shade_heat, shade_life, shade_wave, Palette};
use sim2d_sandbox::Session;

/// Benchmark: shade a seeded heat field through each palette.
fn bench_shade_heat_reference(c: &mut Criterion) {
    let mut field = vec![0.0f32; REFERENCE_NX * REFERENCE_NY];
    seed_field(&mut field, REFERENCE_NX);
    let mut out = vec![0u8; field.len() * 4];

    for palette in [Palette::Gray, Palette::Fire, Palette::BlueRed] {
        c.bench_function(&format!("shade_heat_{palette:?}"), |b| {
            b.iter(|| {
                shade_heat(&field, palette, &mut out).unwrap();
                black_box(&out);
            });
        });
    }
}

/// Benchmark: shade a signed wave field (mid-scale normalization path).
fn bench_shade_wave_reference(c: &mut Criterion) {
    let mut field = vec![0.0f32; REFERENCE_NX * REFERENCE_NY];
    seed_field(&mut field, REFERENCE_NX);
    let mut out = vec![0u8; field.len() * 4];

    c.bench_function("shade_wave_fire", |b| {
        b.iter(|| {
            shade_wave(&field, Palette::Fire, &mut out).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: shade a random cell field.
fn bench_shade_life_reference(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let cells: Vec<u8> = (0..REFERENCE_NX * REFERENCE_NY)
        .map(|_| (rng.random::<f64>() < 0.15) as u8)
        .collect();
    let mut out = vec![0u8; cells.len() * 4];

    c.bench_function("shade_life_fire", |b| {
        b.iter(|| {
            shade_life(&cells, Palette::Fire, &mut out).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: a full interactive frame, advance plus shade, through the
/// session layer.
fn bench_session_frame(c: &mut Criterion) {
    let mut session = Session::new(REFERENCE_NX, REFERENCE_NY).unwrap();
    session.apply(Command::Paint {
        x: (REFERENCE_NX / 2) as i32,
        y: (REFERENCE_NY / 2) as i32,
        radius: 6,
        amp: 0.5,
    });

    c.bench_function("session_advance_and_frame", |b| {
        b.iter(|| {
            session.advance();
            let frame = session.frame().unwrap();
            black_box(frame);
        });
    });
}

criterion_group!(
    benches,
    bench_shade_heat_reference,
    bench_shade_wave_reference,
    bench_shade_life_reference,
    bench_session_frame,
);
criterion_main!(benches);
