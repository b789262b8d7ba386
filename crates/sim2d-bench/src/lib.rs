//! Benchmark profiles and utilities for the sim2d sandbox.
//!
//! Provides pre-built grid sizes and field seeding helpers shared by the
//! Criterion benches:
//!
//! - [`REFERENCE_NX`]/[`REFERENCE_NY`]: the interactive default (~49K cells)
//! - [`STRESS_NX`]/[`STRESS_NY`]: ~262K cells for stress runs
//! - [`seed_field`]: deterministic non-trivial field contents

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Reference grid width, matching the interactive default.
pub const REFERENCE_NX: usize = 256;
/// Reference grid height.
pub const REFERENCE_NY: usize = 192;

/// Stress grid width (~5x the reference cell count).
pub const STRESS_NX: usize = 512;
/// Stress grid height.
pub const STRESS_NY: usize = 512;

/// Fill a field with a deterministic low-frequency pattern so that
/// benchmarked steps do real arithmetic instead of shuffling zeros.
pub fn seed_field(u: &mut [f32], nx: usize) {
    for (k, v) in u.iter_mut().enumerate() {
        let i = (k % nx) as f32;
        let j = (k / nx) as f32;
        *v = (0.05 * i).sin() * (0.07 * j).cos();
    }
}
