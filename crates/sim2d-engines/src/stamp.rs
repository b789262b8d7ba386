//! Shared circular-stamp helper for the PDE engines.
//!
//! Centralised here because heat and wave painting are identical:
//! an additive disc applied to the current field, with the scan range
//! clamped to the interior (the outermost ring is forced to zero every
//! step, so painting it would be invisible).

/// Add `amp` to every cell of `u` within Euclidean `radius` of `(ix, iy)`.
///
/// The scan covers `[max(1, c-radius), min(n-1, c+radius))` on each axis —
/// the exclusive upper bound matches the reference behaviour and keeps the
/// stamp off the boundary ring. Membership is `dx² + dy² <= radius²`.
/// Centers anywhere (including off-grid) are handled by range clamping;
/// a non-positive radius paints nothing.
pub(crate) fn stamp_disc(
    nx: usize,
    ny: usize,
    u: &mut [f32],
    ix: i32,
    iy: i32,
    radius: i32,
    amp: f32,
) {
    let nx_i = nx as i32;
    let ny_i = ny as i32;
    // Widen before squaring and saturate the scan bounds: an absurd
    // interactive radius degrades to a full-interior stamp, never a panic.
    let r2 = i64::from(radius) * i64::from(radius);
    let y0 = iy.saturating_sub(radius).max(1);
    let y1 = iy.saturating_add(radius).min(ny_i - 1);
    let x0 = ix.saturating_sub(radius).max(1);
    let x1 = ix.saturating_add(radius).min(nx_i - 1);
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = i64::from(x) - i64::from(ix);
            let dy = i64::from(y) - i64::from(iy);
            if dx * dx + dy * dy <= r2 {
                u[y as usize * nx + x as usize] += amp;
            }
        }
    }
}
