//! Per-mode field normalization and pixel fill.
//!
//! Each shader normalizes its field for the current frame, then writes one
//! RGBA8 pixel per cell into the caller's buffer. Normalization is
//! relative: heat scales by the frame's maximum, wave centers zero at 0.5
//! and scales by the peak magnitude, life is already binary. The epsilon
//! floor keeps all-zero frames from dividing by zero.

use crate::error::RenderError;
use crate::palette::Palette;

/// Floor on the normalization denominator.
const NORM_FLOOR: f32 = 1e-6;

fn check_len(cells: usize, out: &[u8]) -> Result<(), RenderError> {
    if out.len() != cells * 4 {
        return Err(RenderError::FrameLengthMismatch {
            cells,
            bytes: out.len(),
        });
    }
    Ok(())
}

/// Shade a heat field: each cell is scaled by the frame's maximum value.
///
/// An all-zero (or all-negative) frame renders as the palette's zero color.
pub fn shade_heat(field: &[f32], palette: Palette, out: &mut [u8]) -> Result<(), RenderError> {
    check_len(field.len(), out)?;
    let mut vmax = NORM_FLOOR;
    for &v in field {
        vmax = vmax.max(v);
    }
    let inv = 1.0 / vmax;
    for (v, pixel) in field.iter().zip(out.chunks_exact_mut(4)) {
        pixel.copy_from_slice(&palette.rgba(v * inv));
    }
    Ok(())
}

/// Shade a wave field: zero displacement maps to mid-scale, the frame's
/// peak magnitude to the ends.
pub fn shade_wave(field: &[f32], palette: Palette, out: &mut [u8]) -> Result<(), RenderError> {
    check_len(field.len(), out)?;
    let mut vmax = NORM_FLOOR;
    for &v in field {
        vmax = vmax.max(v.abs());
    }
    let inv = 0.5 / vmax;
    for (v, pixel) in field.iter().zip(out.chunks_exact_mut(4)) {
        pixel.copy_from_slice(&palette.rgba(0.5 + v * inv));
    }
    Ok(())
}

/// Shade a cell field: dead cells at 0, live cells at 1.
pub fn shade_life(cells: &[u8], palette: Palette, out: &mut [u8]) -> Result<(), RenderError> {
    check_len(cells.len(), out)?;
    for (c, pixel) in cells.iter().zip(out.chunks_exact_mut(4)) {
        let v = if *c != 0 { 1.0 } else { 0.0 };
        pixel.copy_from_slice(&palette.rgba(v));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_scales_by_frame_maximum() {
        let field = [0.0, 2.0, 4.0, 1.0];
        let mut out = vec![0u8; 16];
        shade_heat(&field, Palette::Gray, &mut out).unwrap();
        assert_eq!(&out[0..4], &[0, 0, 0, 255]);
        assert_eq!(&out[4..8], &[127, 127, 127, 255]);
        assert_eq!(&out[8..12], &[255, 255, 255, 255]);
    }

    #[test]
    fn heat_all_zero_frame_is_the_zero_color() {
        let field = [0.0f32; 9];
        let mut out = vec![1u8; 36];
        shade_heat(&field, Palette::BlueRed, &mut out).unwrap();
        for pixel in out.chunks_exact(4) {
            assert_eq!(pixel, &[0, 0, 255, 255]);
        }
    }

    #[test]
    fn wave_centers_zero_at_mid_scale() {
        let field = [-1.0, 0.0, 1.0];
        let mut out = vec![0u8; 12];
        shade_wave(&field, Palette::Gray, &mut out).unwrap();
        assert_eq!(&out[0..4], &[0, 0, 0, 255]);
        assert_eq!(&out[4..8], &[127, 127, 127, 255]);
        assert_eq!(&out[8..12], &[255, 255, 255, 255]);
    }

    #[test]
    fn wave_normalizes_by_magnitude() {
        // Peak is negative; positive half must still land mid-to-high.
        let field = [-4.0, 2.0];
        let mut out = vec![0u8; 8];
        shade_wave(&field, Palette::Gray, &mut out).unwrap();
        assert_eq!(out[0], 0);
        assert_eq!(out[4], 191); // 0.5 + 2.0 * (0.5 / 4.0) = 0.75
    }

    #[test]
    fn life_is_binary() {
        let cells = [0u8, 1, 1, 0];
        let mut out = vec![0u8; 16];
        shade_life(&cells, Palette::Gray, &mut out).unwrap();
        assert_eq!(&out[0..4], &[0, 0, 0, 255]);
        assert_eq!(&out[4..8], &[255, 255, 255, 255]);
        assert_eq!(&out[12..16], &[0, 0, 0, 255]);
    }

    #[test]
    fn wrong_buffer_length_is_rejected() {
        let field = [0.0f32; 4];
        let mut out = vec![0u8; 15];
        let err = shade_heat(&field, Palette::Fire, &mut out).unwrap_err();
        assert_eq!(
            err,
            RenderError::FrameLengthMismatch { cells: 4, bytes: 15 }
        );
        assert!(shade_wave(&field, Palette::Fire, &mut out).is_err());
        assert!(shade_life(&[0u8; 4], Palette::Fire, &mut out).is_err());
    }
}
