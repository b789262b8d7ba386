//! Color palettes mapping a normalized scalar to RGBA8.

/// A colormap over the unit interval.
///
/// Inputs outside `[0, 1]` are clamped before lookup and the float-to-byte
/// casts saturate, so palettes never panic or wrap on non-finite samples.
/// Alpha is always 255.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    /// Linear grayscale.
    Gray,
    /// Black through red and yellow to near-white.
    #[default]
    Fire,
    /// Blue at 0 through to red at 1.
    BlueRed,
}

impl Palette {
    /// Look a palette up by its cycling index: 0 gray, 1 fire, 2 blue-red.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Gray),
            1 => Some(Self::Fire),
            2 => Some(Self::BlueRed),
            _ => None,
        }
    }

    /// The cycling index of this palette.
    pub fn index(self) -> u8 {
        match self {
            Self::Gray => 0,
            Self::Fire => 1,
            Self::BlueRed => 2,
        }
    }

    /// Map a normalized value to an RGBA8 pixel.
    pub fn rgba(self, v: f32) -> [u8; 4] {
        let v = v.clamp(0.0, 1.0);
        match self {
            Self::Gray => {
                let c = (255.0 * v) as u8;
                [c, c, c, 255]
            }
            Self::Fire => {
                let r = (1.5 * v).min(1.0);
                let g = (1.5 * (v - 0.3)).clamp(0.0, 1.0);
                let b = (1.5 * (v - 0.6)).clamp(0.0, 1.0);
                [
                    (255.0 * r) as u8,
                    (255.0 * g) as u8,
                    (255.0 * b) as u8,
                    255,
                ]
            }
            Self::BlueRed => [(255.0 * v) as u8, 0, (255.0 * (1.0 - v)) as u8, 255],
        }
    }
}
