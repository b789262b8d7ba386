//! Field-to-pixel shading.
//!
//! Turns the raw scalar fields produced by the engines into RGBA8 pixel
//! buffers: per-frame normalization first, then a palette lookup per cell.
//! No windowing or GPU code lives here; the output is a plain byte slice
//! any presentation layer can upload.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod palette;
pub mod shade;

pub use error::RenderError;
pub use palette::Palette;
pub use shade::{shade_heat, shade_life, shade_wave};
