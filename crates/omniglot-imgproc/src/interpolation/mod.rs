//! Pixel interpolation used when resampling glyph images.
//!
//! Samples that fall outside of the source image read as white (`1.0`), so
//! rotated and translated corners fade to the paper color of the glyphs.

mod bilinear;

pub use bilinear::{bilinear_interpolation_white, pixel_or_white, WHITE};
