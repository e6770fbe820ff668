use omniglot_image::{Image, ImageError, ImageSize};
use rayon::prelude::*;

use crate::interpolation::bilinear_interpolation_white;

/// Rotate a point about `center` on both axes.
///
/// Applies the rotation matrix `[cos -sin; sin cos]` to `(x, y)` relative to
/// `(center, center)`.
#[inline]
pub fn rotate_coord(x: f32, y: f32, center: f32, sin: f32, cos: f32) -> (f32, f32) {
    let cx = x - center;
    let cy = y - center;
    (center + cos * cx - sin * cy, center + sin * cx + cos * cy)
}

/// Quantize an intensity in [0, 1] to 8 bits.
///
/// The value is scaled by 256 and floored; an exact `1.0` maps to 255.
///
/// ```
/// use omniglot_imgproc::warp::quantize;
///
/// assert_eq!(quantize(0.0), 0);
/// assert_eq!(quantize(0.5), 128);
/// assert_eq!(quantize(1.0), 255);
/// ```
#[inline]
pub fn quantize(value: f32) -> u8 {
    (value * 256.0).floor().clamp(0.0, 255.0) as u8
}

/// Resample a square tensor into a square 8-bit image.
///
/// Each output pixel `(x, y)` is scaled into the source resolution, rotated
/// by `angle` about the source center, shifted back by
/// `(translate_x, translate_y)` and sampled with bilinear interpolation.
/// Taps outside of the source read as white.
///
/// # Arguments
///
/// * `src` - The square source tensor with values in [0, 1].
/// * `out_size` - The side length of the output image.
/// * `angle` - The counter-clockwise rotation in radians.
/// * `translate_x` - The horizontal shift, in source pixels.
/// * `translate_y` - The vertical shift, in source pixels.
///
/// # Errors
///
/// Fails if the source is empty or not square, or if `out_size < 2`.
///
/// # Example
///
/// ```
/// use omniglot_image::{Image, ImageSize};
/// use omniglot_imgproc::warp::transform;
///
/// let src = Image::<f32, 1>::from_size_val(ImageSize::square(105), 0.0).unwrap();
/// let dst = transform(&src, 28, 0.0, 0.0, 0.0).unwrap();
///
/// assert_eq!(dst.size(), ImageSize::square(28));
/// assert!(dst.as_slice().iter().all(|&v| v == 0));
/// ```
pub fn transform(
    src: &Image<f32, 1>,
    out_size: usize,
    angle: f32,
    translate_x: f32,
    translate_y: f32,
) -> Result<Image<u8, 1>, ImageError> {
    if src.size().num_pixels() == 0 {
        return Err(ImageError::EmptyImage);
    }
    if !src.size().is_square() {
        return Err(ImageError::NotSquare(src.width(), src.height()));
    }
    if out_size < 2 {
        return Err(ImageError::InvalidOutputSize(out_size));
    }

    let in_size = src.width();
    let (sin, cos) = angle.sin_cos();
    let scale = (in_size - 1) as f32 / (out_size - 1) as f32;
    let center = (in_size - 1) as f32 / 2.0;

    let mut dst = Image::<u8, 1>::from_size_val(ImageSize::square(out_size), 0)?;

    dst.as_slice_mut()
        .par_chunks_exact_mut(out_size)
        .enumerate()
        .for_each(|(y, row)| {
            let sy = y as f32 * scale;
            row.iter_mut().enumerate().for_each(|(x, pixel)| {
                let sx = x as f32 * scale;
                let (u, v) = rotate_coord(sx, sy, center, sin, cos);
                let value = bilinear_interpolation_white(src, u - translate_x, v - translate_y);
                *pixel = quantize(value);
            });
        });

    Ok(dst)
}
