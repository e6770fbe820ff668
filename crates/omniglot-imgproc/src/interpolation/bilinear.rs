use omniglot_image::Image;

/// Intensity read for taps outside of the source image.
pub const WHITE: f32 = 1.0;

/// Read the pixel at integer coordinates, or [`WHITE`] if out of bounds.
///
/// # Arguments
///
/// * `image` - The single channel source image.
/// * `x` - The column of the pixel.
/// * `y` - The row of the pixel.
#[inline]
pub fn pixel_or_white(image: &Image<f32, 1>, x: i64, y: i64) -> f32 {
    if x < 0 || y < 0 || x >= image.cols() as i64 || y >= image.rows() as i64 {
        return WHITE;
    }
    let idx = y as usize * image.cols() + x as usize;
    image.as_slice()[idx]
}

/// Kernel for bilinear interpolation with a white boundary.
///
/// Each of the four taps around `(u, v)` is read with [`pixel_or_white`], so
/// a coordinate partially or fully outside of the image blends towards white.
///
/// # Arguments
///
/// * `image` - The single channel source image.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel value.
pub fn bilinear_interpolation_white(image: &Image<f32, 1>, u: f32, v: f32) -> f32 {
    let u0 = u.floor();
    let v0 = v.floor();

    // the whole 2x2 neighborhood is outside of the image
    if u0 < -1.0 || v0 < -1.0 || u0 >= image.cols() as f32 || v0 >= image.rows() as f32 {
        return WHITE;
    }

    let frac_u = u - u0;
    let frac_v = v - v0;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let (iu, iv) = (u0 as i64, v0 as i64);

    let p00 = pixel_or_white(image, iu, iv);
    let p01 = pixel_or_white(image, iu + 1, iv);
    let p10 = pixel_or_white(image, iu, iv + 1);
    let p11 = pixel_or_white(image, iu + 1, iv + 1);

    p00 * w00 + p01 * w01 + p10 * w10 + p11 * w11
}
