use num_traits::{Bounded, ToPrimitive};
use omniglot_image::{GenericImage, Image, ImageError};

/// Convert a decoded image into a single channel tensor with values in [0, 1].
///
/// Grayscale images are normalized by the maximum value of their bit depth.
/// Multi-channel images keep only the red (first) channel, normalized the
/// same way. Float images are clamped to [0, 1].
///
/// # Arguments
///
/// * `image` - The decoded image.
///
/// # Returns
///
/// A row-major image of `width * height` intensities.
///
/// # Example
///
/// ```
/// use omniglot_image::{GenericImage, Image, ImageSize};
/// use omniglot_imgproc::tensor::image_to_tensor;
///
/// let image = Image::<u8, 1>::new(ImageSize::square(2), vec![0, 51, 204, 255]).unwrap();
/// let tensor = image_to_tensor(&GenericImage::L8(image)).unwrap();
///
/// assert_eq!(tensor.as_slice(), &[0.0, 0.2, 0.8, 1.0]);
/// ```
pub fn image_to_tensor(image: &GenericImage) -> Result<Image<f32, 1>, ImageError> {
    match image {
        GenericImage::L8(img) => normalized_first_channel(img),
        GenericImage::La8(img) => normalized_first_channel(img),
        GenericImage::Rgb8(img) => normalized_first_channel(img),
        GenericImage::Rgba8(img) => normalized_first_channel(img),
        GenericImage::L16(img) => normalized_first_channel(img),
        GenericImage::La16(img) => normalized_first_channel(img),
        GenericImage::Rgb16(img) => normalized_first_channel(img),
        GenericImage::Rgba16(img) => normalized_first_channel(img),
        GenericImage::Rgb32F(img) => clamped_first_channel(img),
        GenericImage::Rgba32F(img) => clamped_first_channel(img),
    }
}

fn normalized_first_channel<T, const C: usize>(
    image: &Image<T, C>,
) -> Result<Image<f32, 1>, ImageError>
where
    T: Bounded + ToPrimitive + Copy,
{
    let max_value = T::max_value().to_f32().ok_or(ImageError::CastError)?;

    let data = image
        .as_slice()
        .iter()
        .step_by(C)
        .map(|v| {
            v.to_f32()
                .map(|v| v / max_value)
                .ok_or(ImageError::CastError)
        })
        .collect::<Result<Vec<f32>, ImageError>>()?;

    Image::new(image.size(), data)
}

fn clamped_first_channel<const C: usize>(
    image: &Image<f32, C>,
) -> Result<Image<f32, 1>, ImageError> {
    let data = image
        .as_slice()
        .iter()
        .step_by(C)
        .map(|v| v.clamp(0.0, 1.0))
        .collect();

    Image::new(image.size(), data)
}
