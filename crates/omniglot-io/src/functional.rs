use std::path::Path;

use omniglot_image::{GenericImage, Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate
/// and keeps the pixel layout of the file.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data.
///
/// # Example
///
/// ```no_run
/// use omniglot_io::functional::read_image_any;
///
/// let image = read_image_any("images_background/Greek/character07/0394_01.png").unwrap();
///
/// assert_eq!(image.size().width, 105);
/// assert_eq!(image.size().height, 105);
/// ```
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    decode_image_any(&bytes)
}

/// Decodes an image of any supported format from raw bytes.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the encoded image.
pub fn decode_image_any(bytes: &[u8]) -> Result<GenericImage, IoError> {
    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img.color() {
        image::ColorType::L8 => GenericImage::L8(Image::new(size, img.into_luma8().into_raw())?),
        image::ColorType::La8 => {
            GenericImage::La8(Image::new(size, img.into_luma_alpha8().into_raw())?)
        }
        image::ColorType::Rgb8 => GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?),
        image::ColorType::Rgba8 => {
            GenericImage::Rgba8(Image::new(size, img.into_rgba8().into_raw())?)
        }
        image::ColorType::L16 => GenericImage::L16(Image::new(size, img.into_luma16().into_raw())?),
        image::ColorType::La16 => {
            GenericImage::La16(Image::new(size, img.into_luma_alpha16().into_raw())?)
        }
        image::ColorType::Rgb16 => {
            GenericImage::Rgb16(Image::new(size, img.into_rgb16().into_raw())?)
        }
        image::ColorType::Rgba16 => {
            GenericImage::Rgba16(Image::new(size, img.into_rgba16().into_raw())?)
        }
        image::ColorType::Rgb32F => {
            GenericImage::Rgb32F(Image::new(size, img.into_rgb32f().into_raw())?)
        }
        image::ColorType::Rgba32F => {
            GenericImage::Rgba32F(Image::new(size, img.into_rgba32f().into_raw())?)
        }
        other => return Err(IoError::UnsupportedImageFormat(format!("{other:?}"))),
    };

    log::trace!("decoded {} image with {} channels", size, image.num_channels());

    Ok(image)
}
