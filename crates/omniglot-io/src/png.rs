use std::{fs::File, path::Path};

use omniglot_image::Image;
use png::{BitDepth, ColorType, Encoder};

use crate::error::IoError;

/// Writes the given PNG _(grayscale 8-bit)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the PNG data.
pub fn write_image_png_gray8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 1>,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;

    let size = image.size();
    let mut encoder = Encoder::new(file, size.width as u32, size.height as u32);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image.as_slice())
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;
    use crate::functional::read_image_any;
    use omniglot_image::{GenericImage, ImageSize};

    #[test]
    fn write_png_gray8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("0001_01.png");

        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0, 255, 10, 20, 30, 40],
        )?;
        write_image_png_gray8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        match read_image_any(&file_path)? {
            GenericImage::L8(image_back) => {
                assert_eq!(image_back.cols(), 3);
                assert_eq!(image_back.rows(), 2);
                assert_eq!(image_back.as_slice(), image.as_slice());
            }
            other => panic!("expected a grayscale image, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn write_png_missing_dir() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("missing").join("0001_01.png");
        let image = Image::<u8, 1>::from_size_val(ImageSize::square(2), 0)?;

        let res = write_image_png_gray8(&file_path, &image);
        assert!(matches!(res, Err(IoError::FileError(_))));
        Ok(())
    }
}
