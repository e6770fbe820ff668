use crate::image::{Image, ImageSize};

/// A decoded image in any of the supported pixel layouts.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
    /// 16-bit grayscale image
    L16(Image<u16, 1>),
    /// 16-bit grayscale image with alpha channel
    La16(Image<u16, 2>),
    /// 16-bit RGB image
    Rgb16(Image<u16, 3>),
    /// 16-bit RGB image with alpha channel
    Rgba16(Image<u16, 4>),
    /// 32-bit float RGB image
    Rgb32F(Image<f32, 3>),
    /// 32-bit float RGB image with alpha channel
    Rgba32F(Image<f32, 4>),
}

impl GenericImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(img) => img.size(),
            GenericImage::La8(img) => img.size(),
            GenericImage::Rgb8(img) => img.size(),
            GenericImage::Rgba8(img) => img.size(),
            GenericImage::L16(img) => img.size(),
            GenericImage::La16(img) => img.size(),
            GenericImage::Rgb16(img) => img.size(),
            GenericImage::Rgba16(img) => img.size(),
            GenericImage::Rgb32F(img) => img.size(),
            GenericImage::Rgba32F(img) => img.size(),
        }
    }

    /// Get the number of channels of the image.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::L8(_) | GenericImage::L16(_) => 1,
            GenericImage::La8(_) | GenericImage::La16(_) => 2,
            GenericImage::Rgb8(_) | GenericImage::Rgb16(_) | GenericImage::Rgb32F(_) => 3,
            GenericImage::Rgba8(_) | GenericImage::Rgba16(_) | GenericImage::Rgba32F(_) => 4,
        }
    }

    /// Whether the image has the same width and height.
    pub fn is_square(&self) -> bool {
        self.size().is_square()
    }
}

impl From<Image<u8, 1>> for GenericImage {
    fn from(image: Image<u8, 1>) -> Self {
        GenericImage::L8(image)
    }
}

impl From<Image<u16, 1>> for GenericImage {
    fn from(image: Image<u16, 1>) -> Self {
        GenericImage::L16(image)
    }
}

impl From<Image<u8, 3>> for GenericImage {
    fn from(image: Image<u8, 3>) -> Self {
        GenericImage::Rgb8(image)
    }
}
