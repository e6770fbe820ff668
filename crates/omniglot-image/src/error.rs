/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image is expected to be square.
    #[error("Image is not square: {0}x{1}")]
    NotSquare(usize, usize),

    /// Error when the requested output size cannot be resampled to.
    #[error("Invalid output size {0}, must be at least 2")]
    InvalidOutputSize(usize),

    /// Error when the image has no pixels.
    #[error("Image is empty")]
    EmptyImage,

    /// Error when the cast operation fails.
    #[error("Failed to cast image data")]
    CastError,
}
