use std::path::PathBuf;

use omniglot_image::ImageError;
use omniglot_io::IoError;

/// An error type for the data module.
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    /// Listing a directory failed while loading a set.
    #[error("read omniglot set: {}: {source}", .path.display())]
    Scan {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },

    /// The image file of a sample could not be decoded.
    #[error("decode {}: {source}", .path.display())]
    Decode {
        /// The image file.
        path: PathBuf,
        /// The decoder error.
        source: IoError,
    },

    /// The image file of a sample decoded to a non-square image.
    #[error("decode {}: not square ({width}x{height})", .path.display())]
    NotSquare {
        /// The image file.
        path: PathBuf,
        /// Width of the decoded image.
        width: usize,
        /// Height of the decoded image.
        height: usize,
    },

    /// Converting or resampling the decoded image failed.
    #[error("Failed to transform the image. {0}")]
    Image(#[from] ImageError),
}
