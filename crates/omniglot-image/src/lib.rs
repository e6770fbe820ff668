#![deny(missing_docs)]
//! Image types used across the glyph pipeline

/// Image representation for the transform pipeline.
pub mod image;

/// Decoded images of any supported pixel layout.
pub mod generic;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::generic::GenericImage;
pub use crate::image::{Image, ImageSize};
