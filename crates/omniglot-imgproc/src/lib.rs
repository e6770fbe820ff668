#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Utilities for interpolation.
pub mod interpolation;

/// Conversion of decoded images into normalized tensors.
pub mod tensor;

/// Image geometric transformations module.
pub mod warp;
