//! Geometric resampling of glyph tensors.
//!
//! The transform combines uniform scaling, rotation about the image center
//! and translation into a single inverse mapping: every output pixel is
//! mapped back into the source image and sampled with bilinear
//! interpolation.
//!
//! # Examples
//!
//! Rotating a glyph by 90 degrees counter-clockwise without resizing:
//!
//! ```no_run
//! use omniglot_image::{Image, ImageSize};
//! use omniglot_imgproc::warp::transform;
//!
//! let src = Image::<f32, 1>::from_size_val(ImageSize::square(105), 1.0).unwrap();
//! let rotated = transform(&src, 105, std::f32::consts::FRAC_PI_2, 0.0, 0.0).unwrap();
//! ```

mod transform;

pub use transform::{quantize, rotate_coord, transform};
