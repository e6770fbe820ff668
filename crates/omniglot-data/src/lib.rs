#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Randomized augmentation policy applied at render time.
pub mod augment;

/// Error types for the data module.
pub mod error;

/// Labeled samples and their rotated variants.
pub mod sample;

/// Ordered collections of samples.
pub mod set;

pub use crate::augment::{AugmentPolicy, RenderParams};
pub use crate::error::DataError;
pub use crate::sample::{AugSample, Sample, IMAGE_SIZE};
pub use crate::set::{SampleSet, IMAGE_EXTENSIONS};
