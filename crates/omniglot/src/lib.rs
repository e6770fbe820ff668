//! Few-shot character dataset preparation.
//!
//! Load a directory of glyph images, expand it with rotated classes and
//! render samples through the geometric augmentation pipeline.
//!
//! ```no_run
//! use omniglot::data::SampleSet;
//!
//! let set = SampleSet::load("images_background").unwrap().augment();
//! let mut rng = rand::rng();
//! for class in set.by_class() {
//!     let image = class.as_slice()[0].render(true, Some(28), &mut rng).unwrap();
//! }
//! ```

#[doc(inline)]
pub use omniglot_data as data;

#[doc(inline)]
pub use omniglot_image as image;

#[doc(inline)]
pub use omniglot_imgproc as imgproc;

#[doc(inline)]
pub use omniglot_io as io;
