use std::f32::consts::FRAC_PI_2;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use omniglot_image::{GenericImage, Image};
use omniglot_imgproc::{tensor::image_to_tensor, warp::transform};
use omniglot_io::functional::read_image_any;
use rand::Rng;

use crate::augment::{AugmentPolicy, RenderParams};
use crate::error::DataError;

/// Side length of the source glyph images and the default render size.
pub const IMAGE_SIZE: usize = 105;

/// A single labeled character image.
///
/// The image file is decoded lazily on the first call to [`Sample::image`]
/// and kept for the lifetime of the sample.
pub struct Sample {
    /// Name of the alphabet directory, e.g. `"Early_Aramaic"`.
    pub alphabet: String,
    /// Name of the character directory, e.g. `"character37"`.
    pub char_name: String,
    /// Path to the image file of the sample.
    pub path: PathBuf,
    image: Mutex<Option<Arc<GenericImage>>>,
}

impl Sample {
    /// Create a sample that has not been decoded yet.
    pub fn new(
        alphabet: impl Into<String>,
        char_name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            alphabet: alphabet.into(),
            char_name: char_name.into(),
            path: path.into(),
            image: Mutex::new(None),
        }
    }

    /// Decode the sample's image file, or return the cached image.
    ///
    /// Concurrent callers block until the first decode finishes and then share
    /// its result. A failed decode is not cached, so a later call retries it.
    ///
    /// # Errors
    ///
    /// [`DataError::Decode`] if the file cannot be decoded and
    /// [`DataError::NotSquare`] if the decoded image is not square.
    pub fn image(&self) -> Result<Arc<GenericImage>, DataError> {
        // the guarded value is either empty or a complete image
        let mut cached = self.image.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(image) = cached.as_ref() {
            return Ok(Arc::clone(image));
        }

        log::debug!("decoding {}", self.path.display());

        let image = read_image_any(&self.path).map_err(|source| DataError::Decode {
            path: self.path.clone(),
            source,
        })?;

        if !image.is_square() {
            let size = image.size();
            return Err(DataError::NotSquare {
                path: self.path.clone(),
                width: size.width,
                height: size.height,
            });
        }

        let image = Arc::new(image);
        *cached = Some(Arc::clone(&image));

        Ok(image)
    }

    /// Whether the image has already been decoded.
    pub fn is_decoded(&self) -> bool {
        self.image
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl std::fmt::Debug for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sample")
            .field("alphabet", &self.alphabet)
            .field("char_name", &self.char_name)
            .field("path", &self.path)
            .field("decoded", &self.is_decoded())
            .finish()
    }
}

/// A sample together with a rotation.
///
/// The rotation counts counter-clockwise quarter turns and is always in
/// `0..4`. Rotated variants share the underlying [`Sample`], and with it the
/// decoded image.
#[derive(Clone, Debug)]
pub struct AugSample {
    sample: Arc<Sample>,
    rotation: usize,
}

impl AugSample {
    /// Create an augmented sample; the rotation is taken modulo 4.
    pub fn new(sample: Arc<Sample>, rotation: usize) -> Self {
        Self {
            sample,
            rotation: rotation % 4,
        }
    }

    /// The underlying sample.
    pub fn sample(&self) -> &Arc<Sample> {
        &self.sample
    }

    /// Number of counter-clockwise quarter turns.
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// A copy of this sample with a different rotation.
    pub fn rotated(&self, rotation: usize) -> Self {
        Self::new(Arc::clone(&self.sample), rotation)
    }

    /// The class identifier, `alphabet/char_name/rotation`.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use omniglot_data::{AugSample, Sample};
    ///
    /// let sample = Arc::new(Sample::new("Greek", "character07", "0001_01.png"));
    /// let aug = AugSample::new(sample, 3);
    ///
    /// assert_eq!(aug.class_key(), "Greek/character07/3");
    /// ```
    pub fn class_key(&self) -> String {
        format!(
            "{}/{}/{}",
            self.sample.alphabet, self.sample.char_name, self.rotation
        )
    }

    /// The rotation in radians.
    pub fn base_angle(&self) -> f32 {
        self.rotation as f32 * FRAC_PI_2
    }

    /// Render the sample with the default [`AugmentPolicy`].
    ///
    /// See [`AugSample::render_with_policy`].
    pub fn render<R: Rng + ?Sized>(
        &self,
        augment: bool,
        out_size: Option<usize>,
        rng: &mut R,
    ) -> Result<Image<u8, 1>, DataError> {
        self.render_with_policy(&AugmentPolicy::default(), augment, out_size, rng)
    }

    /// Render the rotated sample as an 8-bit grayscale image.
    ///
    /// If `augment` is set, a random translation and angle jitter are drawn
    /// from `policy`; otherwise `rng` is not touched and the output only
    /// depends on the image and the rotation.
    ///
    /// # Arguments
    ///
    /// * `policy` - The jitter magnitudes used when `augment` is set.
    /// * `augment` - Whether to apply random jitter.
    /// * `out_size` - The output side length, [`IMAGE_SIZE`] if `None`.
    /// * `rng` - The random source for the jitter.
    pub fn render_with_policy<R: Rng + ?Sized>(
        &self,
        policy: &AugmentPolicy,
        augment: bool,
        out_size: Option<usize>,
        rng: &mut R,
    ) -> Result<Image<u8, 1>, DataError> {
        let raw = self.sample.image()?;

        let params = if augment {
            policy.sample_params(self.base_angle(), rng)
        } else {
            RenderParams::fixed(self.base_angle())
        };

        let tensor = image_to_tensor(&raw)?;
        let out = transform(
            &tensor,
            out_size.unwrap_or(IMAGE_SIZE),
            params.angle,
            params.translate_x,
            params.translate_y,
        )?;

        Ok(out)
    }
}

impl PartialEq for AugSample {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.sample, &other.sample) && self.rotation == other.rotation
    }
}

impl Eq for AugSample {}

#[cfg(test)]
mod tests {
    use super::*;
    use omniglot_image::ImageSize;
    use omniglot_io::png::write_image_png_gray8;
    use rand::{rngs::StdRng, SeedableRng};
    use std::path::Path;

    fn glyph(side: usize) -> Vec<u8> {
        (0..side * side)
            .map(|i| if (i % side) * 3 < side { 0 } else { 255 })
            .collect()
    }

    fn write_glyph(path: &Path, size: ImageSize) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let data = glyph(size.width)
            .into_iter()
            .cycle()
            .take(size.num_pixels())
            .collect::<Vec<_>>();
        write_image_png_gray8(path, &Image::new(size, data.clone())?)?;
        Ok(data)
    }

    #[test]
    fn sample_image_is_cached() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("0001_01.png");
        write_glyph(&path, ImageSize::square(IMAGE_SIZE))?;

        let sample = Sample::new("Greek", "character07", &path);
        assert!(!sample.is_decoded());

        let first = sample.image()?;
        assert!(sample.is_decoded());

        // removing the file must not matter anymore
        std::fs::remove_file(&path)?;
        let second = sample.image()?;
        assert!(Arc::ptr_eq(&first, &second));
        Ok(())
    }

    #[test]
    fn sample_image_concurrent() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("0001_01.png");
        write_glyph(&path, ImageSize::square(IMAGE_SIZE))?;

        let sample = Arc::new(Sample::new("Greek", "character07", &path));

        let images = std::thread::scope(|s| {
            let handles = (0..8)
                .map(|_| s.spawn(|| sample.image()))
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|h| h.join().expect("decode thread panicked"))
                .collect::<Result<Vec<_>, _>>()
        })?;

        assert!(images.iter().all(|img| Arc::ptr_eq(img, &images[0])));
        Ok(())
    }

    #[test]
    fn sample_failure_is_not_cached() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("late.png");

        let sample = Sample::new("Greek", "character07", &path);
        let err = sample.image().unwrap_err();
        assert!(matches!(err, DataError::Decode { .. }));
        assert!(err.to_string().starts_with("decode "));
        assert!(!sample.is_decoded());

        write_glyph(&path, ImageSize::square(IMAGE_SIZE))?;
        assert_eq!(sample.image()?.size(), ImageSize::square(IMAGE_SIZE));
        Ok(())
    }

    #[test]
    fn sample_not_square() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("wide.png");
        write_glyph(
            &path,
            ImageSize {
                width: 10,
                height: 8,
            },
        )?;

        let sample = Sample::new("Greek", "character07", &path);
        match sample.image() {
            Err(DataError::NotSquare { width, height, .. }) => {
                assert_eq!((width, height), (10, 8));
            }
            other => panic!("expected a shape error, got {other:?}"),
        }
        assert!(!sample.is_decoded());
        Ok(())
    }

    #[test]
    fn aug_sample_rotation_wraps() {
        let sample = Arc::new(Sample::new("Greek", "character07", "0001_01.png"));
        let aug = AugSample::new(Arc::clone(&sample), 0);
        assert_eq!(aug.rotated(5).rotation(), 1);
        assert_eq!(aug.rotated(5), aug.rotated(1));
        assert_eq!(aug.rotated(2).class_key(), "Greek/character07/2");
        assert!(Arc::ptr_eq(aug.rotated(3).sample(), &sample));
    }

    #[test]
    fn render_identity() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("0001_01.png");
        let data = write_glyph(&path, ImageSize::square(IMAGE_SIZE))?;

        let aug = AugSample::new(Arc::new(Sample::new("Greek", "character07", &path)), 0);
        let mut rng = StdRng::seed_from_u64(0);
        let out = aug.render(false, None, &mut rng)?;

        assert_eq!(out.size(), ImageSize::square(IMAGE_SIZE));
        assert_eq!(out.as_slice(), data.as_slice());
        Ok(())
    }

    #[test]
    fn render_rotation_periodic() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("0001_01.png");
        write_glyph(&path, ImageSize::square(IMAGE_SIZE))?;

        let aug = AugSample::new(Arc::new(Sample::new("Greek", "character07", &path)), 0);
        let mut rng = StdRng::seed_from_u64(0);
        for k in 0..4 {
            let a = aug.rotated(k).render(false, Some(28), &mut rng)?;
            let b = aug.rotated(k + 4).render(false, Some(28), &mut rng)?;
            assert_eq!(a, b);
        }

        let quarter = aug.rotated(1).render(false, None, &mut rng)?;
        let unrotated = aug.render(false, None, &mut rng)?;
        assert_ne!(quarter, unrotated);
        Ok(())
    }

    #[test]
    fn render_augmented() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("0001_01.png");
        write_glyph(&path, ImageSize::square(IMAGE_SIZE))?;

        let aug = AugSample::new(Arc::new(Sample::new("Greek", "character07", &path)), 1);

        let a = aug.render(true, Some(28), &mut StdRng::seed_from_u64(11))?;
        let b = aug.render(true, Some(28), &mut StdRng::seed_from_u64(11))?;
        assert_eq!(a, b);
        assert_eq!(a.size(), ImageSize::square(28));

        let mut rng = StdRng::seed_from_u64(11);
        let plain = aug.render(false, Some(28), &mut rng)?;
        let still = aug.render_with_policy(&AugmentPolicy::none(), true, Some(28), &mut rng)?;
        assert_eq!(plain, still);
        Ok(())
    }
}
