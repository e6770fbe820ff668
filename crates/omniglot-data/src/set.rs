use std::collections::BTreeMap;
use std::fs::FileType;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::Rng;

use crate::error::DataError;
use crate::sample::{AugSample, Sample};

/// File extensions recognized as images when loading a set (case-insensitive).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp",
];

/// An ordered collection of augmented samples.
///
/// The order of the samples is preserved by every operation and no
/// deduplication is performed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleSet(Vec<AugSample>);

impl SampleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a set from a directory laid out as `<alphabet>/<character>/<image>`.
    ///
    /// Entries are visited in file name order at every level. Anything that is
    /// not a directory on the first two levels, and anything that is not an
    /// image file on the last level, is skipped. All samples have rotation 0.
    ///
    /// # Errors
    ///
    /// [`DataError::Scan`] if any of the directories cannot be listed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use omniglot_data::SampleSet;
    ///
    /// let set = SampleSet::load("images_background").unwrap();
    /// let classes = set.augment().by_class();
    /// ```
    pub fn load(dir_path: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir_path = dir_path.as_ref();
        let mut set = Vec::new();

        for (alphabet, alphabet_path, file_type) in sorted_entries(dir_path)? {
            if !file_type.is_dir() {
                log::trace!("skipping {}", alphabet_path.display());
                continue;
            }
            for (char_name, char_path, file_type) in sorted_entries(&alphabet_path)? {
                if !file_type.is_dir() {
                    log::trace!("skipping {}", char_path.display());
                    continue;
                }
                for (_, image_path, file_type) in sorted_entries(&char_path)? {
                    if !file_type.is_file() || !is_image(&image_path) {
                        log::trace!("skipping {}", image_path.display());
                        continue;
                    }
                    let sample = Sample::new(alphabet.as_str(), char_name.as_str(), image_path);
                    set.push(AugSample::new(Arc::new(sample), 0));
                }
            }
        }

        log::info!("loaded {} samples from {}", set.len(), dir_path.display());

        Ok(Self(set))
    }

    /// Expand the set with all four rotations of every sample.
    ///
    /// For each sample, in order, the result holds rotations 0, 1, 2 and 3.
    pub fn augment(&self) -> Self {
        self.0
            .iter()
            .flat_map(|sample| (0..4).map(move |rot| sample.rotated(rot)))
            .collect()
    }

    /// Split the set into one subset per class.
    ///
    /// Classes are ordered by their class key, so the result does not depend
    /// on the order of the set. Within each class, samples keep their order
    /// in the set.
    pub fn by_class(&self) -> Vec<SampleSet> {
        self.grouped().into_values().collect()
    }

    /// The sorted, distinct class keys of the set.
    pub fn class_names(&self) -> Vec<String> {
        self.grouped().into_keys().collect()
    }

    fn grouped(&self) -> BTreeMap<String, SampleSet> {
        let mut classes: BTreeMap<String, SampleSet> = BTreeMap::new();
        for sample in &self.0 {
            classes
                .entry(sample.class_key())
                .or_default()
                .push(sample.clone());
        }
        classes
    }

    /// Pick `n` distinct elements of the set uniformly at random.
    ///
    /// # Panics
    ///
    /// If `n` is larger than the set.
    pub fn select<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Self {
        assert!(
            n <= self.0.len(),
            "size out of bounds: cannot select {} of {} samples",
            n,
            self.0.len()
        );
        rand::seq::index::sample(rng, self.0.len(), n)
            .into_iter()
            .map(|i| self.0[i].clone())
            .collect()
    }

    /// Append a sample to the end of the set.
    pub fn push(&mut self, sample: AugSample) {
        self.0.push(sample);
    }

    /// Number of samples in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the samples in order.
    pub fn iter(&self) -> std::slice::Iter<'_, AugSample> {
        self.0.iter()
    }

    /// The samples as a slice.
    pub fn as_slice(&self) -> &[AugSample] {
        &self.0
    }
}

impl From<Vec<AugSample>> for SampleSet {
    fn from(samples: Vec<AugSample>) -> Self {
        Self(samples)
    }
}

impl FromIterator<AugSample> for SampleSet {
    fn from_iter<I: IntoIterator<Item = AugSample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SampleSet {
    type Item = AugSample;
    type IntoIter = std::vec::IntoIter<AugSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a AugSample;
    type IntoIter = std::slice::Iter<'a, AugSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

// list a directory sorted by file name
fn sorted_entries(dir: &Path) -> Result<Vec<(String, PathBuf, FileType)>, DataError> {
    let scan_err = |source: std::io::Error| DataError::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = std::fs::read_dir(dir)
        .map_err(scan_err)?
        .map(|entry| {
            let entry = entry.map_err(scan_err)?;
            let file_type = entry.file_type().map_err(scan_err)?;
            Ok::<_, DataError>((entry.file_name(), entry.path(), file_type))
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    entries.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(entries
        .into_iter()
        .map(|(name, path, file_type)| (name.to_string_lossy().into_owned(), path, file_type))
        .collect())
}
