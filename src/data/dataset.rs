// ============================================================
// Layer 4 — Training Dataset
// ============================================================
// One sample per dataset entry: the multi-hot encoding of the
// entry's complaint, and a one-hot target of width |dataset|
// with the 1 at the entry's own index. The model learns to
// re-identify which entry a complaint came from, so the label
// set IS the entry sequence.

use burn::data::dataset::Dataset;

use crate::data::encoder::encode;
use crate::domain::entry::DatasetEntry;
use crate::domain::vocabulary::Vocabulary;

/// One encoded training sample.
#[derive(Debug, Clone)]
pub struct DiagnosisSample {
    /// Multi-hot features of length |vocabulary|
    pub features: Vec<f32>,
    /// One-hot target of length |dataset|, 1 at this entry's index
    pub target: Vec<f32>,
}

/// One-hot vector of the given width with a single 1 at `index`.
pub fn one_hot(index: usize, width: usize) -> Vec<f32> {
    let mut v = vec![0.0; width];
    v[index] = 1.0;
    v
}

/// The full encoded training set, in dataset order.
pub struct DiagnosisDataset {
    samples: Vec<DiagnosisSample>,
}

impl DiagnosisDataset {
    /// Encode every entry's complaint against `vocabulary` and
    /// pair it with its own-index one-hot target.
    pub fn from_entries(entries: &[DatasetEntry], vocabulary: &Vocabulary) -> Self {
        let samples = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| DiagnosisSample {
                features: encode(&entry.complaint, vocabulary),
                target: one_hot(i, entries.len()),
            })
            .collect();
        Self { samples }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Dataset<DiagnosisSample> for DiagnosisDataset {
    fn get(&self, index: usize) -> Option<DiagnosisSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
