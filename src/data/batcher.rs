// ============================================================
// Layer 4 — Diagnosis Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec of
// DiagnosisSamples into tensors for one forward pass.
//
// All feature vectors share the same width (|vocabulary|) and
// all targets share the same width (|dataset|), so batching is
// a flatten + reshape:
//   [s1_f1..s1_fW, s2_f1.., sN_fW]  →  [N, W]
//
// B is the Burn Backend — generic so the same batcher serves
// the autodiff training backend and the plain inference one.

use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::dataset::DiagnosisSample;

/// A batch of encoded samples ready for the model.
#[derive(Debug, Clone)]
pub struct DiagnosisBatch<B: Backend> {
    /// Multi-hot features — shape: [batch_size, vocab_size]
    pub features: Tensor<B, 2>,

    /// One-hot targets — shape: [batch_size, num_labels]
    pub targets: Tensor<B, 2>,
}

/// Holds the target device so tensors land on the right backend.
#[derive(Clone, Debug)]
pub struct DiagnosisBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> DiagnosisBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<DiagnosisSample, DiagnosisBatch<B>> for DiagnosisBatcher<B> {
    fn batch(&self, items: Vec<DiagnosisSample>) -> DiagnosisBatch<B> {
        let batch_size = items.len();
        // All rows are pre-sized by the encoder
        let feature_width = items[0].features.len();
        let target_width = items[0].target.len();

        let feature_flat: Vec<f32> = items.iter().flat_map(|s| s.features.iter().copied()).collect();
        let target_flat: Vec<f32> = items.iter().flat_map(|s| s.target.iter().copied()).collect();

        let features = Tensor::<B, 1>::from_floats(feature_flat.as_slice(), &self.device)
            .reshape([batch_size, feature_width]);

        let targets = Tensor::<B, 1>::from_floats(target_flat.as_slice(), &self.device)
            .reshape([batch_size, target_width]);

        DiagnosisBatch { features, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn batch_stacks_samples_into_2d_tensors() {
        let device = Default::default();
        let batcher = DiagnosisBatcher::<TestBackend>::new(device);

        let items = vec![
            DiagnosisSample {
                features: vec![1.0, 0.0, 1.0],
                target: vec![1.0, 0.0],
            },
            DiagnosisSample {
                features: vec![0.0, 1.0, 0.0],
                target: vec![0.0, 1.0],
            },
        ];

        let batch = batcher.batch(items);
        assert_eq!(batch.features.dims(), [2, 3]);
        assert_eq!(batch.targets.dims(), [2, 2]);

        let rows: Vec<f32> = batch.features.into_data().to_vec().unwrap();
        assert_eq!(rows, vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    }
}
