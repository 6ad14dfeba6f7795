// ============================================================
// Layer 5 — Classifier Architecture
// ============================================================
// A small feed-forward network over the multi-hot features:
//
//   input [batch, vocab_size]
//     → Linear(vocab_size, 32) + ReLU
//     → Linear(32, 16)         + ReLU
//     → Linear(16, num_labels)           (logits)
//
// `forward` returns raw logits; the loss applies log-softmax
// and `probabilities` applies softmax, so the output layer is
// a softmax distribution over the label set exactly once per
// path. Weight initialization uses Burn's defaults and is not
// seeded, so runs are not bit-for-bit reproducible.

use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::activation::{relu, softmax},
};

use crate::domain::errors::DiagnosisError;

#[derive(Config, Debug)]
pub struct ClassifierConfig {
    /// Width of the feature space (|vocabulary|)
    pub input_width: usize,
    /// Number of output labels (|dataset|)
    pub num_labels: usize,
    #[config(default = 32)]
    pub hidden1: usize,
    #[config(default = 16)]
    pub hidden2: usize,
}

impl ClassifierConfig {
    /// Build the network, failing fast on a degenerate shape.
    /// A zero-width input (empty vocabulary) or zero labels is
    /// a configuration error, never a silently useless model.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<ClassifierModel<B>, DiagnosisError> {
        if self.input_width == 0 {
            return Err(DiagnosisError::ModelBuild(
                "input width is zero (empty vocabulary)".into(),
            ));
        }
        if self.num_labels == 0 {
            return Err(DiagnosisError::ModelBuild("label set is empty".into()));
        }

        Ok(ClassifierModel {
            hidden1: LinearConfig::new(self.input_width, self.hidden1).init(device),
            hidden2: LinearConfig::new(self.hidden1, self.hidden2).init(device),
            output: LinearConfig::new(self.hidden2, self.num_labels).init(device),
        })
    }
}

#[derive(Module, Debug)]
pub struct ClassifierModel<B: Backend> {
    hidden1: Linear<B>,
    hidden2: Linear<B>,
    output: Linear<B>,
}

impl<B: Backend> ClassifierModel<B> {
    /// Width of the feature space this model was built for.
    pub fn input_width(&self) -> usize {
        self.hidden1.weight.val().dims()[0]
    }

    /// Forward pass producing raw logits — shape: [batch, num_labels].
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = relu(self.hidden1.forward(features));
        let x = relu(self.hidden2.forward(x));
        self.output.forward(x)
    }

    /// Forward pass plus softmax: each row is a probability
    /// distribution over the labels, summing to 1.
    pub fn probabilities(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        softmax(self.forward(features), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn zero_width_input_fails_fast() {
        let device = Default::default();
        let err = ClassifierConfig::new(0, 2).init::<TestBackend>(&device).unwrap_err();
        assert_eq!(err.kind(), "model_build");
    }

    #[test]
    fn zero_labels_fails_fast() {
        let device = Default::default();
        let err = ClassifierConfig::new(6, 0).init::<TestBackend>(&device).unwrap_err();
        assert_eq!(err.kind(), "model_build");
    }

    #[test]
    fn forward_produces_one_logit_row_per_sample() {
        let device = Default::default();
        let model = ClassifierConfig::new(6, 2).init::<TestBackend>(&device).unwrap();
        let input = Tensor::<TestBackend, 2>::zeros([3, 6], &device);
        assert_eq!(model.forward(input).dims(), [3, 2]);
    }

    #[test]
    fn probabilities_form_a_distribution() {
        let device = Default::default();
        let model = ClassifierConfig::new(6, 4).init::<TestBackend>(&device).unwrap();
        let input = Tensor::<TestBackend, 2>::from_floats(
            [[1.0, 0.0, 1.0, 0.0, 0.0, 1.0]],
            &device,
        );
        let probs: Vec<f32> = model.probabilities(input).into_data().to_vec().unwrap();
        assert_eq!(probs.len(), 4);
        assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }
}
