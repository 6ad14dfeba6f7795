// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Single-query inference: encode the query against the frozen
// vocabulary, run the forward pass, softmax, pick the label
// with the highest probability (ties broken by lowest index),
// and map the label index back into the dataset for the
// diagnosis and treatment text.
//
// Calls are independent and side-effect-free; the per-call
// feature and probability buffers are dropped on every exit
// path. Numeric failures surface as Prediction errors without
// touching the model.

use burn::prelude::*;

use crate::data::encoder::encode;
use crate::domain::entry::{DatasetEntry, Prediction};
use crate::domain::errors::DiagnosisError;
use crate::domain::vocabulary::Vocabulary;
use crate::ml::model::ClassifierModel;
use crate::ml::trainer::InferBackend;

#[derive(Debug)]
pub struct Inferencer {
    model: ClassifierModel<InferBackend>,
    device: burn::backend::ndarray::NdArrayDevice,
}

impl Inferencer {
    pub fn new(model: ClassifierModel<InferBackend>) -> Self {
        Self {
            model,
            device: burn::backend::ndarray::NdArrayDevice::default(),
        }
    }

    /// Classify one query. The caller has already rejected
    /// empty queries and checked readiness; `dataset` must be
    /// the same ordered sequence the model was trained on.
    pub fn predict(
        &self,
        query: &str,
        vocabulary: &Vocabulary,
        dataset: &[DatasetEntry],
    ) -> Result<Prediction, DiagnosisError> {
        let features = encode(query, vocabulary);
        if features.len() != self.model.input_width() {
            return Err(DiagnosisError::Prediction(format!(
                "feature width {} does not match the model's input width {}",
                features.len(),
                self.model.input_width(),
            )));
        }
        let input = Tensor::<InferBackend, 1>::from_floats(features.as_slice(), &self.device)
            .reshape([1, vocabulary.len()]);

        let probs: Vec<f32> = self
            .model
            .probabilities(input)
            .into_data()
            .to_vec()
            .map_err(|e| DiagnosisError::Prediction(format!("reading distribution: {e:?}")))?;

        let index = argmax_first(&probs)
            .ok_or_else(|| DiagnosisError::Prediction("empty output distribution".into()))?;
        let entry = dataset.get(index).ok_or_else(|| {
            DiagnosisError::Prediction(format!("label index {index} outside the dataset"))
        })?;

        let confidence_percent = round_two_decimals(f64::from(probs[index]) * 100.0);
        tracing::debug!(
            "Predicted '{}' at index {} ({:.2}%)",
            entry.diagnosis,
            index,
            confidence_percent,
        );

        Ok(Prediction {
            diagnosis: entry.diagnosis.clone(),
            treatment: entry.treatment.clone(),
            confidence_percent,
        })
    }
}

/// Index of the maximum value, first occurrence winning ties.
fn argmax_first(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
