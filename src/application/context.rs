// ============================================================
// Layer 2 — Application Context
// ============================================================
// Owns everything the inference service needs: the ordered
// dataset, the frozen vocabulary, and — once training has
// completed — the trained model. Readiness is simply whether
// the model is attached; there is no separate flag to drift
// out of sync.
//
// The context is created once at startup and never mutated
// after the model is attached (no retraining, no teardown).

use crate::domain::entry::DatasetEntry;
use crate::domain::errors::DiagnosisError;
use crate::domain::vocabulary::Vocabulary;
use crate::ml::inferencer::Inferencer;

pub struct AppContext {
    dataset: Vec<DatasetEntry>,
    vocabulary: Vocabulary,
    model: Option<Inferencer>,
}

impl AppContext {
    /// A context that is not yet ready: dataset and vocabulary
    /// are fixed, the model is still to be trained.
    pub fn new(dataset: Vec<DatasetEntry>, vocabulary: Vocabulary) -> Self {
        Self { dataset, vocabulary, model: None }
    }

    /// Attach the trained model, making the context ready.
    pub fn attach_model(&mut self, inferencer: Inferencer) {
        self.model = Some(inferencer);
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    /// The trained model, or ModelNotReady before training has
    /// completed.
    pub fn inferencer(&self) -> Result<&Inferencer, DiagnosisError> {
        self.model.as_ref().ok_or(DiagnosisError::ModelNotReady)
    }

    pub fn dataset(&self) -> &[DatasetEntry] {
        &self.dataset
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_without_model_is_not_ready() {
        let entries = vec![DatasetEntry::new("demam", "Flu", "Istirahat")];
        let vocab = Vocabulary::build(&entries);
        let ctx = AppContext::new(entries, vocab);
        assert!(!ctx.is_ready());
        assert!(matches!(
            ctx.inferencer().unwrap_err(),
            DiagnosisError::ModelNotReady
        ));
    }
}
