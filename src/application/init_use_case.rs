// ============================================================
// Layer 2 — Init Use Case
// ============================================================
// The one-shot startup pipeline, run once before any query:
//
//   Step 1: Load the dataset           (Layer 4 - data)
//           — fall back to the compiled-in entries on failure
//   Step 2: Build the vocabulary       (Layer 3 - domain)
//   Step 3: Encode the training set    (Layer 4 - data)
//   Step 4: Run the fit loop           (Layer 5 - ml)
//   Step 5: Hand back a ready context
//
// Vocabulary build → encode → model build → train is strictly
// sequential; nothing may query the context until execute()
// has returned. ModelBuild/Training errors abort startup.

use serde::{Deserialize, Serialize};

use crate::application::context::AppContext;
use crate::data::dataset::DiagnosisDataset;
use crate::data::loader::{fallback_dataset, JsonDatasetLoader};
use crate::domain::entry::DatasetEntry;
use crate::domain::errors::DiagnosisError;
use crate::domain::traits::{DatasetSource, Presenter};
use crate::domain::vocabulary::Vocabulary;
use crate::ml::inferencer::Inferencer;
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All knobs for a startup run. Serialisable so a run's
// configuration can be logged or embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub dataset_path: String,
    pub epochs: usize,
    pub batch_size: usize,
    pub lr: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            dataset_path: "data/dataset.json".to_string(),
            epochs: 200,
            batch_size: 8,
            lr: 1e-3,
        }
    }
}

pub struct InitUseCase {
    cfg: TrainConfig,
}

impl InitUseCase {
    pub fn new(cfg: TrainConfig) -> Self {
        Self { cfg }
    }

    /// Run the full startup pipeline and return a ready
    /// context. Fatal errors (model build, training) propagate;
    /// a missing dataset is recovered with the fallback.
    pub fn execute(&self, presenter: &dyn Presenter) -> Result<AppContext, DiagnosisError> {
        if let Ok(cfg_json) = serde_json::to_string(&self.cfg) {
            tracing::debug!("Train config: {cfg_json}");
        }

        let entries = self.load_dataset(presenter);
        let vocabulary = Vocabulary::build(&entries);
        tracing::info!(
            "Vocabulary built: {} tokens from {} entries",
            vocabulary.len(),
            entries.len(),
        );

        let dataset = DiagnosisDataset::from_entries(&entries, &vocabulary);

        let trained = run_training(
            &self.cfg,
            dataset,
            vocabulary.len(),
            entries.len(),
            presenter,
        )
        .map_err(|e| {
            presenter.on_error(e.kind(), &e.to_string());
            e
        })?;

        let mut context = AppContext::new(entries, vocabulary);
        context.attach_model(Inferencer::new(trained));
        presenter.on_ready();
        Ok(context)
    }

    /// Load the dataset from the configured source; substitute
    /// the fallback on any failure, surfacing a warning.
    fn load_dataset(&self, presenter: &dyn Presenter) -> Vec<DatasetEntry> {
        let loader = JsonDatasetLoader::new(self.cfg.dataset_path.clone());
        match loader.load() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Using fallback dataset: {e}");
                presenter.on_error(e.kind(), &e.to_string());
                fallback_dataset()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::domain::entry::Prediction;

    struct RecordingPresenter {
        errors: RefCell<Vec<String>>,
        ready: RefCell<bool>,
    }

    impl RecordingPresenter {
        fn new() -> Self {
            Self { errors: RefCell::new(Vec::new()), ready: RefCell::new(false) }
        }
    }

    impl Presenter for RecordingPresenter {
        fn on_epoch(&self, _epoch: usize, _fraction: f64, _loss: f64) {}
        fn on_ready(&self) {
            *self.ready.borrow_mut() = true;
        }
        fn on_error(&self, kind: &str, _message: &str) {
            self.errors.borrow_mut().push(kind.to_string());
        }
        fn on_result(&self, _prediction: &Prediction) {}
    }

    #[test]
    fn missing_dataset_recovers_with_fallback_and_warns() {
        let cfg = TrainConfig {
            dataset_path: "/nonexistent/dataset.json".to_string(),
            epochs: 2,
            ..TrainConfig::default()
        };
        let presenter = RecordingPresenter::new();

        let context = InitUseCase::new(cfg).execute(&presenter).unwrap();

        assert!(context.is_ready());
        assert_eq!(context.dataset().len(), fallback_dataset().len());
        assert!(*presenter.ready.borrow());
        assert_eq!(presenter.errors.borrow().as_slice(), ["dataset_unavailable"]);
    }
}
