// ============================================================
// Layer 3 — Error Model
// ============================================================
// Every failure the pipeline can surface, as a typed enum.
//
// Propagation policy:
//   - DatasetUnavailable is recovered locally: the init use
//     case substitutes the compiled-in fallback dataset and
//     surfaces a warning through the presenter.
//   - ModelBuild and Training are fatal — they abort startup.
//   - ModelNotReady and EmptyQuery are user-level errors; the
//     caller may retry without any state change.
//   - Prediction is recovered per call: the model stays usable
//     for subsequent queries.
//
// Encoding and vocabulary lookups never error — unknown tokens
// degrade to zero features by design of the encoding contract.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagnosisError {
    /// The primary dataset source could not be read.
    /// Recovered by substituting the fallback dataset.
    #[error("dataset unavailable: {0}")]
    DatasetUnavailable(String),

    /// The network could not be constructed (e.g. empty
    /// vocabulary or zero labels). Fatal at startup.
    #[error("model build failed: {0}")]
    ModelBuild(String),

    /// The training loop failed. Fatal at startup; the model
    /// must be treated as unusable.
    #[error("training failed: {0}")]
    Training(String),

    /// Inference was requested before training completed.
    #[error("model is not ready yet; wait for training to finish and retry")]
    ModelNotReady,

    /// The query was empty or whitespace-only.
    #[error("query is empty; enter a symptom description first")]
    EmptyQuery,

    /// An underlying numeric/runtime failure during inference.
    /// Logged and surfaced per call; the model stays usable.
    #[error("prediction failed: {0}")]
    Prediction(String),
}

impl DiagnosisError {
    /// Stable machine-readable kind string, used when notifying
    /// the presenter via `on_error(kind, message)`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DatasetUnavailable(_) => "dataset_unavailable",
            Self::ModelBuild(_) => "model_build",
            Self::Training(_) => "training",
            Self::ModelNotReady => "model_not_ready",
            Self::EmptyQuery => "empty_query",
            Self::Prediction(_) => "prediction",
        }
    }
}
