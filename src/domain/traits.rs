// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types, we
// can swap implementations without changing the code that uses
// them:
//   - JsonDatasetLoader implements DatasetSource
//   - (future) HttpLoader could also implement DatasetSource
//   - ConsolePresenter implements Presenter
//   - tests use a recording presenter
//
// The application layer only sees the traits.

use crate::domain::entry::{DatasetEntry, Prediction};
use crate::domain::errors::DiagnosisError;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can supply the ordered training dataset.
///
/// The core only requires a non-empty ordered sequence of
/// complete `{complaint, diagnosis, treatment}` triples; where
/// the entries come from is this trait's concern.
pub trait DatasetSource {
    /// Load the ordered dataset from this source.
    fn load(&self) -> Result<Vec<DatasetEntry>, DiagnosisError>;
}

// ─── Presenter ────────────────────────────────────────────────────────────────
/// Receives structured notifications from the pipeline.
///
/// Every method is fire-and-forget: implementations must return
/// promptly and must never fail — the training loop and the
/// inference service do not block on, or react to, presentation.
pub trait Presenter {
    /// Called after every training epoch with the 1-based epoch
    /// index, the fraction of the run completed, and the epoch's
    /// average loss.
    fn on_epoch(&self, epoch: usize, fraction: f64, loss: f64);

    /// Called once training has completed and the model is
    /// ready for inference.
    fn on_ready(&self);

    /// Called on any failure, with a stable kind string (see
    /// `DiagnosisError::kind`) and a human-readable message.
    fn on_error(&self, kind: &str, message: &str);

    /// Called with the outcome of each successful inference.
    fn on_result(&self, prediction: &Prediction);
}
