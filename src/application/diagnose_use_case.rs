// ============================================================
// Layer 2 — Diagnose Use Case
// ============================================================
// The inference service: guard the query, run the model, map
// the winning label back to its dataset entry.
//
// Guards come first — an empty query or a not-ready context is
// rejected before the model is touched. Prediction failures
// are per-call: they are surfaced through the presenter and
// leave the context fully usable for the next query.

use crate::application::context::AppContext;
use crate::domain::entry::Prediction;
use crate::domain::errors::DiagnosisError;
use crate::domain::traits::Presenter;

pub struct DiagnoseUseCase<'a> {
    context: &'a AppContext,
}

impl<'a> DiagnoseUseCase<'a> {
    pub fn new(context: &'a AppContext) -> Self {
        Self { context }
    }

    /// Classify one free-text query. Successful predictions and
    /// per-call failures are both reported to the presenter;
    /// the error is returned as well so callers can decide how
    /// to proceed.
    pub fn diagnose(
        &self,
        query: &str,
        presenter: &dyn Presenter,
    ) -> Result<Prediction, DiagnosisError> {
        match self.try_diagnose(query) {
            Ok(prediction) => {
                presenter.on_result(&prediction);
                Ok(prediction)
            }
            Err(e) => {
                presenter.on_error(e.kind(), &e.to_string());
                Err(e)
            }
        }
    }

    fn try_diagnose(&self, query: &str) -> Result<Prediction, DiagnosisError> {
        if query.trim().is_empty() {
            return Err(DiagnosisError::EmptyQuery);
        }

        let inferencer = self.context.inferencer()?;
        inferencer.predict(query, self.context.vocabulary(), self.context.dataset())
    }
}
