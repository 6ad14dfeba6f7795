// ============================================================
// Layer 6 — Console Presenter
// ============================================================
// Renders pipeline notifications on stdout/stderr. This is the
// only place training progress and diagnosis results become
// text; the core layers only push structured events.
//
// Progress is throttled to every tenth epoch (plus the final
// one) so a 200-epoch run doesn't print 200 lines.

use crate::domain::entry::Prediction;
use crate::domain::traits::Presenter;

const EPOCH_PRINT_EVERY: usize = 10;

pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for ConsolePresenter {
    fn on_epoch(&self, epoch: usize, fraction: f64, loss: f64) {
        if epoch % EPOCH_PRINT_EVERY == 0 || fraction >= 1.0 {
            println!(
                "Training model... {:>6.2}% | loss={:.4}",
                fraction * 100.0,
                loss,
            );
        }
    }

    fn on_ready(&self) {
        println!("Model ready. Enter a symptom description to get a diagnosis.");
    }

    fn on_error(&self, kind: &str, message: &str) {
        eprintln!("[{kind}] {message}");
    }

    fn on_result(&self, prediction: &Prediction) {
        println!("\nDiagnosis:  {}", prediction.diagnosis);
        println!("Confidence: {:.2}%", prediction.confidence_percent);
        println!("Treatment:  {}", prediction.treatment);
    }
}
