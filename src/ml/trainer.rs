// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full fit loop using Burn's DataLoader and Adam.
//
//   - Training runs on Autodiff<NdArray> for gradients
//   - model.valid() strips autodiff for the inference model
//   - Loss is categorical cross-entropy against the one-hot
//     targets: -(target · log_softmax(logits)) averaged over
//     the batch
//   - After every epoch the presenter receives
//     (epoch, fraction, loss) — fire-and-forget; the loop
//     never blocks on or reacts to presentation
//
// All batch tensors are scope-bound, so transient training
// buffers are released when the loop exits on every path.

use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
    tensor::activation::log_softmax,
};

use crate::application::init_use_case::TrainConfig;
use crate::data::{batcher::DiagnosisBatcher, dataset::DiagnosisDataset};
use crate::domain::errors::DiagnosisError;
use crate::domain::traits::Presenter;
use crate::ml::model::{ClassifierConfig, ClassifierModel};

type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;
pub type InferBackend = burn::backend::NdArray;

/// Categorical cross-entropy of raw logits against one-hot
/// targets, averaged over the batch.
fn cross_entropy<B: Backend>(logits: Tensor<B, 2>, targets: Tensor<B, 2>) -> Tensor<B, 1> {
    let log_probs = log_softmax(logits, 1);
    (-(targets * log_probs).sum_dim(1)).mean()
}

/// Build the classifier and run the full fit loop over
/// `dataset`. Returns the trained model on the inference
/// backend, or a fatal error that aborts startup.
pub fn run_training(
    cfg: &TrainConfig,
    dataset: DiagnosisDataset,
    vocab_size: usize,
    num_labels: usize,
    presenter: &dyn Presenter,
) -> Result<ClassifierModel<InferBackend>, DiagnosisError> {
    let device = burn::backend::ndarray::NdArrayDevice::default();

    let mut model: ClassifierModel<TrainBackend> =
        ClassifierConfig::new(vocab_size, num_labels).init(&device)?;
    tracing::info!(
        "Model ready: {} features -> 32 -> 16 -> {} labels",
        vocab_size,
        num_labels,
    );

    // Adam with its standard defaults (lr comes from the config)
    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    let batcher = DiagnosisBatcher::<TrainBackend>::new(device.clone());
    let loader = DataLoaderBuilder::new(batcher)
        .batch_size(cfg.batch_size)
        .shuffle(42)
        .num_workers(1)
        .build(dataset);

    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut batches = 0usize;
        let mut correct = 0usize;
        let mut total = 0usize;

        for batch in loader.iter() {
            let logits = model.forward(batch.features);
            let loss = cross_entropy(logits.clone(), batch.targets.clone());

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            if !loss_val.is_finite() {
                return Err(DiagnosisError::Training(format!(
                    "loss diverged at epoch {epoch} (loss={loss_val})"
                )));
            }
            loss_sum += loss_val;
            batches += 1;

            // Accuracy: argmax(1) returns [batch, 1], flatten to [batch]
            let predicted = logits.argmax(1).flatten::<1>(0, 1);
            let expected = batch.targets.argmax(1).flatten::<1>(0, 1);
            total += expected.dims()[0];
            let hits: i64 = predicted.equal(expected).int().sum().into_scalar().elem::<i64>();
            correct += hits as usize;

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        let avg_loss = if batches > 0 { loss_sum / batches as f64 } else { f64::NAN };
        let accuracy = if total > 0 { correct as f64 / total as f64 } else { 0.0 };
        tracing::debug!(
            "Epoch {:>3}/{} | loss={:.4} | acc={:.1}%",
            epoch,
            cfg.epochs,
            avg_loss,
            accuracy * 100.0,
        );

        presenter.on_epoch(epoch, epoch as f64 / cfg.epochs as f64, avg_loss);
    }

    tracing::info!("Training complete");
    // Strip autodiff state; the returned model is inference-only
    Ok(model.valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::data::loader::fallback_dataset;
    use crate::domain::entry::Prediction;
    use crate::domain::vocabulary::Vocabulary;
    use crate::ml::inferencer::Inferencer;

    struct RecordingPresenter {
        epochs: RefCell<Vec<(usize, f64, f64)>>,
    }

    impl RecordingPresenter {
        fn new() -> Self {
            Self { epochs: RefCell::new(Vec::new()) }
        }
    }

    impl Presenter for RecordingPresenter {
        fn on_epoch(&self, epoch: usize, fraction: f64, loss: f64) {
            self.epochs.borrow_mut().push((epoch, fraction, loss));
        }
        fn on_ready(&self) {}
        fn on_error(&self, _kind: &str, _message: &str) {}
        fn on_result(&self, _prediction: &Prediction) {}
    }

    fn train_cfg(epochs: usize) -> TrainConfig {
        TrainConfig {
            dataset_path: String::new(),
            epochs,
            batch_size: 8,
            lr: 1e-3,
        }
    }

    #[test]
    fn reports_every_epoch_with_monotonic_fractions() {
        let entries = fallback_dataset();
        let vocab = Vocabulary::build(&entries);
        let dataset = DiagnosisDataset::from_entries(&entries, &vocab);
        let presenter = RecordingPresenter::new();

        run_training(&train_cfg(4), dataset, vocab.len(), entries.len(), &presenter).unwrap();

        let epochs = presenter.epochs.borrow();
        assert_eq!(epochs.len(), 4);
        assert_eq!(epochs[0].0, 1);
        assert_eq!(epochs[3].0, 4);
        assert!((epochs[0].1 - 0.25).abs() < 1e-9);
        assert!((epochs[3].1 - 1.0).abs() < 1e-9);
        assert!(epochs.iter().all(|e| e.2.is_finite()));
    }

    #[test]
    fn empty_vocabulary_aborts_before_training() {
        let dataset = DiagnosisDataset::from_entries(&[], &Vocabulary::default());
        let presenter = RecordingPresenter::new();
        let err = run_training(&train_cfg(1), dataset, 0, 0, &presenter).unwrap_err();
        assert_eq!(err.kind(), "model_build");
        assert!(presenter.epochs.borrow().is_empty());
    }

    // Soft correctness property: training is stochastic, but on
    // the two-entry fallback dataset 200 epochs separate the
    // classes reliably.
    #[test]
    fn relearns_training_complaints() {
        let entries = fallback_dataset();
        let vocab = Vocabulary::build(&entries);
        let dataset = DiagnosisDataset::from_entries(&entries, &vocab);
        let presenter = RecordingPresenter::new();

        let model =
            run_training(&train_cfg(200), dataset, vocab.len(), entries.len(), &presenter)
                .unwrap();
        let inferencer = Inferencer::new(model);

        let flu = inferencer.predict("demam batuk pilek", &vocab, &entries).unwrap();
        assert_eq!(flu.diagnosis, "Flu");
        assert!(flu.confidence_percent >= 50.0);

        let maag = inferencer.predict("nyeri ulu hati", &vocab, &entries).unwrap();
        assert_eq!(maag.diagnosis, "Maag");
    }
}
