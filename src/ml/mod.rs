// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn model and training code.
// No other layer builds models or touches the optimizer —
// data (Layer 4) only implements Burn's data traits.
//
// What's in this layer:
//
//   model.rs      — The feed-forward classifier:
//                   two ReLU hidden layers (32, 16) and a
//                   softmax output over the label set
//
//   trainer.rs    — The training loop: Adam, categorical
//                   cross-entropy against one-hot targets,
//                   per-epoch progress pushed to the presenter
//
//   inferencer.rs — Single-query inference: encode, forward,
//                   softmax, first-max label selection,
//                   confidence rounding
//
// The model is tiny, so everything runs on the NdArray CPU
// backend; training wraps it in Autodiff for gradients.

/// Feed-forward classifier architecture
pub mod model;

/// Training loop with per-epoch progress reporting
pub mod trainer;

/// Single-query inference
pub mod inferencer;
