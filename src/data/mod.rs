// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything between raw input and model-ready tensors:
//
//   loader.rs  — reads the dataset JSON from disk, with the
//                compiled-in fallback when the file is missing
//                or malformed
//   encoder.rs — turns free text into a fixed-length multi-hot
//                feature vector against a Vocabulary
//   dataset.rs — encoded training samples + one-hot targets,
//                exposed through Burn's Dataset trait
//   batcher.rs — stacks samples into batch tensors for the
//                DataLoader
//
// This layer may import Burn's data traits, but the model
// architecture itself lives in Layer 5 (ml).

/// Stacks encoded samples into batch tensors
pub mod batcher;

/// Encoded samples behind Burn's Dataset trait
pub mod dataset;

/// Multi-hot text encoding
pub mod encoder;

/// Dataset JSON loading with fallback
pub mod loader;
