// ============================================================
// Layer 4 — Text Encoder
// ============================================================
// Bag-of-words multi-hot encoding: a fixed-length vector with
// one slot per vocabulary token, 1 if the token occurs in the
// input text, else 0. Order and repetition within the text are
// discarded — this is presence, not frequency.
//
// Unknown tokens are silently ignored. That is documented
// contract, not a gap: a query word the model never saw cannot
// carry signal, so it contributes nothing to the vector.

use crate::domain::vocabulary::Vocabulary;

/// Encode `text` against `vocabulary`.
///
/// Pure function: lowercase, split on whitespace runs, set the
/// slot of every recognised token to 1. Empty text and text
/// made entirely of unknown tokens both yield the all-zero
/// vector of length `vocabulary.len()`.
pub fn encode(text: &str, vocabulary: &Vocabulary) -> Vec<f32> {
    let mut features = vec![0.0; vocabulary.len()];

    for word in text.to_lowercase().split_whitespace() {
        if let Some(slot) = vocabulary.position(word) {
            features[slot] = 1.0;
        }
    }

    features
}
