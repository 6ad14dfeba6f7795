// ============================================================
// Layer 3 — Vocabulary
// ============================================================
// The bag-of-words feature space: every distinct lowercase
// token seen across the dataset's complaints, in first-seen
// order. Token position in this sequence is the token's slot
// in every feature vector, so the order must be deterministic.
//
// The Vec holds the canonical ordering; the HashMap mirrors it
// for O(1) lookups during encoding.

use std::collections::HashMap;

use crate::domain::entry::DatasetEntry;

/// Ordered set of unique lowercase tokens derived from the
/// training complaints. Frozen once the model is trained.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Scan every entry's complaint in dataset order: lowercase,
    /// split on whitespace runs, keep each distinct token at the
    /// position where it was first seen.
    ///
    /// An empty dataset yields an empty vocabulary; guarding
    /// against a zero-width feature space is the caller's job.
    pub fn build(entries: &[DatasetEntry]) -> Self {
        let mut tokens = Vec::new();
        let mut index = HashMap::new();

        for entry in entries {
            for word in entry.complaint.to_lowercase().split_whitespace() {
                if !index.contains_key(word) {
                    index.insert(word.to_string(), tokens.len());
                    tokens.push(word.to_string());
                }
            }
        }

        Self { tokens, index }
    }

    /// Slot of `token` in the feature space, or None if the
    /// token is outside the vocabulary.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Width of the feature space.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens in canonical (first-seen) order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<DatasetEntry> {
        vec![
            DatasetEntry::new("demam batuk pilek", "Flu", "Istirahat"),
            DatasetEntry::new("nyeri ulu hati", "Maag", "Makan sedikit"),
        ]
    }

    fn token_strs(vocab: &Vocabulary) -> Vec<&str> {
        vocab.tokens().iter().map(String::as_str).collect()
    }

    #[test]
    fn tokens_keep_first_seen_order() {
        let vocab = Vocabulary::build(&sample_entries());
        assert_eq!(
            token_strs(&vocab),
            ["demam", "batuk", "pilek", "nyeri", "ulu", "hati"]
        );
    }

    #[test]
    fn no_duplicate_tokens() {
        let entries = vec![
            DatasetEntry::new("demam batuk demam", "Flu", "Istirahat"),
            DatasetEntry::new("batuk kering", "Bronkitis", "Periksa dokter"),
        ];
        let vocab = Vocabulary::build(&entries);
        assert_eq!(token_strs(&vocab), ["demam", "batuk", "kering"]);
    }

    #[test]
    fn every_token_comes_from_a_complaint() {
        let entries = sample_entries();
        let vocab = Vocabulary::build(&entries);
        for token in vocab.tokens() {
            assert!(entries
                .iter()
                .any(|e| e.complaint.to_lowercase().split_whitespace().any(|w| w == token)));
        }
    }

    #[test]
    fn tokens_are_lowercased() {
        let entries = vec![DatasetEntry::new("Demam BATUK", "Flu", "Istirahat")];
        let vocab = Vocabulary::build(&entries);
        assert_eq!(token_strs(&vocab), ["demam", "batuk"]);
        assert_eq!(vocab.position("demam"), Some(0));
        assert_eq!(vocab.position("Demam"), None);
    }

    #[test]
    fn empty_dataset_yields_empty_vocabulary() {
        let vocab = Vocabulary::build(&[]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
    }
}
