// ============================================================
// Layer 3 — Dataset Entry and Prediction Domain Types
// ============================================================
// A DatasetEntry is one labelled training example. The dataset
// is an ordered sequence of these; an entry's position in that
// sequence IS its label index — there is no separate label id.
//
// A Prediction is what the inference service hands back to the
// presentation layer: the chosen diagnosis, its treatment note,
// and the softmax confidence as a percentage.

use serde::{Deserialize, Serialize};

/// One labelled example: a free-text symptom complaint, the
/// diagnosis it maps to, and the associated treatment note.
///
/// The serde aliases accept the upstream dataset format, which
/// uses Indonesian field names (`keluhan`/`penyakit`/`solusi`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Free-text symptom description, e.g. "demam batuk pilek"
    #[serde(alias = "keluhan")]
    pub complaint: String,

    /// The diagnosis label for this complaint
    #[serde(alias = "penyakit")]
    pub diagnosis: String,

    /// Treatment note shown alongside the diagnosis
    #[serde(alias = "solusi")]
    pub treatment: String,
}

impl DatasetEntry {
    pub fn new(
        complaint: impl Into<String>,
        diagnosis: impl Into<String>,
        treatment: impl Into<String>,
    ) -> Self {
        Self {
            complaint: complaint.into(),
            diagnosis: diagnosis.into(),
            treatment: treatment.into(),
        }
    }

    /// An entry is usable for training only if all three fields
    /// carry text. The loader drops entries that fail this.
    pub fn is_complete(&self) -> bool {
        !self.complaint.trim().is_empty()
            && !self.diagnosis.trim().is_empty()
            && !self.treatment.trim().is_empty()
    }
}

/// The outcome of a single inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub diagnosis: String,
    pub treatment: String,
    /// Probability mass of the selected label × 100,
    /// rounded to two decimal places
    pub confidence_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_entry_is_complete() {
        let e = DatasetEntry::new("demam batuk", "Flu", "Istirahat");
        assert!(e.is_complete());
    }

    #[test]
    fn blank_field_makes_entry_incomplete() {
        let e = DatasetEntry::new("demam batuk", "  ", "Istirahat");
        assert!(!e.is_complete());
    }

    #[test]
    fn accepts_upstream_indonesian_field_names() {
        let json = r#"{"keluhan": "nyeri ulu hati", "penyakit": "Maag", "solusi": "Makan sedikit"}"#;
        let e: DatasetEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.complaint, "nyeri ulu hati");
        assert_eq!(e.diagnosis, "Maag");
    }
}
