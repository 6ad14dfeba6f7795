// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads the training dataset from a JSON file: an array of
// `{complaint, diagnosis, treatment}` objects (the upstream
// Indonesian field names are accepted via serde aliases).
//
// Entries with a blank field are dropped with a warning —
// position in the remaining sequence is the label index, so
// filtering happens before any index is assigned.
//
// When the file is missing, unreadable, or yields no usable
// entries, the init use case substitutes `fallback_dataset()`
// instead of failing; that recovery lives in Layer 2, not here.

use std::fs;

use crate::domain::entry::DatasetEntry;
use crate::domain::errors::DiagnosisError;
use crate::domain::traits::DatasetSource;

/// Loads the dataset from a JSON file on disk.
/// Implements the DatasetSource trait from Layer 3.
pub struct JsonDatasetLoader {
    path: String,
}

impl JsonDatasetLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonDatasetLoader {
    fn load(&self) -> Result<Vec<DatasetEntry>, DiagnosisError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| DiagnosisError::DatasetUnavailable(format!("{}: {e}", self.path)))?;

        let entries: Vec<DatasetEntry> = serde_json::from_str(&raw)
            .map_err(|e| DiagnosisError::DatasetUnavailable(format!("{}: {e}", self.path)))?;

        let total = entries.len();
        let usable: Vec<DatasetEntry> =
            entries.into_iter().filter(DatasetEntry::is_complete).collect();

        if usable.len() < total {
            tracing::warn!(
                "Dropped {} incomplete dataset entries out of {}",
                total - usable.len(),
                total,
            );
        }

        if usable.is_empty() {
            return Err(DiagnosisError::DatasetUnavailable(format!(
                "{}: no usable entries",
                self.path
            )));
        }

        tracing::info!("Dataset loaded: {} entries from {}", usable.len(), self.path);
        Ok(usable)
    }
}

/// The compiled-in dataset used when the primary source is
/// unavailable. Two entries, matching the upstream defaults.
pub fn fallback_dataset() -> Vec<DatasetEntry> {
    vec![
        DatasetEntry::new(
            "demam batuk pilek sakit tenggorokan",
            "Flu",
            "Istirahat cukup, minum air hangat, konsumsi vitamin C",
        ),
        DatasetEntry::new(
            "nyeri ulu hati mual perut kembung",
            "Maag",
            "Makan porsi kecil tapi sering, hindari makanan pedas/berminyak",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_nonempty_and_complete() {
        let entries = fallback_dataset();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(DatasetEntry::is_complete));
    }

    #[test]
    fn missing_file_reports_dataset_unavailable() {
        let loader = JsonDatasetLoader::new("/nonexistent/dataset.json");
        let err = loader.load().unwrap_err();
        assert_eq!(err.kind(), "dataset_unavailable");
    }

    #[test]
    fn loads_and_filters_entries() {
        let dir = std::env::temp_dir().join("symptom-diagnosis-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dataset.json");
        fs::write(
            &path,
            r#"[
                {"complaint": "demam batuk", "diagnosis": "Flu", "treatment": "Istirahat"},
                {"complaint": "", "diagnosis": "Maag", "treatment": "Makan sedikit"}
            ]"#,
        )
        .unwrap();

        let loader = JsonDatasetLoader::new(path.to_string_lossy().to_string());
        let entries = loader.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].diagnosis, "Flu");
    }
}
