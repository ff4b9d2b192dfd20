//! Read-through reference data store.
//!
//! Each collection is loaded from its JSON file on first access and cached
//! for the life of the process; the cache is invalidated only by restart.
//! A missing or corrupt file degrades to an empty collection rather than a
//! startup failure.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

use crate::records::{LigandRecord, ProteinRecord};

pub const PROTEINS_FILE: &str = "proteins.json";
pub const LIGANDS_FILE: &str = "ligands.json";

/// In-process cache over the on-disk reference collections.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    data_dir: PathBuf,
    proteins: OnceLock<Arc<Vec<ProteinRecord>>>,
    ligands: OnceLock<Arc<Vec<LigandRecord>>>,
}

impl ReferenceStore {
    /// Create a store rooted at the given data directory. Nothing is read
    /// until a collection is first requested.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            proteins: OnceLock::new(),
            ligands: OnceLock::new(),
        }
    }

    /// The curated protein collection, loaded on first call.
    pub fn proteins(&self) -> Arc<Vec<ProteinRecord>> {
        self.proteins
            .get_or_init(|| Arc::new(load_collection(&self.data_dir.join(PROTEINS_FILE))))
            .clone()
    }

    /// The ligand library, loaded on first call.
    pub fn ligands(&self) -> Arc<Vec<LigandRecord>> {
        self.ligands
            .get_or_init(|| Arc::new(load_collection(&self.data_dir.join(LIGANDS_FILE))))
            .clone()
    }
}

/// Load a JSON array of records; missing or unparseable files yield an
/// empty collection.
fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Reference file {} unavailable: {}", path.display(), e);
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(records) => {
            debug!("Loaded {} records from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            warn!("Reference file {} is corrupt: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PROTEIN_FIXTURE: &str = r#"[
        {"id": 1, "name": "Hemoglobin subunit alpha", "uniprot_id": "P69905",
         "function": "Oxygen transport", "category": "Transport Protein"},
        {"id": 2, "name": "Serum albumin", "uniprot_id": "P02768",
         "function": "Plasma carrier", "category": "Transport Protein"}
    ]"#;

    #[test]
    fn test_loads_collection_from_disk() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PROTEINS_FILE), PROTEIN_FIXTURE).unwrap();

        let store = ReferenceStore::new(dir.path());
        let proteins = store.proteins();
        assert_eq!(proteins.len(), 2);
        assert_eq!(proteins[0].uniprot_id, "P69905");
    }

    #[test]
    fn test_missing_file_yields_empty_collection() {
        let dir = tempdir().unwrap();
        let store = ReferenceStore::new(dir.path());
        assert!(store.proteins().is_empty());
        assert!(store.ligands().is_empty());
    }

    #[test]
    fn test_corrupt_file_yields_empty_collection() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(LIGANDS_FILE), "{ not json ]").unwrap();

        let store = ReferenceStore::new(dir.path());
        assert!(store.ligands().is_empty());
    }

    #[test]
    fn test_collection_is_cached_after_first_read() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PROTEINS_FILE), PROTEIN_FIXTURE).unwrap();

        let store = ReferenceStore::new(dir.path());
        assert_eq!(store.proteins().len(), 2);

        // Mutating the file after the first read must not be observed.
        fs::write(dir.path().join(PROTEINS_FILE), "[]").unwrap();
        assert_eq!(store.proteins().len(), 2);
    }
}
