//! The history store and its persisted format.

use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use eurolens_core::AnalysisResult;

/// Errors from history persistence. Only write paths fail; read-side
/// corruption is recovered by resetting to an empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("history I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A locally persisted, timestamped wrapper around one past analysis result.
///
/// Never mutated after creation; removed only by a full clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisHistoryItem {
    /// Locally generated identity, fresh per `add`.
    pub id: Uuid,
    /// Capture time, local clock.
    pub timestamp: DateTime<Utc>,
    pub response: AnalysisResult,
}

/// On-disk envelope. A version bump resets the list instead of migrating.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    items: Vec<AnalysisHistoryItem>,
}

const CURRENT_VERSION: u32 = 1;

/// Append-front log of past analysis results, persisted as one JSON blob.
///
/// Mutations serialize behind a write lock held across the in-memory update
/// and the persist, so concurrent writers cannot lose updates; reads take a
/// snapshot under the read lock and never observe a torn list.
pub struct HistoryStore {
    path: PathBuf,
    items: RwLock<Vec<AnalysisHistoryItem>>,
}

impl HistoryStore {
    /// Opens the store at `path`, loading any persisted history.
    ///
    /// A missing file starts empty. Unparsable or version-mismatched data
    /// also starts empty (data loss is preferred over refusing to start),
    /// and the condition is logged.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = Self::load(&path);
        Self {
            path,
            items: RwLock::new(items),
        }
    }

    fn load(path: &Path) -> Vec<AnalysisHistoryItem> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "history unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_reader::<_, HistoryFile>(BufReader::new(file)) {
            Ok(parsed) if parsed.version == CURRENT_VERSION => parsed.items,
            Ok(parsed) => {
                tracing::warn!(
                    found = parsed.version,
                    expected = CURRENT_VERSION,
                    "history version mismatch, resetting"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "history corrupt, resetting");
                Vec::new()
            }
        }
    }

    /// Appends `result` at the front of the history and persists the full
    /// list. Returns the created item.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the list cannot be written to disk; the
    /// in-memory list keeps the new item either way.
    pub fn add(&self, result: AnalysisResult) -> Result<AnalysisHistoryItem, StoreError> {
        let item = AnalysisHistoryItem {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            response: result,
        };

        let mut items = self.items.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        items.insert(0, item.clone());
        self.persist(&items)?;
        Ok(item)
    }

    /// Snapshot of the history, newest first.
    #[must_use]
    pub fn all(&self) -> Vec<AnalysisHistoryItem> {
        self.items
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Empties the history and removes the persisted blob.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the blob exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut items = self.items.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        items.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Writes the whole list to a sibling temp file, then renames it over
    /// the blob so readers never see a partial write.
    fn persist(&self, items: &[AnalysisHistoryItem]) -> Result<(), StoreError> {
        let envelope = HistoryFile {
            version: CURRENT_VERSION,
            items: items.to_vec(),
        };

        let tmp_path = self.path.with_extension("tmp");
        let file = fs::File::create(&tmp_path)?;
        serde_json::to_writer(BufWriter::new(file), &envelope)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(company: &str) -> AnalysisResult {
        serde_json::from_value(serde_json::json!({
            "id": 42,
            "identified_product_name": "Sparkling Water",
            "identified_company": company,
            "identified_headquarters": "DE",
            "raw_country": "Germany",
            "classification": "europeanCountry",
        }))
        .unwrap()
    }

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("history.json")
    }

    #[test]
    fn add_inserts_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(store_path(&dir));

        store.add(sample_result("First GmbH")).unwrap();
        store.add(sample_result("Second GmbH")).unwrap();

        let items = store.all();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].response.identified_company.as_deref(),
            Some("Second GmbH")
        );
        assert_eq!(
            items[1].response.identified_company.as_deref(),
            Some("First GmbH")
        );
    }

    #[test]
    fn persisted_history_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let store = HistoryStore::open(&path);
        let first = store.add(sample_result("First GmbH")).unwrap();
        let second = store.add(sample_result("Second GmbH")).unwrap();
        drop(store);

        let reloaded = HistoryStore::open(&path);
        let items = reloaded.all();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, second.id);
        assert_eq!(items[1].id, first.id);
        assert_eq!(items[0].timestamp, second.timestamp);
        assert_eq!(items[0].response, second.response);
        assert_eq!(items[1].response, first.response);
    }

    #[test]
    fn each_item_gets_a_distinct_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(store_path(&dir));
        let a = store.add(sample_result("A")).unwrap();
        let b = store.add(sample_result("B")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn corrupt_blob_resets_to_empty_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, b"{ this is not json").unwrap();

        let store = HistoryStore::open(&path);
        assert!(store.all().is_empty());

        // The store stays usable after the reset.
        store.add(sample_result("Recovered GmbH")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn version_mismatch_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, br#"{"version": 99, "items": []}"#).unwrap();

        let store = HistoryStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_and_removes_the_blob() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let store = HistoryStore::open(&path);
        store.add(sample_result("Gone GmbH")).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(!path.exists());

        let reloaded = HistoryStore::open(&path);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn clear_on_a_fresh_store_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(store_path(&dir));
        store.clear().unwrap();
    }
}
