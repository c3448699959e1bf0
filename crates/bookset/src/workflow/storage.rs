//! Storage backends for persisted workflow blobs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{BooksetError, Result};

use super::state::ScopeKey;

/// Where workflow blobs live. The engine never looks inside the medium.
pub trait WorkflowStorage {
    /// The stored blob for a key, or `None` if nothing was saved.
    fn load(&self, key: &ScopeKey) -> Result<Option<String>>;

    fn save(&mut self, key: &ScopeKey, blob: &str) -> Result<()>;

    /// Forget a key. Clearing an absent key is not an error.
    fn clear(&mut self, key: &ScopeKey) -> Result<()>;
}

/// Blobs kept in memory; used by tests and one-shot sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: HashMap<ScopeKey, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl WorkflowStorage for MemoryStorage {
    fn load(&self, key: &ScopeKey) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &ScopeKey, blob: &str) -> Result<()> {
        self.blobs.insert(key.clone(), blob.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &ScopeKey) -> Result<()> {
        self.blobs.remove(key);
        Ok(())
    }
}

/// One JSON file per key in a directory.
///
/// ```text
/// .bookset/
/// ├── school-42__UKG.workflow.json        # Current state
/// └── school-42__UKG.workflow.history/
///     └── 2026-06-01T10-00-00.json        # Previous version
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    keep_history: bool,
}

impl FileStorage {
    /// Store files under `root`, created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            keep_history: false,
        }
    }

    /// Copy the previous file into a timestamped history entry before each save.
    pub fn with_history(mut self) -> Self {
        self.keep_history = true;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the current file for a key.
    pub fn path_for(&self, key: &ScopeKey) -> PathBuf {
        self.root.join(format!("{}.workflow.json", key.file_stem()))
    }

    /// History directory for a key.
    pub fn history_dir(&self, key: &ScopeKey) -> PathBuf {
        self.root.join(format!("{}.workflow.history", key.file_stem()))
    }

    /// All history entries for a key, newest first.
    pub fn list_history(&self, key: &ScopeKey) -> Result<Vec<PathBuf>> {
        let history_dir = self.history_dir(key);

        if !history_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(&history_dir)
            .map_err(|e| {
                BooksetError::Persistence(format!(
                    "Failed to read history directory '{}': {}",
                    history_dir.display(),
                    e
                ))
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();

        // Timestamped names sort chronologically
        entries.sort_by(|a, b| b.cmp(a));

        Ok(entries)
    }

    fn ensure_dir(dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                BooksetError::Persistence(format!(
                    "Failed to create directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    fn save_to_history(&self, key: &ScopeKey, current: &Path) -> Result<()> {
        let history_dir = self.history_dir(key);
        Self::ensure_dir(&history_dir)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let history_file = history_dir.join(format!("{}.json", timestamp));

        fs::copy(current, &history_file).map_err(|e| {
            BooksetError::Persistence(format!(
                "Failed to back up '{}' to '{}': {}",
                current.display(),
                history_file.display(),
                e
            ))
        })?;
        Ok(())
    }
}

impl WorkflowStorage for FileStorage {
    fn load(&self, key: &ScopeKey) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| BooksetError::Io { path, source: e })
    }

    fn save(&mut self, key: &ScopeKey, blob: &str) -> Result<()> {
        Self::ensure_dir(&self.root)?;

        let path = self.path_for(key);
        if self.keep_history && path.exists() {
            self.save_to_history(key, &path)?;
        }

        fs::write(&path, blob).map_err(|e| {
            BooksetError::Persistence(format!(
                "Failed to write file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn clear(&mut self, key: &ScopeKey) -> Result<()> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).map_err(|e| BooksetError::Io { path, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let key = ScopeKey::new("s1", "UKG");
        let mut storage = MemoryStorage::new();

        assert_eq!(storage.load(&key).unwrap(), None);
        storage.save(&key, "{}").unwrap();
        assert_eq!(storage.load(&key).unwrap().as_deref(), Some("{}"));

        storage.clear(&key).unwrap();
        storage.clear(&key).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_file_paths() {
        let storage = FileStorage::new("data");
        let key = ScopeKey::new("s1", "UKG");

        assert_eq!(storage.path_for(&key), Path::new("data/s1__UKG.workflow.json"));
        assert_eq!(storage.history_dir(&key), Path::new("data/s1__UKG.workflow.history"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));
        let key = ScopeKey::new("s1", "UKG");

        assert_eq!(storage.load(&key).unwrap(), None);
        storage.save(&key, r#"{"search_term":"x"}"#).unwrap();
        assert_eq!(storage.load(&key).unwrap().as_deref(), Some(r#"{"search_term":"x"}"#));

        storage.clear(&key).unwrap();
        assert_eq!(storage.load(&key).unwrap(), None);
        storage.clear(&key).unwrap();
    }

    #[test]
    fn test_file_storage_keeps_similar_keys_apart() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        let pairs = [
            (ScopeKey::new("school-1", "Class 1/A"), "class-1-slash-a"),
            (ScopeKey::new("school-1", "Class_1_A"), "class-1-underscore-a"),
            (ScopeKey::new("a__b", "c"), "school-a-b"),
            (ScopeKey::new("a", "b__c"), "school-a"),
        ];

        for (key, blob) in &pairs {
            storage.save(key, blob).unwrap();
        }
        for (key, blob) in &pairs {
            assert_eq!(storage.load(key).unwrap().as_deref(), Some(*blob));
        }

        storage.clear(&pairs[0].0).unwrap();
        assert_eq!(storage.load(&pairs[0].0).unwrap(), None);
        assert_eq!(storage.load(&pairs[1].0).unwrap().as_deref(), Some(pairs[1].1));
    }

    #[test]
    fn test_file_storage_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).with_history();
        let key = ScopeKey::new("s1", "UKG");

        storage.save(&key, "first").unwrap();
        assert!(storage.list_history(&key).unwrap().is_empty());

        storage.save(&key, "second").unwrap();
        let history = storage.list_history(&key).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(fs::read_to_string(&history[0]).unwrap(), "first");
        assert_eq!(storage.load(&key).unwrap().as_deref(), Some("second"));
    }
}
