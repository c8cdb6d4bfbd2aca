//! File-backed key-value store.
//!
//! Each slot lives in its own `<key>.json` file under a base directory.
//! Writes go through a temp file followed by a rename so a crashed write
//! never leaves a half-written slot behind.

use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::storage::traits::KeyValueStore;

pub struct FileKeyValueStore {
    base_directory: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `base_directory`, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {:?}", base_path);
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a store in the platform data directory
    /// (e.g. `~/.local/share/calorie-tracker` on Linux).
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine platform data directory"))?;
        Self::new(data_dir.join("calorie-tracker"))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let slot_path = self.slot_path(key);

        // Atomic write pattern: write to temp file, then rename
        let temp_path = slot_path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &slot_path)?;

        debug!("Wrote {} bytes to slot file {:?}", value.len(), slot_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (FileKeyValueStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileKeyValueStore::new(temp_dir.path()).expect("Failed to create store");
        (store, temp_dir)
    }

    #[test]
    fn test_get_missing_slot_returns_none() {
        let (store, _temp_dir) = setup_store();
        assert_eq!(store.get("logged-foods").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let (store, _temp_dir) = setup_store();
        store.set("logged-foods", "[]").unwrap();
        assert_eq!(store.get("logged-foods").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_values_survive_a_new_store_instance() {
        let (store, temp_dir) = setup_store();
        store.set("user-profile", "{\"age\":\"30\"}").unwrap();

        // Simulating an app restart over the same directory
        let reopened = FileKeyValueStore::new(temp_dir.path()).unwrap();
        assert_eq!(
            reopened.get("user-profile").unwrap(),
            Some("{\"age\":\"30\"}".to_string())
        );
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (store, temp_dir) = setup_store();
        store.set("meal-plans", "[]").unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
