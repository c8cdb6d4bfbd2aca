//! In-memory key-value store.
//!
//! The substitute backend for unit tests and for hosts running without a
//! durable storage context: everything reads and writes normally but
//! nothing survives the process.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::traits::KeyValueStore;

#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
