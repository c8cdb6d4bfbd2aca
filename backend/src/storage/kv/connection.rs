//! # KV Connection
//!
//! `KvConnection` wraps the injected key-value store and centralizes slot
//! access for the repositories: the fixed slot keys, JSON encode/decode,
//! and the lenient read policy.
//!
//! ## Read Policy
//!
//! A slot that is absent, unreadable, or holds a malformed value reads as
//! "no data". Fresh installs, storage-less hosts and corrupted slots all
//! degrade to the same empty state instead of raising; malformed content is
//! logged and discarded on the next write. Write failures are the one
//! storage fault that propagates to callers.

use anyhow::Result;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::storage::traits::KeyValueStore;

/// Slot key for the logged-food collection
pub const LOGGED_FOODS_KEY: &str = "logged-foods";
/// Slot key for the planned-meal collection
pub const MEAL_PLANS_KEY: &str = "meal-plans";
/// Slot key for the user-profile singleton
pub const USER_PROFILE_KEY: &str = "user-profile";
/// Slot key for the nutritional-goals singleton
pub const NUTRITIONAL_GOALS_KEY: &str = "nutritional-goals";

/// Shared handle to the injected store; repositories clone this freely.
#[derive(Clone)]
pub struct KvConnection {
    store: Arc<dyn KeyValueStore>,
}

impl KvConnection {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read and decode a slot. Absent, unreadable and malformed slots all
    /// return `None`.
    pub fn read_slot<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Storage read failed for slot '{}': {}. Treating as empty.", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding malformed value in slot '{}': {}", key, e);
                None
            }
        }
    }

    /// Encode and replace a slot.
    pub fn write_slot<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)?;
        Ok(())
    }
}
