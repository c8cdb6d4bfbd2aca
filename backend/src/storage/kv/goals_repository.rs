//! # Goals Repository
//!
//! Whole-record get/replace on the `nutritional-goals` slot, with the same
//! singleton semantics as the profile.

use anyhow::Result;
use log::info;
use shared::NutritionalGoals;

use super::connection::{KvConnection, NUTRITIONAL_GOALS_KEY};
use crate::storage::traits::GoalsStorage;

#[derive(Clone)]
pub struct GoalsRepository {
    connection: KvConnection,
}

impl GoalsRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }
}

impl GoalsStorage for GoalsRepository {
    fn get(&self) -> Result<Option<NutritionalGoals>> {
        Ok(self.connection.read_slot(NUTRITIONAL_GOALS_KEY))
    }

    fn save(&self, goals: &NutritionalGoals) -> Result<()> {
        self.connection.write_slot(NUTRITIONAL_GOALS_KEY, goals)?;
        info!("Saved nutritional goals ({} kcal)", goals.calories);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::memory_store::MemoryKeyValueStore;
    use std::sync::Arc;

    fn setup_repo() -> GoalsRepository {
        let store = Arc::new(MemoryKeyValueStore::new());
        GoalsRepository::new(KvConnection::new(store))
    }

    #[test]
    fn test_get_before_any_save_is_none() {
        let repo = setup_repo();
        assert!(repo.get().unwrap().is_none());
    }

    #[test]
    fn test_save_then_get_returns_exact_record() {
        let repo = setup_repo();
        let goals = NutritionalGoals {
            calories: 2759,
            protein: 176,
            carbs: 341,
            fat: 77,
            fiber: 25,
            sugar: 69,
            sodium: 2300,
        };

        repo.save(&goals).unwrap();
        assert_eq!(repo.get().unwrap(), Some(goals));
    }

    #[test]
    fn test_save_replaces_whole_record() {
        let repo = setup_repo();
        repo.save(&NutritionalGoals::default()).unwrap();

        let mut updated = NutritionalGoals::default();
        updated.calories = 1800;
        repo.save(&updated).unwrap();

        assert_eq!(repo.get().unwrap().unwrap().calories, 1800);
    }
}
