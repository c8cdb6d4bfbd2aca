//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use chrono::NaiveDate;
use shared::{LoggedFood, NewLoggedFood, NewPlannedMeal, NutritionalGoals, PlannedMeal, UserProfile};

/// The injected key-value backend all repositories persist through.
///
/// This is the Rust rendition of the host's local storage: synchronous
/// whole-value `get`/`set`, no multi-key transactions. Implementations must
/// be constructible per instance so tests can substitute an in-memory fake;
/// nothing in this crate holds a process-wide store.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, or `None` if the key was
    /// never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Trait defining the interface for logged-food storage operations
pub trait FoodLogStorage {
    /// List every logged food in insertion order; empty on a fresh store
    fn list_all(&self) -> Result<Vec<LoggedFood>>;

    /// List logged foods whose calendar day equals `date`
    fn list_for_date(&self, date: NaiveDate) -> Result<Vec<LoggedFood>>;

    /// List logged foods created today
    fn list_for_today(&self) -> Result<Vec<LoggedFood>>;

    /// Assign ids/timestamps/dates to a batch of new records, append them,
    /// and rewrite the collection once. Returns the full updated collection.
    /// An empty batch is valid and leaves the collection unchanged.
    fn add_many(&self, new_foods: Vec<NewLoggedFood>) -> Result<Vec<LoggedFood>>;

    /// Remove the record with the matching id (no-op if absent) and return
    /// the updated collection.
    fn delete_by_id(&self, id: &str) -> Result<Vec<LoggedFood>>;
}

/// Trait defining the interface for planned-meal storage operations
pub trait MealPlanStorage {
    /// List every planned meal in insertion order; empty on a fresh store
    fn list_all(&self) -> Result<Vec<PlannedMeal>>;

    /// List planned meals scheduled for `date`
    fn list_for_date(&self, date: NaiveDate) -> Result<Vec<PlannedMeal>>;

    /// Assign an id to a single new plan, append it, and rewrite the
    /// collection once. Returns the full updated collection.
    fn add(&self, new_plan: NewPlannedMeal) -> Result<Vec<PlannedMeal>>;

    /// Remove the plan with the matching id (no-op if absent) and return
    /// the updated collection.
    fn delete_by_id(&self, id: &str) -> Result<Vec<PlannedMeal>>;
}

/// Trait defining the interface for the user-profile singleton
pub trait ProfileStorage {
    /// Read the saved profile, or `None` if one was never saved
    fn get(&self) -> Result<Option<UserProfile>>;

    /// Replace the whole profile record
    fn save(&self, profile: &UserProfile) -> Result<()>;
}

/// Trait defining the interface for the nutritional-goals singleton
pub trait GoalsStorage {
    /// Read the saved goals, or `None` if none were ever saved
    fn get(&self) -> Result<Option<NutritionalGoals>>;

    /// Replace the whole goals record
    fn save(&self, goals: &NutritionalGoals) -> Result<()>;
}
