//! # Storage Module
//!
//! Handles all data persistence operations for the calorie tracker.
//!
//! This module abstracts away the specific storage implementation details
//! and provides a consistent interface for persisting and retrieving data.
//! The backing key-value store can be swapped out (flat files, an embedded
//! browser storage bridge, an in-memory fake) without affecting the domain
//! logic.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: Saving logged foods, meal plans, the user
//!   profile and nutritional goals
//! - **Data Retrieval**: Loading stored collections back into memory
//! - **Storage Abstraction**: One injected `get`/`set` backend behind a
//!   consistent repository API
//! - **Graceful Degradation**: An absent, unreadable or malformed slot
//!   reads as "no data", never as an error
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Dependency Inversion**: Repositories depend on the `KeyValueStore`
//!   abstraction, not on a concrete backend
//! - **Whole-Slot Writes**: Each collection serializes as a single JSON
//!   value; every write replaces the slot atomically
//! - **Testability**: An in-memory store substitutes for the file store in
//!   unit tests

pub mod kv;
pub mod traits;

pub use kv::{
    FileKeyValueStore, FoodLogRepository, GoalsRepository, KvConnection, MealPlanRepository,
    MemoryKeyValueStore, ProfileRepository,
};
pub use traits::{FoodLogStorage, GoalsStorage, KeyValueStore, MealPlanStorage, ProfileStorage};
