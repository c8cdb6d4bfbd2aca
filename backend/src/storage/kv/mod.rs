//! # Key-Value Storage Backend
//!
//! Repositories that persist each entity collection as a single JSON value
//! in its own slot of an injected key-value store, plus the two store
//! implementations the application ships with.
//!
//! ## Slot Layout
//!
//! ```text
//! logged-foods        array of LoggedFood
//! meal-plans          array of PlannedMeal
//! user-profile        single UserProfile object, absent until first save
//! nutritional-goals   single NutritionalGoals object, absent until first save
//! ```
//!
//! Every write serializes and replaces the whole slot; there is no
//! incremental persistence and no transaction log.

pub mod connection;
pub mod file_store;
pub mod food_log_repository;
pub mod goals_repository;
pub mod meal_plan_repository;
pub mod memory_store;
pub mod profile_repository;

pub use connection::KvConnection;
pub use file_store::FileKeyValueStore;
pub use food_log_repository::FoodLogRepository;
pub use goals_repository::GoalsRepository;
pub use meal_plan_repository::MealPlanRepository;
pub use memory_store::MemoryKeyValueStore;
pub use profile_repository::ProfileRepository;
