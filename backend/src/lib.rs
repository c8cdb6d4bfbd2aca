//! # Calorie Tracker Backend
//!
//! Contains all non-UI logic for the calorie tracker application.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: Business logic for food logging, meal planning, profiles
//!   and nutritional goal recommendations
//! - **Storage**: Data persistence over an injected key-value store
//!
//! The backend is UI-agnostic: any frontend (web view, desktop shell, CLI)
//! can sit on top of it without modification. All operations are
//! synchronous request/response; an operation completes before its caller
//! proceeds, and no background work exists anywhere in the crate.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (out of scope)
//!     ↓
//! Domain Layer (services, goal calculator, food catalog)
//!     ↓
//! Storage Layer (repositories over a key-value store)
//! ```

pub mod domain;
pub mod storage;

pub use domain::*;
pub use storage::*;

use std::sync::Arc;

use crate::domain::{DashboardService, FoodLogService, MealPlanService, ProfileService};
use crate::storage::{KeyValueStore, KvConnection};
use log::info;

/// Main application state that holds all services.
#[derive(Clone)]
pub struct AppState {
    pub food_log_service: FoodLogService,
    pub meal_plan_service: MealPlanService,
    pub profile_service: ProfileService,
    pub dashboard_service: DashboardService,
}

/// Build the full service stack over one injected key-value store.
///
/// The store is the only configuration point: pass a
/// [`storage::FileKeyValueStore`] for durable data or a
/// [`storage::MemoryKeyValueStore`] for tests and storage-less hosts.
pub fn initialize_backend(store: Arc<dyn KeyValueStore>) -> AppState {
    let connection = KvConnection::new(store);

    let state = AppState {
        food_log_service: FoodLogService::new(connection.clone()),
        meal_plan_service: MealPlanService::new(connection.clone()),
        profile_service: ProfileService::new(connection.clone()),
        dashboard_service: DashboardService::new(connection),
    };

    info!("Backend services initialized");
    state
}
