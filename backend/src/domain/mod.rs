//! # Domain Module
//!
//! Contains all business logic for the calorie tracker application.
//!
//! This module encapsulates the core business rules and services that
//! define how foods are logged, meals are planned, and nutritional goals
//! are derived. It operates independently of any specific UI framework and
//! reaches storage only through the repository abstractions.
//!
//! ## Module Organization
//!
//! - **food_log_service**: Logging consumed foods and day-based queries
//! - **meal_plan_service**: Planned meals with save-time nutrition snapshots
//! - **profile_service**: Profile/goals singletons and the unit toggle
//! - **dashboard_service**: Today's consumed-vs-goal summary
//! - **nutrition_calculator**: Pure profile → recommended-targets formula
//! - **food_catalog**: Static searchable food list for the UI pages
//!
//! ## Business Rules
//!
//! - Logged foods are stamped with their creation day and never re-dated
//! - A planned meal's totals are aggregated once, at save time
//! - Profile and goals are whole-record singletons
//! - A profile that lacks a parseable age, height or weight produces no
//!   recommendation rather than an error

pub mod commands;
pub mod dashboard_service;
pub mod food_catalog;
pub mod food_log_service;
pub mod meal_plan_service;
pub mod nutrition_calculator;
pub mod profile_service;

pub use dashboard_service::*;
pub use food_catalog::*;
pub use food_log_service::*;
pub use meal_plan_service::*;
pub use nutrition_calculator::*;
pub use profile_service::*;
