//! Dashboard summary service for the calorie tracker.
//!
//! Builds the landing-page view of today: calories and macros consumed so
//! far, the daily calorie goal, how much of it is left, and the most
//! recent log entries. Falls back to a 2000 kcal goal until the user saves
//! one.

use anyhow::Result;
use chrono::Local;

use crate::domain::commands::dashboard::{DailySummary, RecentMeal};
use crate::domain::commands::NutritionTotals;
use crate::storage::kv::{FoodLogRepository, GoalsRepository};
use crate::storage::traits::{FoodLogStorage, GoalsStorage};
use crate::storage::KvConnection;

/// Daily calorie goal assumed before any goals are saved.
const FALLBACK_DAILY_GOAL: i32 = 2000;

/// How many log entries the recent-meals panel shows.
const RECENT_MEALS_LIMIT: usize = 5;

/// Service for the dashboard's daily summary.
#[derive(Clone)]
pub struct DashboardService {
    food_log_repository: FoodLogRepository,
    goals_repository: GoalsRepository,
}

impl DashboardService {
    pub fn new(connection: KvConnection) -> Self {
        Self {
            food_log_repository: FoodLogRepository::new(connection.clone()),
            goals_repository: GoalsRepository::new(connection),
        }
    }

    /// Today's consumption measured against the saved calorie goal.
    pub fn daily_summary(&self) -> Result<DailySummary> {
        let todays_foods = self.food_log_repository.list_for_today()?;

        let daily_goal = self
            .goals_repository
            .get()?
            .map(|goals| goals.calories)
            .unwrap_or(FALLBACK_DAILY_GOAL);

        let mut totals = NutritionTotals::default();
        for food in &todays_foods {
            totals.accumulate(food.calories, food.protein, food.carbs, food.fat, food.quantity);
        }

        let calories_consumed = totals.calories.round() as i32;

        let recent_meals = todays_foods
            .iter()
            .take(RECENT_MEALS_LIMIT)
            .map(|food| RecentMeal {
                id: food.id.clone(),
                name: food.name.clone(),
                calories: (food.calories * food.quantity as f64).round() as i32,
                time: food
                    .timestamp
                    .with_timezone(&Local)
                    .format("%-I:%M %p")
                    .to_string(),
                meal_type: food.meal_type,
            })
            .collect();

        Ok(DailySummary {
            calories_consumed,
            daily_goal,
            calories_remaining: (daily_goal - calories_consumed).max(0),
            protein: totals.protein.round() as i32,
            carbs: totals.carbs.round() as i32,
            fat: totals.fat.round() as i32,
            recent_meals,
        })
    }
}
