//! Food log service domain logic for the calorie tracker.
//!
//! The core business logic for logging consumed foods: batch creation,
//! day-based and meal-type queries for the log pages, per-day nutrition
//! totals, and deletion.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use log::info;
use shared::LoggedFood;

use crate::domain::commands::food_log::{FoodLogQuery, LogFoodsCommand};
use crate::domain::commands::NutritionTotals;
use crate::storage::kv::FoodLogRepository;
use crate::storage::traits::FoodLogStorage;
use crate::storage::KvConnection;

/// Service for logging and querying consumed foods.
#[derive(Clone)]
pub struct FoodLogService {
    repository: FoodLogRepository,
}

impl FoodLogService {
    pub fn new(connection: KvConnection) -> Self {
        Self {
            repository: FoodLogRepository::new(connection),
        }
    }

    /// Log a batch of foods in one collection rewrite. Returns the full
    /// updated collection. An empty batch is valid and changes nothing.
    pub fn log_foods(&self, command: LogFoodsCommand) -> Result<Vec<LoggedFood>> {
        for food in &command.foods {
            if food.name.trim().is_empty() {
                return Err(anyhow::anyhow!("Food name cannot be empty"));
            }
            if food.quantity == 0 {
                return Err(anyhow::anyhow!(
                    "Quantity for '{}' must be at least 1",
                    food.name
                ));
            }
        }

        info!("Logging {} food(s)", command.foods.len());
        self.repository.add_many(command.foods)
    }

    pub fn list_all(&self) -> Result<Vec<LoggedFood>> {
        self.repository.list_all()
    }

    pub fn list_for_today(&self) -> Result<Vec<LoggedFood>> {
        self.repository.list_for_today()
    }

    pub fn list_for_date(&self, date: NaiveDate) -> Result<Vec<LoggedFood>> {
        self.repository.list_for_date(date)
    }

    /// The food-log page view: one day's entries, optionally narrowed to a
    /// meal type, most recent first.
    pub fn query(&self, query: FoodLogQuery) -> Result<Vec<LoggedFood>> {
        let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
        let mut foods = self.repository.list_for_date(date)?;

        if let Some(meal_type) = query.meal_type {
            foods.retain(|food| food.meal_type == meal_type);
        }

        foods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(foods)
    }

    /// Nutrition consumed on a given day, quantities applied.
    pub fn day_totals(&self, date: NaiveDate) -> Result<NutritionTotals> {
        let mut totals = NutritionTotals::default();
        for food in self.repository.list_for_date(date)? {
            totals.accumulate(food.calories, food.protein, food.carbs, food.fat, food.quantity);
        }
        Ok(totals)
    }

    /// Delete one logged food; a no-op if the id is unknown.
    pub fn delete_logged_food(&self, id: &str) -> Result<Vec<LoggedFood>> {
        self.repository.delete_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;
    use shared::{MealType, NewLoggedFood};
    use std::sync::Arc;

    fn setup_service() -> FoodLogService {
        FoodLogService::new(KvConnection::new(Arc::new(MemoryKeyValueStore::new())))
    }

    fn new_food(name: &str, calories: f64, quantity: u32, meal_type: MealType) -> NewLoggedFood {
        NewLoggedFood {
            name: name.to_string(),
            calories,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
            quantity,
            meal_type,
        }
    }

    #[test]
    fn test_log_foods_round_trip() {
        let service = setup_service();

        let logged = service
            .log_foods(LogFoodsCommand {
                foods: vec![
                    new_food("Oatmeal", 154.0, 1, MealType::Breakfast),
                    new_food("Banana", 105.0, 1, MealType::Breakfast),
                ],
            })
            .unwrap();

        assert_eq!(logged.len(), 2);
        assert_ne!(logged[0].id, logged[1].id);

        let all = service.list_all().unwrap();
        let names: Vec<_> = all.iter().map(|food| food.name.as_str()).collect();
        assert_eq!(names, vec!["Oatmeal", "Banana"]);
    }

    #[test]
    fn test_log_foods_rejects_blank_name() {
        let service = setup_service();
        let result = service.log_foods(LogFoodsCommand {
            foods: vec![new_food("   ", 100.0, 1, MealType::Snack)],
        });
        assert!(result.is_err());
        assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_log_foods_rejects_zero_quantity() {
        let service = setup_service();
        let result = service.log_foods(LogFoodsCommand {
            foods: vec![new_food("Apple", 95.0, 0, MealType::Snack)],
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_query_filters_by_meal_type_and_sorts_recent_first() {
        let service = setup_service();
        service
            .log_foods(LogFoodsCommand {
                foods: vec![new_food("Eggs", 144.0, 2, MealType::Breakfast)],
            })
            .unwrap();
        service
            .log_foods(LogFoodsCommand {
                foods: vec![new_food("Pasta", 221.0, 1, MealType::Dinner)],
            })
            .unwrap();

        let breakfast = service
            .query(FoodLogQuery {
                date: None,
                meal_type: Some(MealType::Breakfast),
            })
            .unwrap();
        assert_eq!(breakfast.len(), 1);
        assert_eq!(breakfast[0].name, "Eggs");

        let everything = service.query(FoodLogQuery::default()).unwrap();
        assert_eq!(everything.len(), 2);
        assert!(everything[0].timestamp >= everything[1].timestamp);
    }

    #[test]
    fn test_day_totals_apply_quantity() {
        let service = setup_service();
        service
            .log_foods(LogFoodsCommand {
                foods: vec![
                    new_food("Eggs", 72.0, 2, MealType::Breakfast),
                    new_food("Toast", 81.0, 1, MealType::Breakfast),
                ],
            })
            .unwrap();

        let totals = service.day_totals(Utc::now().date_naive()).unwrap();
        assert_eq!(totals.calories, 72.0 * 2.0 + 81.0);
        assert_eq!(totals.protein, 10.0 * 2.0 + 10.0);
    }

    #[test]
    fn test_day_totals_for_empty_day_are_zero() {
        let service = setup_service();
        let totals = service.day_totals(Utc::now().date_naive()).unwrap();
        assert_eq!(totals, NutritionTotals::default());
    }

    #[test]
    fn test_delete_then_delete_again_is_a_no_op() {
        let service = setup_service();
        let logged = service
            .log_foods(LogFoodsCommand {
                foods: vec![new_food("Apple", 95.0, 1, MealType::Snack)],
            })
            .unwrap();
        let id = logged[0].id.clone();

        assert!(service.delete_logged_food(&id).unwrap().is_empty());
        assert!(service.delete_logged_food(&id).unwrap().is_empty());
    }
}
