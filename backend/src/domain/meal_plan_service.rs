//! Meal plan service domain logic for the calorie tracker.
//!
//! Creating a plan aggregates the nutrition snapshot from the selected food
//! portions once, at save time; stored plans are never re-totaled when the
//! catalog changes.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use shared::{NewPlannedMeal, PlannedMeal};

use crate::domain::commands::meal_plan::CreatePlannedMealCommand;
use crate::domain::commands::NutritionTotals;
use crate::storage::kv::MealPlanRepository;
use crate::storage::traits::MealPlanStorage;
use crate::storage::KvConnection;

/// Service for creating and querying planned meals.
#[derive(Clone)]
pub struct MealPlanService {
    repository: MealPlanRepository,
}

impl MealPlanService {
    pub fn new(connection: KvConnection) -> Self {
        Self {
            repository: MealPlanRepository::new(connection),
        }
    }

    /// Create one planned meal from the selected portions.
    ///
    /// The plan's nutrition fields are the sums over its foods
    /// (`value × quantity`) captured here and stored as-is.
    pub fn create_meal_plan(&self, command: CreatePlannedMealCommand) -> Result<Vec<PlannedMeal>> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(anyhow::anyhow!("Meal plan name cannot be empty"));
        }
        if command.foods.is_empty() {
            return Err(anyhow::anyhow!("A meal plan needs at least one food"));
        }

        let mut totals = NutritionTotals::default();
        for food in &command.foods {
            totals.accumulate(food.calories, food.protein, food.carbs, food.fat, food.quantity);
        }

        info!(
            "Creating meal plan '{}' ({} foods, {:.0} kcal) for {}",
            name,
            command.foods.len(),
            totals.calories,
            command.planned_date
        );

        self.repository.add(NewPlannedMeal {
            name: name.to_string(),
            calories: totals.calories,
            protein: totals.protein,
            carbs: totals.carbs,
            fat: totals.fat,
            quantity: 1,
            meal_type: command.meal_type,
            planned_date: command.planned_date,
            foods: command.foods,
        })
    }

    pub fn list_all(&self) -> Result<Vec<PlannedMeal>> {
        self.repository.list_all()
    }

    pub fn list_for_date(&self, date: NaiveDate) -> Result<Vec<PlannedMeal>> {
        self.repository.list_for_date(date)
    }

    /// Total planned nutrition for one day, summed across every plan's
    /// foods with quantities applied.
    pub fn planned_totals_for_date(&self, date: NaiveDate) -> Result<NutritionTotals> {
        let mut totals = NutritionTotals::default();
        for plan in self.repository.list_for_date(date)? {
            for food in &plan.foods {
                totals.accumulate(food.calories, food.protein, food.carbs, food.fat, food.quantity);
            }
        }
        Ok(totals)
    }

    /// Delete one planned meal; a no-op if the id is unknown.
    pub fn delete_meal_plan(&self, id: &str) -> Result<Vec<PlannedMeal>> {
        self.repository.delete_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;
    use shared::{MealType, PlannedFood};
    use std::sync::Arc;

    fn setup_service() -> MealPlanService {
        MealPlanService::new(KvConnection::new(Arc::new(MemoryKeyValueStore::new())))
    }

    fn portion(id: &str, calories: f64, quantity: u32) -> PlannedFood {
        PlannedFood {
            id: id.to_string(),
            name: id.to_string(),
            calories,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
            quantity,
        }
    }

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_create_aggregates_snapshot_totals() {
        let service = setup_service();

        let plans = service
            .create_meal_plan(CreatePlannedMealCommand {
                name: "Post-workout dinner".to_string(),
                meal_type: MealType::Dinner,
                planned_date: friday(),
                foods: vec![portion("chicken-breast", 165.0, 2), portion("white-rice", 205.0, 1)],
            })
            .unwrap();

        assert_eq!(plans.len(), 1);
        let plan = &plans[0];
        assert_eq!(plan.calories, 165.0 * 2.0 + 205.0);
        assert_eq!(plan.protein, 30.0);
        assert_eq!(plan.quantity, 1);
        assert_eq!(plan.foods.len(), 2);
    }

    #[test]
    fn test_create_rejects_blank_name_and_empty_foods() {
        let service = setup_service();

        let unnamed = service.create_meal_plan(CreatePlannedMealCommand {
            name: "  ".to_string(),
            meal_type: MealType::Lunch,
            planned_date: friday(),
            foods: vec![portion("apple", 95.0, 1)],
        });
        assert!(unnamed.is_err());

        let foodless = service.create_meal_plan(CreatePlannedMealCommand {
            name: "Light lunch".to_string(),
            meal_type: MealType::Lunch,
            planned_date: friday(),
            foods: vec![],
        });
        assert!(foodless.is_err());

        assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_planned_totals_span_every_plan_on_the_day() {
        let service = setup_service();
        let saturday = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();

        service
            .create_meal_plan(CreatePlannedMealCommand {
                name: "Breakfast".to_string(),
                meal_type: MealType::Breakfast,
                planned_date: friday(),
                foods: vec![portion("oatmeal", 154.0, 1)],
            })
            .unwrap();
        service
            .create_meal_plan(CreatePlannedMealCommand {
                name: "Dinner".to_string(),
                meal_type: MealType::Dinner,
                planned_date: friday(),
                foods: vec![portion("salmon", 208.0, 1)],
            })
            .unwrap();
        service
            .create_meal_plan(CreatePlannedMealCommand {
                name: "Other day".to_string(),
                meal_type: MealType::Lunch,
                planned_date: saturday,
                foods: vec![portion("pasta", 221.0, 1)],
            })
            .unwrap();

        let totals = service.planned_totals_for_date(friday()).unwrap();
        assert_eq!(totals.calories, 154.0 + 208.0);

        assert_eq!(service.list_for_date(friday()).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_meal_plan() {
        let service = setup_service();
        let plans = service
            .create_meal_plan(CreatePlannedMealCommand {
                name: "Dinner".to_string(),
                meal_type: MealType::Dinner,
                planned_date: friday(),
                foods: vec![portion("tofu", 76.0, 1)],
            })
            .unwrap();

        let remaining = service.delete_meal_plan(&plans[0].id).unwrap();
        assert!(remaining.is_empty());

        // Unknown ids are a quiet no-op.
        assert!(service.delete_meal_plan("plan::0::missing").unwrap().is_empty());
    }
}
