//! # Meal Plan Repository
//!
//! Persists the planned-meal collection in the `meal-plans` slot as one
//! JSON array. Plan ids carry the `plan::` prefix so they can never be
//! confused with logged-food ids. The nutrition totals on each stored plan
//! are whatever the caller aggregated at save time; this layer never
//! recomputes them.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use shared::{NewPlannedMeal, PlannedMeal};

use super::connection::{KvConnection, MEAL_PLANS_KEY};
use crate::storage::traits::MealPlanStorage;

#[derive(Clone)]
pub struct MealPlanRepository {
    connection: KvConnection,
}

impl MealPlanRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Vec<PlannedMeal> {
        self.connection.read_slot(MEAL_PLANS_KEY).unwrap_or_default()
    }

    fn write_all(&self, plans: &[PlannedMeal]) -> Result<()> {
        self.connection.write_slot(MEAL_PLANS_KEY, &plans)
    }
}

impl MealPlanStorage for MealPlanRepository {
    fn list_all(&self) -> Result<Vec<PlannedMeal>> {
        Ok(self.read_all())
    }

    fn list_for_date(&self, date: NaiveDate) -> Result<Vec<PlannedMeal>> {
        let plans = self
            .read_all()
            .into_iter()
            .filter(|plan| plan.planned_date == date)
            .collect();
        Ok(plans)
    }

    fn add(&self, new_plan: NewPlannedMeal) -> Result<Vec<PlannedMeal>> {
        let mut plans = self.read_all();

        let plan = PlannedMeal {
            id: PlannedMeal::generate_id(Utc::now().timestamp_millis()),
            name: new_plan.name,
            calories: new_plan.calories,
            protein: new_plan.protein,
            carbs: new_plan.carbs,
            fat: new_plan.fat,
            quantity: new_plan.quantity,
            meal_type: new_plan.meal_type,
            planned_date: new_plan.planned_date,
            foods: new_plan.foods,
        };
        info!("Storing meal plan '{}' for {}", plan.name, plan.planned_date);
        plans.push(plan);

        self.write_all(&plans)?;
        Ok(plans)
    }

    fn delete_by_id(&self, id: &str) -> Result<Vec<PlannedMeal>> {
        let mut plans = self.read_all();
        let before = plans.len();
        plans.retain(|plan| plan.id != id);

        if plans.len() == before {
            debug!("Delete of unknown meal plan '{}' is a no-op", id);
        }

        self.write_all(&plans)?;
        Ok(plans)
    }
}
