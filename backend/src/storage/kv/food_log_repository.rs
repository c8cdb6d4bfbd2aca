//! # Food Log Repository
//!
//! Persists the logged-food collection in the `logged-foods` slot as one
//! JSON array. Every operation reads the whole collection, mutates it in
//! memory, and writes the whole collection back; appends assign the id,
//! creation timestamp and calendar day so stored records are never
//! re-dated.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use shared::{LoggedFood, NewLoggedFood};

use super::connection::{KvConnection, LOGGED_FOODS_KEY};
use crate::storage::traits::FoodLogStorage;

#[derive(Clone)]
pub struct FoodLogRepository {
    connection: KvConnection,
}

impl FoodLogRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Vec<LoggedFood> {
        self.connection
            .read_slot(LOGGED_FOODS_KEY)
            .unwrap_or_default()
    }

    fn write_all(&self, foods: &[LoggedFood]) -> Result<()> {
        self.connection.write_slot(LOGGED_FOODS_KEY, &foods)
    }
}

impl FoodLogStorage for FoodLogRepository {
    fn list_all(&self) -> Result<Vec<LoggedFood>> {
        Ok(self.read_all())
    }

    fn list_for_date(&self, date: NaiveDate) -> Result<Vec<LoggedFood>> {
        let foods = self
            .read_all()
            .into_iter()
            .filter(|food| food.date == date)
            .collect();
        Ok(foods)
    }

    fn list_for_today(&self) -> Result<Vec<LoggedFood>> {
        self.list_for_date(Utc::now().date_naive())
    }

    fn add_many(&self, new_foods: Vec<NewLoggedFood>) -> Result<Vec<LoggedFood>> {
        let mut foods = self.read_all();

        let now = Utc::now();
        let today = now.date_naive();
        let now_millis = now.timestamp_millis();

        let added = new_foods.len();
        for new_food in new_foods {
            foods.push(LoggedFood {
                id: LoggedFood::generate_id(now_millis),
                name: new_food.name,
                calories: new_food.calories,
                protein: new_food.protein,
                carbs: new_food.carbs,
                fat: new_food.fat,
                quantity: new_food.quantity,
                meal_type: new_food.meal_type,
                timestamp: now,
                date: today,
            });
        }

        self.write_all(&foods)?;
        info!("Logged {} food(s), collection now holds {}", added, foods.len());
        Ok(foods)
    }

    fn delete_by_id(&self, id: &str) -> Result<Vec<LoggedFood>> {
        let mut foods = self.read_all();
        let before = foods.len();
        foods.retain(|food| food.id != id);

        if foods.len() == before {
            debug!("Delete of unknown logged food '{}' is a no-op", id);
        }

        self.write_all(&foods)?;
        Ok(foods)
    }
}
