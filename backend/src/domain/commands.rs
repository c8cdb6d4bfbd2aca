//! Domain-level command and query types.
//!
//! These structs are used by services inside the domain layer; a UI shell
//! maps its own form state onto them.

/// Aggregated nutrition over a set of foods, each counted
/// `value × quantity`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    pub fn accumulate(&mut self, calories: f64, protein: f64, carbs: f64, fat: f64, quantity: u32) {
        let quantity = quantity as f64;
        self.calories += calories * quantity;
        self.protein += protein * quantity;
        self.carbs += carbs * quantity;
        self.fat += fat * quantity;
    }
}

pub mod food_log {
    use chrono::NaiveDate;
    use shared::{MealType, NewLoggedFood};

    /// Input for logging a batch of consumed foods.
    #[derive(Debug, Clone)]
    pub struct LogFoodsCommand {
        pub foods: Vec<NewLoggedFood>,
    }

    /// Query parameters for listing logged foods.
    #[derive(Debug, Clone, Default)]
    pub struct FoodLogQuery {
        /// Calendar day to filter on; today when omitted
        pub date: Option<NaiveDate>,
        /// Restrict to one meal type; all meals when omitted
        pub meal_type: Option<MealType>,
    }
}

pub mod meal_plan {
    use chrono::NaiveDate;
    use shared::{MealType, PlannedFood};

    /// Input for creating a planned meal from selected food portions.
    /// The service aggregates the nutrition snapshot from `foods`.
    #[derive(Debug, Clone)]
    pub struct CreatePlannedMealCommand {
        pub name: String,
        pub meal_type: MealType,
        pub planned_date: NaiveDate,
        pub foods: Vec<PlannedFood>,
    }
}

pub mod dashboard {
    use shared::MealType;

    /// Today's consumption measured against the daily calorie goal.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DailySummary {
        pub calories_consumed: i32,
        pub daily_goal: i32,
        /// Never negative; overshooting the goal reads as zero remaining
        pub calories_remaining: i32,
        pub protein: i32,
        pub carbs: i32,
        pub fat: i32,
        pub recent_meals: Vec<RecentMeal>,
    }

    /// One row of the recent-meals panel.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecentMeal {
        pub id: String,
        pub name: String,
        /// Total for the row, already multiplied by quantity and rounded
        pub calories: i32,
        /// Clock time of the log entry, e.g. "7:30 AM"
        pub time: String,
        pub meal_type: MealType,
    }
}
