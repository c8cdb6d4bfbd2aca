use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Centimeters per inch, used when normalizing imperial heights.
pub const CM_PER_INCH: f64 = 2.54;
/// Kilograms per pound, used when normalizing imperial weights.
pub const KG_PER_LB: f64 = 0.453592;

/// A food the user has eaten, logged against a meal type.
///
/// Id format: "food::<epoch_millis>::<random suffix>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedFood {
    pub id: String,
    pub name: String,
    /// Nutrition values are per single serving; totals multiply by `quantity`
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Positive serving multiplier
    pub quantity: u32,
    pub meal_type: MealType,
    /// Creation instant (RFC 3339)
    pub timestamp: DateTime<Utc>,
    /// Calendar day derived from `timestamp` at creation; never re-dated
    pub date: NaiveDate,
}

impl LoggedFood {
    pub fn generate_id(now_millis: i64) -> String {
        format!("food::{}::{}", now_millis, random_suffix())
    }
}

/// Input for logging a food: everything the user supplies. The persistence
/// layer assigns `id`, `timestamp` and `date` at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoggedFood {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub quantity: u32,
    pub meal_type: MealType,
}

/// A meal planned for a future date, assembled from catalog foods.
///
/// The top-level nutrition fields are the sums over `foods` captured at save
/// time. They are a snapshot: later catalog changes never re-total a saved
/// plan.
///
/// Id format: "plan::<epoch_millis>::<random suffix>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub quantity: u32,
    pub meal_type: MealType,
    pub planned_date: NaiveDate,
    pub foods: Vec<PlannedFood>,
}

impl PlannedMeal {
    pub fn generate_id(now_millis: i64) -> String {
        format!("plan::{}::{}", now_millis, random_suffix())
    }
}

/// Input for saving a planned meal: a fully-totaled plan minus the id,
/// which the persistence layer assigns at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlannedMeal {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub quantity: u32,
    pub meal_type: MealType,
    pub planned_date: NaiveDate,
    pub foods: Vec<PlannedFood>,
}

/// A single food entry inside a planned meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedFood {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub quantity: u32,
}

/// The user's personal profile. Singleton: one record per installation,
/// replaced wholesale on save.
///
/// `age`, `height` and `weight` stay strings because they are form inputs;
/// the goal calculator treats anything that does not parse to a positive
/// number as "insufficient data". Height and weight are stored in whichever
/// unit `measurement_system` declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: String,
    pub gender: Gender,
    pub height: String,
    pub weight: String,
    pub activity_level: ActivityLevel,
    pub goal: GoalKind,
    pub measurement_system: MeasurementSystem,
}

impl UserProfile {
    /// Convert the stored height/weight to `system`, in place, rounding to
    /// whole units. Values that are empty or do not parse are left alone.
    /// Converting to the already-active system is a no-op.
    pub fn convert_to(&mut self, system: MeasurementSystem) {
        if self.measurement_system == system {
            return;
        }

        if let Ok(height) = self.height.trim().parse::<f64>() {
            let converted = match system {
                MeasurementSystem::Metric => height * CM_PER_INCH,
                MeasurementSystem::Imperial => height / CM_PER_INCH,
            };
            self.height = format!("{}", converted.round() as i64);
        }

        if let Ok(weight) = self.weight.trim().parse::<f64>() {
            let converted = match system {
                MeasurementSystem::Metric => weight * KG_PER_LB,
                MeasurementSystem::Imperial => weight / KG_PER_LB,
            };
            self.weight = format!("{}", converted.round() as i64);
        }

        self.measurement_system = system;
    }
}

/// Daily nutrition targets. Singleton: one record per installation,
/// replaced wholesale on save.
///
/// Values are metric-derived regardless of the profile's measurement
/// system: kcal for calories, grams for the macros and fiber/sugar,
/// milligrams for sodium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalGoals {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
    pub fiber: i32,
    pub sugar: i32,
    pub sodium: i32,
}

impl Default for NutritionalGoals {
    fn default() -> Self {
        Self {
            calories: 2000,
            protein: 150,
            carbs: 250,
            fat: 70,
            fiber: 25,
            sugar: 50,
            sodium: 2300,
        }
    }
}

/// Which meal of the day a food belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn from_string(value: &str) -> Result<Self, MealTypeParseError> {
        match value {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(MealTypeParseError {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "breakfast"),
            MealType::Lunch => write!(f, "lunch"),
            MealType::Dinner => write!(f, "dinner"),
            MealType::Snack => write!(f, "snack"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown meal type: {value}")]
pub struct MealTypeParseError {
    pub value: String,
}

/// Gender as the metabolic-rate formula models it. Only the male/non-male
/// branch matters; unknown stored values fall back to the non-male branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[serde(other)]
    Female,
}

/// Self-reported activity level. Unknown stored values fall back to
/// `Moderate`, which is also the calculator's default multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Active,
    VeryActive,
    #[serde(other)]
    Moderate,
}

/// What the user wants their weight to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Lose,
    Gain,
    #[serde(other)]
    Maintain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    Metric,
    Imperial,
}

fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_carry_prefix_and_differ() {
        let a = LoggedFood::generate_id(1_700_000_000_000);
        let b = LoggedFood::generate_id(1_700_000_000_000);
        assert!(a.starts_with("food::1700000000000::"));
        assert!(b.starts_with("food::1700000000000::"));
        assert_ne!(a, b);

        let p = PlannedMeal::generate_id(1_700_000_000_000);
        assert!(p.starts_with("plan::"));
    }

    #[test]
    fn test_meal_type_string_round_trip() {
        for meal_type in MealType::ALL {
            assert_eq!(
                MealType::from_string(&meal_type.to_string()).unwrap(),
                meal_type
            );
        }
        assert!(MealType::from_string("brunch").is_err());
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let gender: Gender = serde_json::from_str("\"nonbinary\"").unwrap();
        assert_eq!(gender, Gender::Female);

        let level: ActivityLevel = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(level, ActivityLevel::Moderate);

        let goal: GoalKind = serde_json::from_str("\"bulk\"").unwrap();
        assert_eq!(goal, GoalKind::Maintain);
    }

    #[test]
    fn test_profile_serializes_with_camel_case_keys() {
        let profile = UserProfile {
            age: "30".to_string(),
            gender: Gender::Male,
            height: "180".to_string(),
            weight: "80".to_string(),
            activity_level: ActivityLevel::Moderate,
            goal: GoalKind::Maintain,
            measurement_system: MeasurementSystem::Metric,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"activityLevel\":\"moderate\""));
        assert!(json.contains("\"measurementSystem\":\"metric\""));
    }

    #[test]
    fn test_convert_to_imperial_and_back() {
        let mut profile = UserProfile {
            age: "30".to_string(),
            gender: Gender::Male,
            height: "180".to_string(),
            weight: "80".to_string(),
            activity_level: ActivityLevel::Moderate,
            goal: GoalKind::Maintain,
            measurement_system: MeasurementSystem::Metric,
        };

        profile.convert_to(MeasurementSystem::Imperial);
        assert_eq!(profile.height, "71"); // 180 / 2.54 = 70.87
        assert_eq!(profile.weight, "176"); // 80 / 0.453592 = 176.37
        assert_eq!(profile.measurement_system, MeasurementSystem::Imperial);

        profile.convert_to(MeasurementSystem::Metric);
        assert_eq!(profile.height, "180"); // 71 * 2.54 = 180.34
        assert_eq!(profile.weight, "80"); // 176 * 0.453592 = 79.83
    }

    #[test]
    fn test_convert_to_same_system_is_noop() {
        let mut profile = UserProfile {
            age: "30".to_string(),
            gender: Gender::Female,
            height: "165".to_string(),
            weight: "60".to_string(),
            activity_level: ActivityLevel::Light,
            goal: GoalKind::Lose,
            measurement_system: MeasurementSystem::Metric,
        };
        profile.convert_to(MeasurementSystem::Metric);
        assert_eq!(profile.height, "165");
        assert_eq!(profile.weight, "60");
    }

    #[test]
    fn test_convert_skips_blank_fields() {
        let mut profile = UserProfile {
            age: String::new(),
            gender: Gender::Female,
            height: String::new(),
            weight: "140".to_string(),
            activity_level: ActivityLevel::Moderate,
            goal: GoalKind::Maintain,
            measurement_system: MeasurementSystem::Imperial,
        };
        profile.convert_to(MeasurementSystem::Metric);
        assert_eq!(profile.height, "");
        assert_eq!(profile.weight, "64"); // 140 lb -> 63.5 kg
    }
}
