//! Recommended-goal calculation for the calorie tracker.
//!
//! Maps a user profile to recommended daily nutrition targets using the
//! Mifflin-St Jeor equation. Pure and deterministic: no I/O, no clock, the
//! same profile always produces the same targets.
//!
//! A profile whose age, height or weight is missing or does not parse to a
//! positive number produces `None` ("no recommendation available") rather
//! than an error; callers treat absence as insufficient data.

use shared::{
    ActivityLevel, Gender, GoalKind, MeasurementSystem, NutritionalGoals, UserProfile,
    CM_PER_INCH, KG_PER_LB,
};

/// Calorie adjustment for a lose/gain goal: one pound per week.
const GOAL_CALORIE_DELTA: f64 = 500.0;

/// Compute recommended daily targets from the profile.
///
/// Output is always metric-derived (kcal, grams, milligrams) regardless of
/// the profile's measurement system.
pub fn calculate_recommended_goals(profile: &UserProfile) -> Option<NutritionalGoals> {
    let age = parse_positive(&profile.age)?;
    let height = parse_positive(&profile.height)?;
    let weight = parse_positive(&profile.weight)?;

    let (height_cm, weight_kg) = match profile.measurement_system {
        MeasurementSystem::Metric => (height, weight),
        MeasurementSystem::Imperial => (height * CM_PER_INCH, weight * KG_PER_LB),
    };

    // Mifflin-St Jeor equation
    let bmr = match profile.gender {
        Gender::Male => 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + 5.0,
        Gender::Female => 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age - 161.0,
    };

    let tdee = bmr * activity_multiplier(profile.activity_level);

    let calories = match profile.goal {
        GoalKind::Lose => tdee - GOAL_CALORIE_DELTA,
        GoalKind::Gain => tdee + GOAL_CALORIE_DELTA,
        GoalKind::Maintain => tdee,
    };

    // 1 g protein per lb of body weight, 25% of calories from fat, the
    // remainder from carbs. The carb remainder is not clamped: a
    // pathological profile can push it negative, and the raw value is kept.
    let protein = (weight_kg * 2.2).round() as i32;
    let fat = (calories * 0.25 / 9.0).round() as i32;
    let carbs = ((calories - (protein * 4 + fat * 9) as f64) / 4.0).round() as i32;

    Some(NutritionalGoals {
        calories: calories.round() as i32,
        protein,
        carbs,
        fat,
        fiber: 25,
        sugar: (calories * 0.10 / 4.0).round() as i32,
        sodium: 2300,
    })
}

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

fn parse_positive(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed > 0.0 && parsed.is_finite() => Some(parsed),
        _ => None,
    }
}
