//! Profile and goals service for the calorie tracker.
//!
//! Owns the two singleton records: the user profile and the nutritional
//! goals. Saving either replaces the whole record. The measurement-system
//! switch is a read-merge-write over the stored profile so the stored
//! height/weight always agree with the declared unit system, and the
//! recommended-goals flow wires the stored profile into the pure
//! calculator.

use anyhow::Result;
use log::info;
use shared::{MeasurementSystem, NutritionalGoals, UserProfile};

use crate::domain::nutrition_calculator::calculate_recommended_goals;
use crate::storage::kv::{GoalsRepository, ProfileRepository};
use crate::storage::traits::{GoalsStorage, ProfileStorage};
use crate::storage::KvConnection;

/// Service for the profile and goals singletons.
#[derive(Clone)]
pub struct ProfileService {
    profile_repository: ProfileRepository,
    goals_repository: GoalsRepository,
}

impl ProfileService {
    pub fn new(connection: KvConnection) -> Self {
        Self {
            profile_repository: ProfileRepository::new(connection.clone()),
            goals_repository: GoalsRepository::new(connection),
        }
    }

    /// The saved profile, or `None` before the first save.
    pub fn get_profile(&self) -> Result<Option<UserProfile>> {
        self.profile_repository.get()
    }

    /// Replace the stored profile.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.profile_repository.save(profile)
    }

    /// Switch the stored profile to `system`, converting its height and
    /// weight in place. Returns the updated profile, or `None` when no
    /// profile has been saved yet (nothing to convert).
    pub fn switch_measurement_system(
        &self,
        system: MeasurementSystem,
    ) -> Result<Option<UserProfile>> {
        let mut profile = match self.profile_repository.get()? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        if profile.measurement_system == system {
            return Ok(Some(profile));
        }

        profile.convert_to(system);
        self.profile_repository.save(&profile)?;
        info!("Converted stored profile to {:?} units", system);
        Ok(Some(profile))
    }

    /// The saved goals, or `None` before the first save.
    pub fn get_goals(&self) -> Result<Option<NutritionalGoals>> {
        self.goals_repository.get()
    }

    /// Replace the stored goals.
    pub fn save_goals(&self, goals: &NutritionalGoals) -> Result<()> {
        self.goals_repository.save(goals)
    }

    /// Run the goal calculator over the saved profile. `None` when no
    /// profile is saved or its numeric fields are insufficient.
    pub fn recommended_goals(&self) -> Result<Option<NutritionalGoals>> {
        let profile = match self.profile_repository.get()? {
            Some(profile) => profile,
            None => return Ok(None),
        };
        Ok(calculate_recommended_goals(&profile))
    }

    /// Compute the recommendation and save it as the active goals in one
    /// step (the "use recommended" action). Saves nothing when there is no
    /// recommendation to adopt.
    pub fn adopt_recommended_goals(&self) -> Result<Option<NutritionalGoals>> {
        let goals = match self.recommended_goals()? {
            Some(goals) => goals,
            None => return Ok(None),
        };

        self.goals_repository.save(&goals)?;
        info!("Adopted recommended goals ({} kcal)", goals.calories);
        Ok(Some(goals))
    }
}
