use derive_more::Deref;
use uuid::Uuid;

use crate::{MuscleGroup, ReadError, UpdateError};

pub trait PreferencesRepository {
    fn read_preferences(&self, user_id: UserID) -> Result<Option<UserPreferences>, ReadError>;
    fn replace_preferences(
        &self,
        preferences: UserPreferences,
    ) -> Result<UserPreferences, UpdateError>;
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl std::fmt::Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Constraints a user gives when asking for a generated workout.
///
/// Only the most recent preferences of a user are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    pub user_id: UserID,
    pub experience_level: ExperienceLevel,
    pub goals: String,
    pub available_equipment: Vec<String>,
    pub session_minutes: u32,
    pub preferred_muscle_groups: Vec<MuscleGroup>,
    pub excluded_exercises: Vec<String>,
}

impl UserPreferences {
    #[must_use]
    pub fn excludes(&self, exercise_name: &str) -> bool {
        self.excluded_exercises
            .iter()
            .any(|e| e.eq_ignore_ascii_case(exercise_name.trim()))
    }
}
