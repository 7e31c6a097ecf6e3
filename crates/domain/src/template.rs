use std::collections::BTreeSet;

use chrono::Duration;
use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Exercise, MuscleGroup, Name, ReadError, Reps, Sets, Time, UserID, Weight};

pub trait TemplateRepository {
    fn read_template(&self, id: TemplateID) -> Result<Option<WorkoutTemplate>, ReadError>;
    fn read_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError>;
    /// Templates of a user in the order they were created.
    fn read_user_templates(&self, user_id: UserID) -> Result<Vec<WorkoutTemplate>, ReadError>;
    fn read_template_owners(&self) -> Result<BTreeSet<UserID>, ReadError>;
    fn create_template(
        &self,
        user_id: UserID,
        template: WorkoutTemplate,
    ) -> Result<WorkoutTemplate, CreateError>;
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateID(Uuid);

impl TemplateID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TemplateID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for TemplateID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl std::fmt::Display for TemplateID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSet {
    pub exercise: Exercise,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Option<Weight>,
    pub rest: Option<Time>,
}

impl ExerciseSet {
    #[must_use]
    pub fn new(exercise: Exercise, sets: Sets, reps: Reps) -> Self {
        Self {
            exercise,
            sets,
            reps,
            weight: None,
            rest: None,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub fn with_rest(mut self, rest: Time) -> Self {
        self.rest = Some(rest);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Manual,
    Generated { prompt: String },
}

/// A named, ordered list of exercise prescriptions.
///
/// Templates are never changed after creation. Customizing a template creates
/// a new one with its own ID.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutTemplate {
    pub id: TemplateID,
    pub name: Name,
    pub exercises: Vec<ExerciseSet>,
    pub estimated_duration: Duration,
    pub origin: Origin,
}

impl WorkoutTemplate {
    /// Create a manual template whose duration is estimated from its number of sets.
    ///
    /// The estimate saturates at `u32::MAX` minutes.
    #[must_use]
    pub fn new(name: Name, exercises: Vec<ExerciseSet>, minutes_per_set: u32) -> Self {
        let num_sets = exercises
            .iter()
            .fold(0_u32, |sum, e| sum.saturating_add(u32::from(e.sets)));
        let minutes = num_sets.saturating_mul(minutes_per_set);
        Self {
            id: TemplateID::new(),
            name,
            exercises,
            estimated_duration: Duration::minutes(i64::from(minutes)),
            origin: Origin::Manual,
        }
    }

    #[must_use]
    pub fn generated(
        name: Name,
        exercises: Vec<ExerciseSet>,
        estimated_duration: Duration,
        prompt: String,
    ) -> Self {
        Self {
            id: TemplateID::new(),
            name,
            exercises,
            estimated_duration,
            origin: Origin::Generated { prompt },
        }
    }

    /// Union of the muscle groups of all exercises.
    #[must_use]
    pub fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.exercises
            .iter()
            .flat_map(|e| e.exercise.muscle_groups.iter().copied())
            .collect()
    }

    #[must_use]
    pub fn num_exercises(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| u32::from(e.sets)).sum()
    }

    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(self.origin, Origin::Generated { .. })
    }

    #[must_use]
    pub fn generation_prompt(&self) -> Option<&str> {
        match &self.origin {
            Origin::Manual => None,
            Origin::Generated { prompt } => Some(prompt),
        }
    }
}
