use std::{collections::BTreeSet, fmt, slice::Iter};

use derive_more::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub muscle_groups: BTreeSet<MuscleGroup>,
    pub movement_pattern: MovementPattern,
    pub equipment: Option<String>,
    pub instructions: Option<String>,
}

impl Exercise {
    #[must_use]
    pub fn targets(&self, muscle_group: MuscleGroup) -> bool {
        self.muscle_groups.contains(&muscle_group)
    }

    /// Exercises without equipment, or marked as doable with bodyweight.
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        match &self.equipment {
            None => true,
            Some(equipment) => {
                equipment == "none" || equipment.to_lowercase().contains("bodyweight")
            }
        }
    }

    #[must_use]
    pub fn uses_equipment(&self, tag: &str) -> bool {
        self.equipment
            .as_ref()
            .is_some_and(|e| e.to_lowercase().contains(&tag.to_lowercase()))
    }
}

/// Stable catalog key of an exercise, e.g. `bench_press`.
#[derive(Deref, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ExerciseID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Abs,
    Legs,
    Glutes,
    Cardio,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 9] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Abs,
            MuscleGroup::Legs,
            MuscleGroup::Glutes,
            MuscleGroup::Cardio,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Cardio => "Cardio",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum MovementPattern {
    Push,
    Pull,
    #[strum(serialize = "hip hinge")]
    HipHinge,
    Squat,
    Lunge,
    Isolation,
    Isometric,
    Rotation,
    Cardio,
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static PATTERNS: [MovementPattern; 9] = [
            MovementPattern::Push,
            MovementPattern::Pull,
            MovementPattern::HipHinge,
            MovementPattern::Squat,
            MovementPattern::Lunge,
            MovementPattern::Isolation,
            MovementPattern::Isometric,
            MovementPattern::Rotation,
            MovementPattern::Cardio,
        ];
        PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::Push => "Push",
            MovementPattern::Pull => "Pull",
            MovementPattern::HipHinge => "Hip Hinge",
            MovementPattern::Squat => "Squat",
            MovementPattern::Lunge => "Lunge",
            MovementPattern::Isolation => "Isolation",
            MovementPattern::Isometric => "Isometric",
            MovementPattern::Rotation => "Rotation",
            MovementPattern::Cardio => "Cardio",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
