use std::collections::{BTreeMap, BTreeSet};

use crate::{Exercise, ExerciseID, MovementPattern, MuscleGroup};

/// Read-only set of exercises known to the planner.
///
/// The catalog is loaded once and handed to the planner service, which passes
/// it on to everything that needs to resolve exercises.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    exercises: BTreeMap<ExerciseID, Exercise>,
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: impl IntoIterator<Item = Exercise>) -> Self {
        Self {
            exercises: exercises.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN.iter().map(Exercise::from))
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.exercises.get(id)
    }

    /// Find an exercise by its exact name, ignoring case.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Exercise> {
        let name = name.trim().to_lowercase();
        self.exercises
            .values()
            .find(|e| e.name.to_lowercase() == name)
    }

    pub fn all(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn by_muscle_group(&self, muscle_group: MuscleGroup) -> Vec<&Exercise> {
        self.all().filter(|e| e.targets(muscle_group)).collect()
    }

    #[must_use]
    pub fn by_equipment(&self, tag: &str) -> Vec<&Exercise> {
        self.all().filter(|e| e.uses_equipment(tag)).collect()
    }

    #[must_use]
    pub fn bodyweight(&self) -> Vec<&Exercise> {
        self.all().filter(|e| e.is_bodyweight()).collect()
    }

    /// Exercises whose name or one of whose muscle group tags contains the query.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Exercise> {
        let query = query.trim().to_lowercase();
        self.all()
            .filter(|e| {
                e.name.to_lowercase().contains(&query)
                    || e.muscle_groups
                        .iter()
                        .any(|m| m.to_string().contains(&query))
            })
            .collect()
    }

    /// Exercises that can be done with the given equipment.
    ///
    /// Exercises requiring no equipment are always available.
    #[must_use]
    pub fn available_for(&self, equipment: &[String]) -> Vec<&Exercise> {
        self.all()
            .filter(|e| {
                e.equipment.as_deref() == Some("none")
                    || equipment.iter().any(|tag| e.uses_equipment(tag))
            })
            .collect()
    }
}

struct BaseExercise {
    id: &'static str,
    name: &'static str,
    muscle_groups: &'static [MuscleGroup],
    movement_pattern: MovementPattern,
    equipment: &'static str,
    instructions: &'static str,
}

impl From<&BaseExercise> for Exercise {
    fn from(value: &BaseExercise) -> Self {
        Exercise {
            id: value.id.into(),
            name: value.name.to_string(),
            muscle_groups: value.muscle_groups.iter().copied().collect::<BTreeSet<_>>(),
            movement_pattern: value.movement_pattern,
            equipment: Some(value.equipment.to_string()),
            instructions: Some(value.instructions.to_string()),
        }
    }
}

const BUILTIN: [BaseExercise; 23] = [
    // Chest
    BaseExercise {
        id: "bench_press",
        name: "Bench Press",
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Triceps,
            MuscleGroup::Shoulders,
        ],
        movement_pattern: MovementPattern::Push,
        equipment: "barbell, bench",
        instructions: "Lie on bench, grip barbell slightly wider than shoulders, lower to chest, press up",
    },
    BaseExercise {
        id: "push_ups",
        name: "Push-ups",
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Triceps,
            MuscleGroup::Shoulders,
        ],
        movement_pattern: MovementPattern::Push,
        equipment: "none",
        instructions: "Start in plank position, lower chest to ground, push back up",
    },
    BaseExercise {
        id: "dumbbell_flyes",
        name: "Dumbbell Flyes",
        muscle_groups: &[MuscleGroup::Chest],
        movement_pattern: MovementPattern::Push,
        equipment: "dumbbells, bench",
        instructions: "Lie on bench, arms extended, lower dumbbells in arc motion, bring together",
    },
    BaseExercise {
        id: "incline_bench",
        name: "Incline Bench Press",
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Triceps,
        ],
        movement_pattern: MovementPattern::Push,
        equipment: "barbell, incline bench",
        instructions: "Similar to bench press but on incline bench at 30-45 degrees",
    },
    // Back
    BaseExercise {
        id: "pull_ups",
        name: "Pull-ups",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        movement_pattern: MovementPattern::Pull,
        equipment: "pull-up bar",
        instructions: "Hang from bar, pull body up until chin clears bar, lower slowly",
    },
    BaseExercise {
        id: "deadlift",
        name: "Deadlift",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Glutes, MuscleGroup::Legs],
        movement_pattern: MovementPattern::HipHinge,
        equipment: "barbell",
        instructions: "Stand with feet hip-width apart, grip bar, lift by extending hips and knees",
    },
    BaseExercise {
        id: "bent_over_rows",
        name: "Bent-over Rows",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        movement_pattern: MovementPattern::Pull,
        equipment: "barbell or dumbbells",
        instructions: "Bend at hips, pull weight to lower chest, squeeze shoulder blades",
    },
    BaseExercise {
        id: "lat_pulldowns",
        name: "Lat Pulldowns",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        movement_pattern: MovementPattern::Pull,
        equipment: "cable machine",
        instructions: "Sit at lat pulldown machine, pull bar to upper chest, control return",
    },
    // Shoulders
    BaseExercise {
        id: "overhead_press",
        name: "Overhead Press",
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        movement_pattern: MovementPattern::Push,
        equipment: "barbell or dumbbells",
        instructions: "Press weight overhead from shoulder level, extend fully",
    },
    BaseExercise {
        id: "lateral_raises",
        name: "Lateral Raises",
        muscle_groups: &[MuscleGroup::Shoulders],
        movement_pattern: MovementPattern::Isolation,
        equipment: "dumbbells",
        instructions: "Raise arms to sides until parallel to ground, lower slowly",
    },
    BaseExercise {
        id: "rear_delt_flyes",
        name: "Rear Delt Flyes",
        muscle_groups: &[MuscleGroup::Shoulders],
        movement_pattern: MovementPattern::Isolation,
        equipment: "dumbbells",
        instructions: "Bend forward, raise dumbbells to sides, focus on rear delts",
    },
    // Arms
    BaseExercise {
        id: "bicep_curls",
        name: "Bicep Curls",
        muscle_groups: &[MuscleGroup::Biceps],
        movement_pattern: MovementPattern::Isolation,
        equipment: "dumbbells or barbell",
        instructions: "Curl weight up, squeeze biceps at top, lower slowly",
    },
    BaseExercise {
        id: "tricep_dips",
        name: "Tricep Dips",
        muscle_groups: &[MuscleGroup::Triceps],
        movement_pattern: MovementPattern::Push,
        equipment: "parallel bars or bench",
        instructions: "Lower body by bending arms, push back up using triceps",
    },
    BaseExercise {
        id: "close_grip_bench",
        name: "Close Grip Bench Press",
        muscle_groups: &[MuscleGroup::Triceps, MuscleGroup::Chest],
        movement_pattern: MovementPattern::Push,
        equipment: "barbell, bench",
        instructions: "Bench press with hands closer together, focus on triceps",
    },
    // Legs
    BaseExercise {
        id: "squats",
        name: "Squats",
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        movement_pattern: MovementPattern::Squat,
        equipment: "barbell or bodyweight",
        instructions: "Lower body by bending knees and hips, keep chest up, drive through heels",
    },
    BaseExercise {
        id: "lunges",
        name: "Lunges",
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        movement_pattern: MovementPattern::Lunge,
        equipment: "bodyweight or dumbbells",
        instructions: "Step forward, lower back knee toward ground, push back to start",
    },
    BaseExercise {
        id: "leg_press",
        name: "Leg Press",
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        movement_pattern: MovementPattern::Push,
        equipment: "leg press machine",
        instructions: "Push weight with legs, control descent, extend fully",
    },
    BaseExercise {
        id: "calf_raises",
        name: "Calf Raises",
        muscle_groups: &[MuscleGroup::Legs],
        movement_pattern: MovementPattern::Isolation,
        equipment: "bodyweight or machine",
        instructions: "Raise up on toes, hold briefly, lower slowly",
    },
    // Core
    BaseExercise {
        id: "plank",
        name: "Plank",
        muscle_groups: &[MuscleGroup::Abs],
        movement_pattern: MovementPattern::Isometric,
        equipment: "none",
        instructions: "Hold straight line from head to heels, engage core",
    },
    BaseExercise {
        id: "crunches",
        name: "Crunches",
        muscle_groups: &[MuscleGroup::Abs],
        movement_pattern: MovementPattern::Isolation,
        equipment: "none",
        instructions: "Lift shoulders off ground, crunch abs, lower slowly",
    },
    BaseExercise {
        id: "russian_twists",
        name: "Russian Twists",
        muscle_groups: &[MuscleGroup::Abs],
        movement_pattern: MovementPattern::Rotation,
        equipment: "bodyweight or medicine ball",
        instructions: "Sit, lean back, rotate torso side to side",
    },
    // Cardio
    BaseExercise {
        id: "running",
        name: "Running",
        muscle_groups: &[MuscleGroup::Cardio, MuscleGroup::Legs],
        movement_pattern: MovementPattern::Cardio,
        equipment: "none",
        instructions: "Maintain steady pace, focus on breathing",
    },
    BaseExercise {
        id: "cycling",
        name: "Cycling",
        muscle_groups: &[MuscleGroup::Cardio, MuscleGroup::Legs],
        movement_pattern: MovementPattern::Cardio,
        equipment: "bike",
        instructions: "Maintain steady cadence, focus on smooth pedaling",
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    static CATALOG: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(Catalog::builtin);

    fn names(exercises: &[&Exercise]) -> Vec<String> {
        let mut names = exercises.iter().map(|e| e.name.clone()).collect::<Vec<_>>();
        names.sort();
        names
    }

    #[test]
    fn test_builtin_ids_unique() {
        assert_eq!(CATALOG.len(), BUILTIN.len());
    }

    #[rstest]
    #[case("Bench Press", Some("bench_press"))]
    #[case("bench press", Some("bench_press"))]
    #[case("  PUSH-UPS ", Some("push_ups"))]
    #[case("Bench", None)]
    #[case("Cable Crossover", None)]
    fn test_catalog_lookup(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            CATALOG.lookup(name).map(|e| e.id.clone()),
            expected.map(ExerciseID::from)
        );
    }

    #[test]
    fn test_catalog_get() {
        let squats = CATALOG.get(&"squats".into()).unwrap();
        assert_eq!(squats.name, "Squats");
        assert_eq!(
            squats.muscle_groups,
            BTreeSet::from([MuscleGroup::Legs, MuscleGroup::Glutes])
        );
        assert_eq!(squats.movement_pattern, MovementPattern::Squat);
        assert!(CATALOG.get(&"unknown".into()).is_none());
    }

    #[test]
    fn test_catalog_by_muscle_group() {
        assert_eq!(
            names(&CATALOG.by_muscle_group(MuscleGroup::Abs)),
            vec!["Crunches", "Plank", "Russian Twists"]
        );
        assert_eq!(
            names(&CATALOG.by_muscle_group(MuscleGroup::Cardio)),
            vec!["Cycling", "Running"]
        );
    }

    #[test]
    fn test_catalog_by_equipment() {
        assert_eq!(
            names(&CATALOG.by_equipment("Cable")),
            vec!["Lat Pulldowns"]
        );
    }

    #[test]
    fn test_catalog_bodyweight() {
        assert_eq!(
            names(&CATALOG.bodyweight()),
            vec![
                "Calf Raises",
                "Crunches",
                "Lunges",
                "Plank",
                "Push-ups",
                "Running",
                "Russian Twists",
                "Squats",
            ]
        );
    }

    #[rstest]
    #[case("press", &["Bench Press", "Close Grip Bench Press", "Incline Bench Press", "Leg Press", "Overhead Press"])]
    #[case("glute", &["Deadlift", "Leg Press", "Lunges", "Squats"])]
    #[case("xyz", &[])]
    fn test_catalog_search(#[case] query: &str, #[case] expected: &[&str]) {
        assert_eq!(names(&CATALOG.search(query)), expected);
    }

    #[test]
    fn test_catalog_available_for() {
        assert_eq!(
            names(&CATALOG.available_for(&[String::from("pull-up bar")])),
            vec!["Crunches", "Plank", "Pull-ups", "Push-ups", "Running"]
        );
        assert_eq!(
            names(&CATALOG.available_for(&[])),
            vec!["Crunches", "Plank", "Push-ups", "Running"]
        );
    }

    #[test]
    fn test_catalog_new() {
        let catalog = Catalog::new(CATALOG.by_muscle_group(MuscleGroup::Abs).into_iter().cloned());
        assert_eq!(catalog.len(), 3);
        assert!(catalog.lookup("Plank").is_some());
        assert!(catalog.lookup("Squats").is_none());
        assert!(Catalog::default().is_empty());
    }
}
