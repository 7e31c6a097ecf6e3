use std::cell::Cell;

use chrono::Duration;
use log::{info, warn};
use serde::Deserialize;

use crate::{
    Catalog, ExerciseSet, Name, NameError, Origin, Reps, Sets, Time, UserPreferences,
    WorkoutTemplate,
};

/// Turns a natural language request into a structured workout description.
///
/// Exercise names in the result are resolved against the catalog by the
/// caller. Names the catalog does not know are dropped.
pub trait PromptMatcher {
    fn match_prompt(
        &self,
        prompt: &str,
        preferences: &UserPreferences,
        catalog: &Catalog,
    ) -> Result<WorkoutSpec, MatchError>;
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutSpec {
    pub workout_name: String,
    #[serde(default = "default_estimated_duration")]
    pub estimated_duration: u32,
    pub exercises: Vec<ExerciseSpec>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseSpec {
    pub exercise_name: String,
    #[serde(default = "default_sets")]
    pub sets: u32,
    #[serde(default = "default_reps")]
    pub reps: u32,
    #[serde(default = "default_rest_time")]
    pub rest_time: u32,
}

impl ExerciseSpec {
    fn new(exercise_name: &str, sets: u32, reps: u32, rest_time: u32) -> Self {
        Self {
            exercise_name: exercise_name.to_string(),
            sets,
            reps,
            rest_time,
        }
    }
}

fn default_estimated_duration() -> u32 {
    45
}

fn default_sets() -> u32 {
    3
}

fn default_reps() -> u32 {
    8
}

fn default_rest_time() -> u32 {
    90
}

#[derive(thiserror::Error, Debug)]
pub enum MatchError {
    #[error("no JSON object found in response")]
    NoJson,
    #[error("invalid response format: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error(transparent)]
    Model(Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error("usage limit of {0} generations reached")]
    UsageLimitReached(u32),
    #[error(transparent)]
    Matcher(#[from] MatchError),
    #[error("invalid workout name: {0}")]
    InvalidName(#[from] NameError),
}

/// Matches a prompt against a fixed set of keyword rules.
///
/// Each rule yields a canned workout. Prompts matching no rule get a balanced
/// full body workout.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordMatcher;

impl PromptMatcher for KeywordMatcher {
    fn match_prompt(
        &self,
        prompt: &str,
        _preferences: &UserPreferences,
        _catalog: &Catalog,
    ) -> Result<WorkoutSpec, MatchError> {
        let prompt = prompt.to_lowercase();
        let has = |keywords: &[&str]| keywords.iter().all(|k| prompt.contains(k));

        let (workout_name, estimated_duration, exercises) = if has(&["upper body", "strength"]) {
            (
                "Upper Body Strength Builder",
                45,
                vec![
                    ExerciseSpec::new("Bench Press", 4, 6, 120),
                    ExerciseSpec::new("Pull-ups", 3, 8, 90),
                    ExerciseSpec::new("Overhead Press", 3, 8, 90),
                    ExerciseSpec::new("Bent-over Rows", 3, 10, 90),
                    ExerciseSpec::new("Bicep Curls", 3, 12, 60),
                    ExerciseSpec::new("Tricep Dips", 3, 10, 60),
                ],
            )
        } else if has(&["full body", "beginner"]) {
            (
                "Full Body Beginner Routine",
                30,
                vec![
                    ExerciseSpec::new("Push-ups", 3, 8, 60),
                    ExerciseSpec::new("Squats", 3, 12, 60),
                    ExerciseSpec::new("Plank", 3, 30, 60),
                    ExerciseSpec::new("Lunges", 2, 10, 45),
                    ExerciseSpec::new("Crunches", 2, 15, 45),
                ],
            )
        } else if has(&["chest", "triceps"]) {
            (
                "Chest & Triceps Power",
                40,
                vec![
                    ExerciseSpec::new("Bench Press", 4, 8, 90),
                    ExerciseSpec::new("Dumbbell Flyes", 3, 12, 60),
                    ExerciseSpec::new("Incline Bench Press", 3, 8, 90),
                    ExerciseSpec::new("Tricep Dips", 3, 12, 60),
                    ExerciseSpec::new("Close Grip Bench Press", 3, 10, 75),
                ],
            )
        } else if has(&["back", "biceps"]) {
            (
                "Back & Biceps Builder",
                45,
                vec![
                    ExerciseSpec::new("Deadlift", 4, 5, 120),
                    ExerciseSpec::new("Pull-ups", 4, 8, 90),
                    ExerciseSpec::new("Bent-over Rows", 3, 10, 90),
                    ExerciseSpec::new("Lat Pulldowns", 3, 12, 60),
                    ExerciseSpec::new("Bicep Curls", 4, 12, 60),
                ],
            )
        } else {
            (
                "Balanced Full Body Workout",
                50,
                vec![
                    ExerciseSpec::new("Squats", 4, 8, 90),
                    ExerciseSpec::new("Bench Press", 3, 8, 90),
                    ExerciseSpec::new("Bent-over Rows", 3, 10, 90),
                    ExerciseSpec::new("Overhead Press", 3, 8, 75),
                    ExerciseSpec::new("Plank", 3, 45, 60),
                ],
            )
        };

        Ok(WorkoutSpec {
            workout_name: workout_name.to_string(),
            estimated_duration,
            exercises,
        })
    }
}

/// Builds workout templates from prompts with a usage ceiling.
pub struct TemplateGenerator<M> {
    matcher: M,
    max_generations: u32,
    generations: Cell<u32>,
}

impl<M: PromptMatcher> TemplateGenerator<M> {
    pub fn new(matcher: M, max_generations: u32) -> Self {
        Self {
            matcher,
            max_generations,
            generations: Cell::new(0),
        }
    }

    /// Number of templates generated so far.
    pub fn generation_count(&self) -> u32 {
        self.generations.get()
    }

    pub fn generate(
        &self,
        catalog: &Catalog,
        prompt: &str,
        preferences: &UserPreferences,
    ) -> Result<WorkoutTemplate, GenerationError> {
        if self.generations.get() >= self.max_generations {
            warn!("usage limit of {} generations reached", self.max_generations);
            return Err(GenerationError::UsageLimitReached(self.max_generations));
        }

        let spec = self.matcher.match_prompt(prompt, preferences, catalog)?;
        let name = Name::truncated(&spec.workout_name)?;
        let exercises = spec
            .exercises
            .iter()
            .filter_map(|e| resolve(catalog, e))
            .collect::<Vec<_>>();

        let template = WorkoutTemplate::generated(
            name,
            exercises,
            Duration::minutes(i64::from(spec.estimated_duration)),
            prompt.to_string(),
        );

        self.generations.set(self.generations.get() + 1);
        info!("generated workout '{}'", template.name);

        Ok(template)
    }

    /// Generate a new template from an existing one and a modification request.
    ///
    /// The original template stays untouched.
    pub fn customize(
        &self,
        catalog: &Catalog,
        original: &WorkoutTemplate,
        modifications: &str,
        preferences: &UserPreferences,
    ) -> Result<WorkoutTemplate, GenerationError> {
        let name = original.name.derived("Customized")?;
        let prompt = format!(
            "Modify this workout: {}. Changes requested: {modifications}",
            original.name
        );

        let mut template = self.generate(catalog, &prompt, preferences)?;
        template.name = name;
        template.origin = Origin::Generated {
            prompt: format!("Customized from: {}. {modifications}", original.name),
        };

        Ok(template)
    }
}

fn resolve(catalog: &Catalog, spec: &ExerciseSpec) -> Option<ExerciseSet> {
    let Some(exercise) = catalog.lookup(&spec.exercise_name) else {
        warn!("exercise not found in catalog: {}", spec.exercise_name);
        return None;
    };

    match (
        Sets::new(spec.sets),
        Reps::new(spec.reps),
        Time::new(spec.rest_time),
    ) {
        (Ok(sets), Ok(reps), Ok(rest)) => {
            Some(ExerciseSet::new(exercise.clone(), sets, reps).with_rest(rest))
        }
        (sets, reps, rest) => {
            warn!(
                "invalid prescription for {}: {}",
                spec.exercise_name,
                [
                    sets.err().map(|e| e.to_string()),
                    reps.err().map(|e| e.to_string()),
                    rest.err().map(|e| e.to_string()),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ")
            );
            None
        }
    }
}
