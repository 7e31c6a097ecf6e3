use log::debug;

use crate::{Catalog, MatchError, PromptMatcher, UserPreferences, WorkoutSpec};

/// A text completion service.
pub trait TextModel {
    fn complete(&self, prompt: &str) -> Result<String, Box<dyn std::error::Error>>;
}

/// Matches prompts by asking a text model to act as a personal trainer.
pub struct ModelMatcher<T> {
    model: T,
}

impl<T: TextModel> ModelMatcher<T> {
    pub fn new(model: T) -> Self {
        Self { model }
    }
}

impl<T: TextModel> PromptMatcher for ModelMatcher<T> {
    fn match_prompt(
        &self,
        prompt: &str,
        preferences: &UserPreferences,
        catalog: &Catalog,
    ) -> Result<WorkoutSpec, MatchError> {
        let request = trainer_request(prompt, preferences, catalog);
        let response = self.model.complete(&request).map_err(MatchError::Model)?;
        debug!("model response: {response}");
        parse_response(&response)
    }
}

/// Request asking for a workout in the JSON format understood by [`parse_response`].
///
/// Only exercises available with the user's equipment and not excluded by the
/// user are offered.
#[must_use]
pub fn trainer_request(prompt: &str, preferences: &UserPreferences, catalog: &Catalog) -> String {
    let exercises = catalog
        .available_for(&preferences.available_equipment)
        .into_iter()
        .filter(|e| !preferences.excludes(&e.name))
        .map(|e| {
            format!(
                "- {} ({})",
                e.name,
                e.muscle_groups
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let preferred_muscle_groups = preferences
        .preferred_muscle_groups
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let excluded_exercises = if preferences.excluded_exercises.is_empty() {
        String::from("None")
    } else {
        preferences.excluded_exercises.join(", ")
    };

    format!(
        r#"You are a professional fitness trainer creating a personalized workout plan.

USER REQUEST: "{prompt}"

USER PROFILE:
- Experience Level: {}
- Goals: {}
- Available Equipment: {}
- Time Available: {} minutes
- Preferred Muscle Groups: {preferred_muscle_groups}
- Avoid Exercises: {excluded_exercises}

AVAILABLE EXERCISES:
{exercises}

INSTRUCTIONS:
Create a workout plan that matches the user's request and profile. Consider:
1. Appropriate difficulty level for their experience
2. Equipment availability
3. Time constraints
4. Muscle group balance
5. Progressive overload principles

Respond with a JSON object in this exact format:
{{
    "workout_name": "Descriptive workout name",
    "estimated_duration": 45,
    "exercises": [
        {{
            "exercise_name": "Exercise Name",
            "sets": 3,
            "reps": 8,
            "rest_time": 90
        }}
    ]
}}

Make sure all exercise names exactly match the available exercises listed above.
"#,
        preferences.experience_level,
        preferences.goals,
        preferences.available_equipment.join(", "),
        preferences.session_minutes,
    )
}

/// Extract a workout from the outermost JSON object in a model response.
///
/// Missing durations and prescriptions fall back to 45 minutes, 3 sets,
/// 8 reps and 90 seconds of rest.
pub fn parse_response(response: &str) -> Result<WorkoutSpec, MatchError> {
    match (response.find('{'), response.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            Ok(serde_json::from_str(&response[start..=end])?)
        }
        _ => Err(MatchError::NoJson),
    }
}
