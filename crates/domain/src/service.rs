use std::collections::BTreeSet;

use chrono::{Days, Local, NaiveDate};
use log::{debug, error, info, warn};

use crate::{
    Analysis, Catalog, CreateError, Exercise, ExerciseSet, GenerationError, MuscleGroup, Name,
    PlannerConfig, PreferencesRepository, PromptMatcher, ReadError, Reps, RepositoryError, Sets,
    TemplateGenerator, TemplateID, TemplateRepository, UpdateError, UserID, UserPreferences,
    VolumeRepository, WeeklyVolume, Weight, WorkoutTemplate, imbalanced_muscle_groups, volume,
    volume_per_muscle_group, week_start,
};

pub struct Service<R, M> {
    repository: R,
    catalog: Catalog,
    generator: TemplateGenerator<M>,
    config: PlannerConfig,
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R, M> Service<R, M>
where
    R: TemplateRepository + VolumeRepository + PreferencesRepository,
    M: PromptMatcher,
{
    pub fn new(repository: R, catalog: Catalog, matcher: M, config: PlannerConfig) -> Self {
        Self {
            repository,
            catalog,
            generator: TemplateGenerator::new(matcher, config.max_generations),
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn create_template(
        &self,
        user_id: UserID,
        name: Name,
        exercises: Vec<ExerciseSet>,
    ) -> Result<WorkoutTemplate, CreateError> {
        let template = WorkoutTemplate::new(name, exercises, self.config.minutes_per_set);
        self.register(user_id, template)
    }

    /// Generate a template and add it to the templates of the user.
    ///
    /// The given preferences replace the stored preferences of the user, even
    /// if the generation fails.
    pub fn generate_from_prompt(
        &self,
        user_id: UserID,
        prompt: &str,
        preferences: UserPreferences,
    ) -> Result<WorkoutTemplate, GenerateError> {
        let preferences = log_on_error!(
            self.repository.replace_preferences(UserPreferences {
                user_id,
                ..preferences
            }),
            "replace",
            "preferences"
        )
        .map_err(RepositoryError::from)?;
        let template = self.generator.generate(&self.catalog, prompt, &preferences)?;
        Ok(self
            .register(user_id, template)
            .map_err(RepositoryError::from)?)
    }

    /// Add the volume of an exercise to the current week of each targeted muscle group.
    pub fn record_volume(
        &self,
        user_id: UserID,
        exercise: &Exercise,
        sets: Sets,
        reps: Reps,
        weight: Weight,
    ) -> Result<Vec<WeeklyVolume>, UpdateError> {
        self.record_volume_on(
            user_id,
            exercise,
            sets,
            reps,
            weight,
            Local::now().date_naive(),
        )
    }

    /// Add the volume of an exercise to the week containing `date`.
    ///
    /// The full volume is added to every targeted muscle group in a single write.
    pub fn record_volume_on(
        &self,
        user_id: UserID,
        exercise: &Exercise,
        sets: Sets,
        reps: Reps,
        weight: Weight,
        date: NaiveDate,
    ) -> Result<Vec<WeeklyVolume>, UpdateError> {
        let week_start = week_start(date);
        let volume = volume(sets, reps, weight);
        let volumes = log_on_error!(
            self.repository
                .add_volume(user_id, week_start, &exercise.muscle_groups, volume),
            "record",
            "volume"
        )?;
        info!(
            "recorded volume {volume} of {} for week {week_start}",
            exercise.name
        );
        Ok(volumes)
    }

    /// Volume records of the user for the week containing `date`.
    pub fn weekly_volumes(
        &self,
        user_id: UserID,
        date: NaiveDate,
    ) -> Result<Vec<WeeklyVolume>, ReadError> {
        let week_start = week_start(date);
        Ok(self
            .read_weekly_volumes(user_id)?
            .into_iter()
            .filter(|v| v.week_start == week_start)
            .collect())
    }

    /// Muscle groups trained much less than average in the week containing `date`.
    pub fn check_balance(
        &self,
        user_id: UserID,
        date: NaiveDate,
    ) -> Result<BTreeSet<MuscleGroup>, ReadError> {
        let week_start = week_start(date);
        let volumes = self.read_weekly_volumes(user_id)?;
        Ok(imbalanced_muscle_groups(
            &volume_per_muscle_group(&volumes, week_start, week_start),
            self.config.balance_threshold,
        ))
    }

    /// Suggest a workout for the week containing `date`.
    ///
    /// Users with recorded volume get a new balanced full body template if any
    /// muscle group trained in the current or previous week stays below the
    /// suggestion floor, or if nothing was trained in that time. Otherwise the
    /// first template of the user is suggested.
    pub fn get_suggested_workout(
        &self,
        user_id: UserID,
        date: NaiveDate,
    ) -> Option<WorkoutTemplate> {
        let week_start = week_start(date);
        let volumes = self.read_weekly_volumes(user_id).ok()?;

        if !volumes.is_empty() {
            let recent = volume_per_muscle_group(&volumes, week_start - Days::new(7), week_start);
            let minimum = recent.values().copied().reduce(f32::min);
            if minimum.is_none_or(|minimum| minimum < self.config.suggestion_floor) {
                debug!("suggesting balanced workout (minimum volume: {minimum:?})");
                return self.create_balanced_workout(user_id).ok();
            }
        }

        debug!("suggesting first template");
        self.user_templates(user_id).ok()?.into_iter().next()
    }

    /// Generate a customized copy of a template and add it to the templates of the user.
    pub fn customize_workout(
        &self,
        user_id: UserID,
        template_id: TemplateID,
        modifications: &str,
    ) -> Result<WorkoutTemplate, CustomizeError> {
        let Some(original) = self
            .template(template_id)
            .map_err(RepositoryError::from)?
        else {
            warn!("template {template_id} not found");
            return Err(CustomizeError::TemplateNotFound(template_id));
        };
        let Some(preferences) = self
            .preferences(user_id)
            .map_err(RepositoryError::from)?
        else {
            warn!("no preferences stored for user {user_id}");
            return Err(CustomizeError::NoPreferences(user_id));
        };

        let template =
            self.generator
                .customize(&self.catalog, &original, modifications, &preferences)?;
        Ok(self
            .register(user_id, template)
            .map_err(RepositoryError::from)?)
    }

    /// Human readable analysis of a template.
    pub fn analyze_workout(&self, template_id: TemplateID) -> String {
        match self.template(template_id) {
            Ok(Some(template)) => match Analysis::new(&template, &self.config) {
                Ok(analysis) => analysis.to_string(),
                Err(err) => {
                    error!("failed to analyze workout {template_id}: {err}");
                    String::from("Analysis failed")
                }
            },
            Ok(None) => format!("Template {template_id} not found"),
            Err(_) => String::from("Analysis failed"),
        }
    }

    /// Templates of the user in the order they were created.
    pub fn user_templates(&self, user_id: UserID) -> Result<Vec<WorkoutTemplate>, ReadError> {
        log_on_error!(
            self.repository.read_user_templates(user_id),
            "get",
            "templates"
        )
    }

    pub fn template(&self, id: TemplateID) -> Result<Option<WorkoutTemplate>, ReadError> {
        log_on_error!(self.repository.read_template(id), "get", "template")
    }

    pub fn preferences(&self, user_id: UserID) -> Result<Option<UserPreferences>, ReadError> {
        log_on_error!(
            self.repository.read_preferences(user_id),
            "get",
            "preferences"
        )
    }

    pub fn usage_stats(&self) -> Result<UsageStats, ReadError> {
        let templates = log_on_error!(self.repository.read_templates(), "get", "templates")?;
        let owners = log_on_error!(
            self.repository.read_template_owners(),
            "get",
            "template owners"
        )?;
        let generated_templates = templates.iter().filter(|t| t.is_generated()).count();
        Ok(UsageStats {
            total_templates: templates.len(),
            generated_templates,
            manual_templates: templates.len() - generated_templates,
            total_users: owners.len(),
            generation_count: self.generator.generation_count(),
        })
    }

    fn register(
        &self,
        user_id: UserID,
        template: WorkoutTemplate,
    ) -> Result<WorkoutTemplate, CreateError> {
        let template = log_on_error!(
            self.repository.create_template(user_id, template),
            "create",
            "template"
        )?;
        info!("created template '{}' ({})", template.name, template.id);
        Ok(template)
    }

    fn read_weekly_volumes(&self, user_id: UserID) -> Result<Vec<WeeklyVolume>, ReadError> {
        log_on_error!(
            self.repository.read_weekly_volumes(user_id),
            "get",
            "volumes"
        )
    }

    fn create_balanced_workout(&self, user_id: UserID) -> Result<WorkoutTemplate, CreateError> {
        let exercises = BALANCED_WORKOUT
            .iter()
            .filter_map(|(id, sets, reps)| {
                let Some(exercise) = self.catalog.get(&(*id).into()) else {
                    warn!("exercise not found in catalog: {id}");
                    return None;
                };
                Some(ExerciseSet::new(
                    exercise.clone(),
                    Sets::new(*sets).ok()?,
                    Reps::new(*reps).ok()?,
                ))
            })
            .collect();
        let name = Name::new("Balanced Full Body").map_err(|err| CreateError::Other(err.into()))?;
        self.create_template(user_id, name, exercises)
    }
}

const BALANCED_WORKOUT: [(&str, u32, u32); 4] = [
    ("squats", 3, 10),
    ("bench_press", 3, 8),
    ("bent_over_rows", 3, 10),
    ("plank", 3, 30),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageStats {
    pub total_templates: usize,
    pub generated_templates: usize,
    pub manual_templates: usize,
    /// Number of users owning at least one template.
    pub total_users: usize,
    pub generation_count: u32,
}

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

#[derive(thiserror::Error, Debug)]
pub enum CustomizeError {
    #[error("template {0} not found")]
    TemplateNotFound(TemplateID),
    #[error("no preferences stored for user {0}")]
    NoPreferences(UserID),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
