//! In-memory storage
//!
//! All data lives for the lifetime of the process. The store is meant for a single caller at a
//! time. Concurrent access would require guarding the maps with a mutex per user.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
};

use chrono::NaiveDate;
use log::debug;
use routine_planner_domain as domain;

#[derive(Debug, Default)]
pub struct InMemory {
    templates: RefCell<BTreeMap<domain::TemplateID, domain::WorkoutTemplate>>,
    user_templates: RefCell<BTreeMap<domain::UserID, Vec<domain::TemplateID>>>,
    volumes: RefCell<BTreeMap<VolumeKey, f32>>,
    preferences: RefCell<BTreeMap<domain::UserID, domain::UserPreferences>>,
}

type VolumeKey = (domain::UserID, NaiveDate, domain::MuscleGroup);

impl InMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl domain::TemplateRepository for InMemory {
    fn read_template(
        &self,
        id: domain::TemplateID,
    ) -> Result<Option<domain::WorkoutTemplate>, domain::ReadError> {
        Ok(self.templates.borrow().get(&id).cloned())
    }

    fn read_templates(&self) -> Result<Vec<domain::WorkoutTemplate>, domain::ReadError> {
        Ok(self.templates.borrow().values().cloned().collect())
    }

    fn read_user_templates(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::WorkoutTemplate>, domain::ReadError> {
        let templates = self.templates.borrow();
        Ok(self
            .user_templates
            .borrow()
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| templates.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn read_template_owners(&self) -> Result<BTreeSet<domain::UserID>, domain::ReadError> {
        Ok(self
            .user_templates
            .borrow()
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(user_id, _)| *user_id)
            .collect())
    }

    fn create_template(
        &self,
        user_id: domain::UserID,
        template: domain::WorkoutTemplate,
    ) -> Result<domain::WorkoutTemplate, domain::CreateError> {
        let mut templates = self.templates.borrow_mut();
        if templates.contains_key(&template.id) {
            return Err(domain::CreateError::Conflict);
        }
        templates.insert(template.id, template.clone());
        self.user_templates
            .borrow_mut()
            .entry(user_id)
            .or_default()
            .push(template.id);
        Ok(template)
    }
}

impl domain::VolumeRepository for InMemory {
    fn read_weekly_volumes(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::WeeklyVolume>, domain::ReadError> {
        Ok(self
            .volumes
            .borrow()
            .iter()
            .filter(|((id, _, _), _)| *id == user_id)
            .map(
                |((user_id, week_start, muscle_group), volume)| domain::WeeklyVolume {
                    user_id: *user_id,
                    muscle_group: *muscle_group,
                    week_start: *week_start,
                    volume: *volume,
                },
            )
            .collect())
    }

    fn add_volume(
        &self,
        user_id: domain::UserID,
        week_start: NaiveDate,
        muscle_groups: &BTreeSet<domain::MuscleGroup>,
        volume: f32,
    ) -> Result<Vec<domain::WeeklyVolume>, domain::UpdateError> {
        let mut volumes = self.volumes.borrow_mut();
        Ok(muscle_groups
            .iter()
            .map(|&muscle_group| {
                let total = volumes
                    .entry((user_id, week_start, muscle_group))
                    .or_insert_with(|| {
                        debug!("new volume record for {muscle_group} in week {week_start}");
                        0.0
                    });
                *total += volume;
                domain::WeeklyVolume {
                    user_id,
                    muscle_group,
                    week_start,
                    volume: *total,
                }
            })
            .collect())
    }
}

impl domain::PreferencesRepository for InMemory {
    fn read_preferences(
        &self,
        user_id: domain::UserID,
    ) -> Result<Option<domain::UserPreferences>, domain::ReadError> {
        Ok(self.preferences.borrow().get(&user_id).cloned())
    }

    fn replace_preferences(
        &self,
        preferences: domain::UserPreferences,
    ) -> Result<domain::UserPreferences, domain::UpdateError> {
        self.preferences
            .borrow_mut()
            .insert(preferences.user_id, preferences.clone());
        Ok(preferences)
    }
}
