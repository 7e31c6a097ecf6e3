use std::{collections::BTreeSet, fmt};

use crate::{MuscleGroup, PlannerConfig, WorkoutTemplate};

/// Summary of a workout template with heuristic recommendations.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub name: String,
    pub duration_minutes: i64,
    pub num_exercises: usize,
    pub num_sets: u32,
    pub muscle_groups: BTreeSet<MuscleGroup>,
    pub recommendations: Vec<Recommendation>,
}

impl Analysis {
    pub fn new(template: &WorkoutTemplate, config: &PlannerConfig) -> Result<Self, AnalysisError> {
        if template.exercises.is_empty() {
            return Err(AnalysisError::NoExercises);
        }

        let num_exercises = template.num_exercises();
        let mut recommendations = vec![];

        if num_exercises < config.min_exercises {
            recommendations.push(Recommendation::MoreExercises);
        } else if num_exercises > config.max_exercises {
            recommendations.push(Recommendation::AdequateRest);
        }

        // average rest < short rest, without dividing
        let total_rest: u64 = template
            .exercises
            .iter()
            .map(|e| u64::from(e.rest.map_or(config.assumed_rest_seconds, u32::from)))
            .sum();
        if total_rest < u64::from(config.short_rest_seconds) * num_exercises as u64 {
            recommendations.push(Recommendation::LongerRest);
        }

        Ok(Self {
            name: template.name.to_string(),
            duration_minutes: template.estimated_duration.num_minutes(),
            num_exercises,
            num_sets: template.num_sets(),
            muscle_groups: template.muscle_groups(),
            recommendations,
        })
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workout Analysis: {}", self.name)?;
        writeln!(f, "Duration: {} minutes", self.duration_minutes)?;
        writeln!(f, "Total Exercises: {}", self.num_exercises)?;
        writeln!(f, "Total Sets: {}", self.num_sets)?;
        write!(
            f,
            "Targeted Muscle Groups: {}",
            self.muscle_groups
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        for recommendation in &self.recommendations {
            write!(f, "\nRecommendation: {recommendation}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    MoreExercises,
    AdequateRest,
    LongerRest,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::MoreExercises => {
                write!(f, "Consider adding more exercises for better muscle development")
            }
            Recommendation::AdequateRest => {
                write!(f, "This is a high-volume workout - ensure adequate rest")
            }
            Recommendation::LongerRest => {
                write!(f, "Consider longer rest periods for strength development")
            }
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("workout has no exercises")]
    NoExercises,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Catalog, ExerciseSet, Name, Reps, Sets, Time};

    use super::*;

    static CATALOG: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(Catalog::builtin);

    fn exercise_set(id: &str, sets: u32, rest: Option<u32>) -> ExerciseSet {
        let exercise_set = ExerciseSet::new(
            CATALOG.get(&id.into()).unwrap().clone(),
            Sets::new(sets).unwrap(),
            Reps::new(10).unwrap(),
        );
        match rest {
            Some(rest) => exercise_set.with_rest(Time::new(rest).unwrap()),
            None => exercise_set,
        }
    }

    fn template(exercises: Vec<ExerciseSet>) -> WorkoutTemplate {
        WorkoutTemplate::new(Name::new("Push").unwrap(), exercises, 2)
    }

    #[test]
    fn test_analysis_display() {
        let template = template(vec![
            exercise_set("bench_press", 4, Some(90)),
            exercise_set("tricep_dips", 3, Some(60)),
        ]);

        assert_eq!(
            Analysis::new(&template, &PlannerConfig::default())
                .unwrap()
                .to_string(),
            "Workout Analysis: Push\n\
             Duration: 14 minutes\n\
             Total Exercises: 2\n\
             Total Sets: 7\n\
             Targeted Muscle Groups: chest, shoulders, triceps\n\
             Recommendation: Consider adding more exercises for better muscle development"
        );
    }

    #[rstest]
    #[case::few_exercises(2, Some(90), vec![Recommendation::MoreExercises])]
    #[case::enough_exercises(4, Some(90), vec![])]
    #[case::max_exercises(8, Some(60), vec![])]
    #[case::many_exercises(9, Some(90), vec![Recommendation::AdequateRest])]
    #[case::short_rest(5, Some(45), vec![Recommendation::LongerRest])]
    #[case::assumed_rest(5, None, vec![])]
    #[case::few_exercises_short_rest(
        1,
        Some(30),
        vec![Recommendation::MoreExercises, Recommendation::LongerRest]
    )]
    fn test_analysis_recommendations(
        #[case] num_exercises: usize,
        #[case] rest: Option<u32>,
        #[case] expected: Vec<Recommendation>,
    ) {
        let template = template(
            (0..num_exercises)
                .map(|_| exercise_set("squats", 3, rest))
                .collect(),
        );

        assert_eq!(
            Analysis::new(&template, &PlannerConfig::default())
                .unwrap()
                .recommendations,
            expected
        );
    }

    #[test]
    fn test_analysis_mixed_rest() {
        // (30 + 90) / 2 = 60
        let template = template(vec![
            exercise_set("squats", 3, Some(30)),
            exercise_set("lunges", 3, None),
            exercise_set("leg_press", 3, Some(30)),
            exercise_set("calf_raises", 3, None),
        ]);

        let analysis = Analysis::new(&template, &PlannerConfig::default()).unwrap();

        assert_eq!(analysis.recommendations, vec![]);
        assert_eq!(
            analysis.muscle_groups,
            BTreeSet::from([MuscleGroup::Legs, MuscleGroup::Glutes])
        );
        assert_eq!(analysis.duration_minutes, 24);
    }

    #[test]
    fn test_analysis_generated_duration() {
        let template = WorkoutTemplate::generated(
            Name::new("Run").unwrap(),
            vec![exercise_set("running", 1, Some(0))],
            Duration::minutes(30),
            String::from("cardio"),
        );

        assert_eq!(
            Analysis::new(&template, &PlannerConfig::default())
                .unwrap()
                .duration_minutes,
            30
        );
    }

    #[test]
    fn test_analysis_no_exercises() {
        assert_eq!(
            Analysis::new(&template(vec![]), &PlannerConfig::default()),
            Err(AnalysisError::NoExercises)
        );
    }
}
