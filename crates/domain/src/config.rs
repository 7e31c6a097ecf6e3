use serde::{Deserialize, Serialize};

/// Tunable limits and heuristics of the planner.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    /// Number of successful generations after which the generator refuses to run.
    pub max_generations: u32,
    /// Fraction of the average weekly volume below which a muscle group is imbalanced.
    pub balance_threshold: f32,
    /// Lowest per muscle group volume of the last two weeks that does not
    /// trigger a balanced workout suggestion.
    pub suggestion_floor: f32,
    pub minutes_per_set: u32,
    pub assumed_rest_seconds: u32,
    pub short_rest_seconds: u32,
    pub min_exercises: usize,
    pub max_exercises: usize,
}

impl PlannerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.balance_threshold > 0.0 && self.balance_threshold <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "balance_threshold must be in the range (0, 1] ({})",
                self.balance_threshold
            )));
        }
        if self.suggestion_floor < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "suggestion_floor must not be negative ({})",
                self.suggestion_floor
            )));
        }
        if self.minutes_per_set == 0 {
            return Err(ConfigError::Invalid(
                "minutes_per_set must be positive".to_string(),
            ));
        }
        if self.min_exercises > self.max_exercises {
            return Err(ConfigError::Invalid(format!(
                "min_exercises must not exceed max_exercises ({} > {})",
                self.min_exercises, self.max_exercises
            )));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_generations: 1000,
            balance_threshold: 0.5,
            suggestion_floor: 10.0,
            minutes_per_set: 2,
            assumed_rest_seconds: 90,
            short_rest_seconds: 60,
            min_exercises: 4,
            max_exercises: 8,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_from_json_defaults() {
        assert_eq!(
            PlannerConfig::from_json("{}").unwrap(),
            PlannerConfig::default()
        );
    }

    #[test]
    fn test_from_json_partial() {
        assert_eq!(
            PlannerConfig::from_json(r#"{"max_generations": 3, "suggestion_floor": 0.0}"#)
                .unwrap(),
            PlannerConfig {
                max_generations: 3,
                suggestion_floor: 0.0,
                ..PlannerConfig::default()
            }
        );
    }

    #[rstest]
    #[case(r#"{"balance_threshold": 0.0}"#)]
    #[case(r#"{"balance_threshold": 1.5}"#)]
    #[case(r#"{"suggestion_floor": -1.0}"#)]
    #[case(r#"{"minutes_per_set": 0}"#)]
    #[case(r#"{"min_exercises": 9}"#)]
    fn test_from_json_invalid(#[case] json: &str) {
        assert!(matches!(
            PlannerConfig::from_json(json),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[rstest]
    #[case("")]
    #[case(r#"{"max_generations": "many"}"#)]
    fn test_from_json_parse_error(#[case] json: &str) {
        assert!(matches!(
            PlannerConfig::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }
}
