use derive_more::{Display, Into};
use std::ops::Mul;

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..1000).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

impl Mul<Reps> for Sets {
    type Output = u32;

    fn mul(self, rhs: Reps) -> Self::Output {
        self.0 * rhs.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 999")]
    OutOfRange,
    #[error("Sets must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Rest time between sets in seconds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..1000).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Time {
    type Error = TimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Time::new(parsed_value),
            Err(_) => Err(TimeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 999 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() || value < 0.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a non-negative number")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Training load of a performed exercise: sets × reps × weight.
#[must_use]
pub fn volume(sets: Sets, reps: Reps, weight: Weight) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let repetitions = (sets * reps) as f32;
    repetitions * weight.0
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Err(SetsError::OutOfRange))]
    #[case(1, Ok(Sets(1)))]
    #[case(999, Ok(Sets(999)))]
    #[case(1000, Err(SetsError::OutOfRange))]
    fn test_sets_new(#[case] input: u32, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::new(input), expected);
    }

    #[rstest]
    #[case("4", Ok(Sets(4)))]
    #[case("4.5", Err(SetsError::ParseError))]
    #[case("", Err(SetsError::ParseError))]
    fn test_sets_from_str(#[case] input: &str, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::try_from(input), expected);
    }

    #[rstest]
    #[case(0, Err(RepsError::OutOfRange))]
    #[case(12, Ok(Reps(12)))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] input: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(input), expected);
    }

    #[rstest]
    #[case("8", Ok(Reps(8)))]
    #[case("-8", Err(RepsError::ParseError))]
    fn test_reps_from_str(#[case] input: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(input), expected);
    }

    #[test]
    fn test_sets_mul_reps() {
        assert_eq!(Sets(3) * Reps(8), 24);
    }

    #[rstest]
    #[case(0, Ok(Time(0)))]
    #[case(90, Ok(Time(90)))]
    #[case(1000, Err(TimeError::OutOfRange))]
    fn test_time_new(#[case] input: u32, #[case] expected: Result<Time, TimeError>) {
        assert_eq!(Time::new(input), expected);
    }

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(62.5, Ok(Weight(62.5)))]
    #[case(102.25, Ok(Weight(102.25)))]
    #[case(1000.0, Ok(Weight(1000.0)))]
    #[case(-1.0, Err(WeightError::OutOfRange))]
    #[case(f32::INFINITY, Err(WeightError::OutOfRange))]
    fn test_weight_new(#[case] input: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(input), expected);
    }

    #[rstest]
    #[case("100", Ok(Weight(100.0)))]
    #[case("1250.75", Ok(Weight(1250.75)))]
    #[case("NaN", Err(WeightError::OutOfRange))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_from_str(#[case] input: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(input), expected);
    }

    #[rstest]
    #[case(3, 8, 100.0, 2400.0)]
    #[case(4, 5, 142.5, 2850.0)]
    #[case(3, 30, 0.0, 0.0)]
    fn test_volume(#[case] sets: u32, #[case] reps: u32, #[case] weight: f32, #[case] expected: f32) {
        assert_approx_eq!(
            volume(
                Sets::new(sets).unwrap(),
                Reps::new(reps).unwrap(),
                Weight::new(weight).unwrap()
            ),
            expected
        );
    }
}
