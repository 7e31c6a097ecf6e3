use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, NaiveDate};

use crate::{MuscleGroup, ReadError, UpdateError, UserID};

pub trait VolumeRepository {
    fn read_weekly_volumes(&self, user_id: UserID) -> Result<Vec<WeeklyVolume>, ReadError>;
    /// Add volume to the week's record of each muscle group, creating missing records.
    ///
    /// Either all records are updated or none. The updated records are returned in the order of
    /// `muscle_groups`.
    fn add_volume(
        &self,
        user_id: UserID,
        week_start: NaiveDate,
        muscle_groups: &BTreeSet<MuscleGroup>,
        volume: f32,
    ) -> Result<Vec<WeeklyVolume>, UpdateError>;
}

/// Accumulated training volume of one muscle group in one week.
///
/// There is at most one record per user, muscle group and week. Records only
/// ever grow.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyVolume {
    pub user_id: UserID,
    pub muscle_group: MuscleGroup,
    pub week_start: NaiveDate,
    pub volume: f32,
}

/// Monday of the week containing `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Sum the volume per muscle group of all records within `first..=last`.
#[must_use]
pub fn volume_per_muscle_group(
    volumes: &[WeeklyVolume],
    first: NaiveDate,
    last: NaiveDate,
) -> BTreeMap<MuscleGroup, f32> {
    let mut result: BTreeMap<MuscleGroup, f32> = BTreeMap::new();
    for v in volumes
        .iter()
        .filter(|v| v.week_start >= first && v.week_start <= last)
    {
        *result.entry(v.muscle_group).or_insert(0.0) += v.volume;
    }
    result
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::monday(date(2020, 2, 3), date(2020, 2, 3))]
    #[case::wednesday(date(2020, 2, 5), date(2020, 2, 3))]
    #[case::sunday(date(2020, 2, 9), date(2020, 2, 3))]
    #[case::across_month(date(2020, 3, 1), date(2020, 2, 24))]
    #[case::across_year(date(2021, 1, 1), date(2020, 12, 28))]
    fn test_week_start(#[case] input: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(week_start(input), expected);
    }

    #[test]
    fn test_volume_per_muscle_group() {
        let volumes = [
            WeeklyVolume {
                user_id: 1.into(),
                muscle_group: MuscleGroup::Chest,
                week_start: date(2020, 1, 27),
                volume: 100.0,
            },
            WeeklyVolume {
                user_id: 1.into(),
                muscle_group: MuscleGroup::Chest,
                week_start: date(2020, 2, 3),
                volume: 50.0,
            },
            WeeklyVolume {
                user_id: 1.into(),
                muscle_group: MuscleGroup::Back,
                week_start: date(2020, 2, 3),
                volume: 20.0,
            },
            WeeklyVolume {
                user_id: 1.into(),
                muscle_group: MuscleGroup::Legs,
                week_start: date(2020, 1, 20),
                volume: 500.0,
            },
        ];

        let totals = volume_per_muscle_group(&volumes, date(2020, 1, 27), date(2020, 2, 3));

        assert_eq!(
            totals.keys().copied().collect::<Vec<_>>(),
            vec![MuscleGroup::Chest, MuscleGroup::Back]
        );
        assert_approx_eq!(totals[&MuscleGroup::Chest], 150.0);
        assert_approx_eq!(totals[&MuscleGroup::Back], 20.0);
    }

    #[test]
    fn test_volume_per_muscle_group_empty() {
        assert!(volume_per_muscle_group(&[], date(2020, 1, 27), date(2020, 2, 3)).is_empty());
    }
}
