use std::collections::{BTreeMap, BTreeSet};

use crate::MuscleGroup;

/// Muscle groups whose volume is strictly below `threshold` times the average
/// volume of all given muscle groups.
///
/// Only muscle groups present in `volume_per_muscle_group` are considered. A
/// group that was not trained at all has no entry and is therefore never
/// reported. Callers needing full coverage have to compare against all
/// [`MuscleGroup`] variants themselves.
#[must_use]
pub fn imbalanced_muscle_groups(
    volume_per_muscle_group: &BTreeMap<MuscleGroup, f32>,
    threshold: f32,
) -> BTreeSet<MuscleGroup> {
    if volume_per_muscle_group.is_empty() {
        return BTreeSet::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let average = volume_per_muscle_group.values().sum::<f32>()
        / volume_per_muscle_group.len() as f32;
    let limit = average * threshold;

    volume_per_muscle_group
        .iter()
        .filter(|(_, volume)| **volume < limit)
        .map(|(muscle_group, _)| *muscle_group)
        .collect()
}
