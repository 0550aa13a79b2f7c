// ABOUTME: Derives the muscle-group training log from a completed workout's exercise names
// ABOUTME: Also folds log entries into per-group weekly set totals for summary charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use liftmate_core::models::{ExercisePlan, MuscleGroup, MuscleGroupEntry};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One entry per muscle group trained, with sets summed across exercises.
///
/// Exercises whose names match no known group contribute nothing.
#[must_use]
pub fn derive_entries(
    workout_id: Uuid,
    exercises: &[ExercisePlan],
    logged_at: DateTime<Utc>,
) -> Vec<MuscleGroupEntry> {
    let mut sets_by_group: BTreeMap<MuscleGroup, u32> = BTreeMap::new();
    for exercise in exercises {
        for group in MuscleGroup::classify(&exercise.name) {
            *sets_by_group.entry(group).or_default() += exercise.effective_sets();
        }
    }

    sets_by_group
        .into_iter()
        .map(|(muscle_group, sets)| MuscleGroupEntry {
            workout_id,
            muscle_group,
            sets,
            logged_at,
        })
        .collect()
}

/// Sets per muscle group for the ISO week containing `day`
#[must_use]
pub fn weekly_summary(entries: &[MuscleGroupEntry], day: NaiveDate) -> BTreeMap<MuscleGroup, u32> {
    let week = day.iso_week();
    let mut totals = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|entry| entry.logged_at.date_naive().iso_week() == week)
    {
        *totals.entry(entry.muscle_group).or_default() += entry.sets;
    }
    totals
}
