// ABOUTME: Two-level progress percentage for a guided workout session
// ABOUTME: Coarse exercise progress plus fine set progress weighted by one exercise's share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use super::advance::SetPosition;
use liftmate_core::constants::session::PROGRESS_COMPLETE;
use liftmate_core::models::ExercisePlan;

/// Progress through the plan at `position`, in percent.
///
/// `(i / total) * 100 + (s / sets_in_current) * (100 / total)`
///
/// Every exercise gets an equal share of the bar regardless of its set count.
/// This matches the figures users already see and must stay that way without
/// product sign-off. An empty plan reports 100; an out-of-range position is
/// treated as finished.
#[must_use]
pub fn progress_percent(position: SetPosition, exercises: &[ExercisePlan]) -> f64 {
    let Some(current) = exercises.get(position.exercise_index) else {
        return PROGRESS_COMPLETE;
    };

    let total = exercises.len() as f64;
    let sets = f64::from(current.effective_sets());
    let exercise_share = PROGRESS_COMPLETE / total;

    let coarse = position.exercise_index as f64 / total * PROGRESS_COMPLETE;
    let fine = position.set_index as f64 / sets * exercise_share;

    (coarse + fine).clamp(0.0, PROGRESS_COMPLETE)
}
