// ABOUTME: Pure advance rule deciding the next (exercise, set) position or exhaustion
// ABOUTME: Also defines the SetPosition type used throughout the session state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use liftmate_core::models::ExercisePlan;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position within a workout. Ordering is lexicographic (exercise, then set).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SetPosition {
    /// Index into the exercise list
    pub exercise_index: usize,
    /// Index of the set within the current exercise
    pub set_index: usize,
}

impl SetPosition {
    /// Create a position
    #[must_use]
    pub const fn new(exercise_index: usize, set_index: usize) -> Self {
        Self {
            exercise_index,
            set_index,
        }
    }

    /// Whether this position addresses an existing set of `exercises`
    #[must_use]
    pub fn is_valid_for(self, exercises: &[ExercisePlan]) -> bool {
        exercises
            .get(self.exercise_index)
            .is_some_and(|exercise| self.set_index < exercise.effective_sets() as usize)
    }
}

impl fmt::Display for SetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exercise_index, self.set_index)
    }
}

/// Outcome of the advance rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// More work remains at this position
    Next(SetPosition),
    /// The last set of the last exercise has been done
    Exhausted,
}

/// Next position after completing the set at `position`.
///
/// Total over any input: a position outside `exercises` reports exhaustion
/// rather than producing an out-of-range index.
#[must_use]
pub fn advance(position: SetPosition, exercises: &[ExercisePlan]) -> Advance {
    let Some(current) = exercises.get(position.exercise_index) else {
        return Advance::Exhausted;
    };

    if position.set_index + 1 < current.effective_sets() as usize {
        return Advance::Next(SetPosition::new(
            position.exercise_index,
            position.set_index + 1,
        ));
    }

    if position.exercise_index + 1 < exercises.len() {
        return Advance::Next(SetPosition::new(position.exercise_index + 1, 0));
    }

    Advance::Exhausted
}
