// ABOUTME: Shared fixtures for workout player integration tests
// ABOUTME: Builds representative workout plans and session configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

#![allow(dead_code, missing_docs)]

use liftmate_core::config::SessionConfig;
use liftmate_core::models::{ExercisePlan, WorkoutPlan};
use std::time::Duration;

/// Two exercises with sets [2, 1] and a 60 second default rest
pub fn two_exercise_plan() -> WorkoutPlan {
    WorkoutPlan::new("Upper body")
        .with_default_rest(60)
        .with_exercise(ExercisePlan::new("Bench Press", 2, 8).with_weight(60.0))
        .with_exercise(ExercisePlan::new("Pull Up", 1, 10))
}

/// Plan with the given set counts and no rest overrides
pub fn plan_with_sets(sets: &[u32]) -> WorkoutPlan {
    sets.iter()
        .enumerate()
        .fold(WorkoutPlan::new("Generated"), |plan, (i, count)| {
            plan.with_exercise(ExercisePlan::new(format!("Exercise {i}"), *count, 5))
        })
}

/// Default session configuration with a one second tick
pub fn config() -> SessionConfig {
    SessionConfig::default().with_tick_interval(Duration::from_secs(1))
}
