// ABOUTME: Core data models for workouts, exercises, completions, and muscle groups
// ABOUTME: Plain serde types shared by the session controller and the store backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

/// Workout and exercise plans loaded at session start
pub mod exercise;

/// Completion records written when a session is finalized
pub mod completion;

/// Muscle group taxonomy and training log entries
pub mod muscle;

pub use completion::CompletionRecord;
pub use exercise::{is_valid_weight, ExercisePlan, WorkoutPlan};
pub use muscle::{MuscleGroup, MuscleGroupEntry};
