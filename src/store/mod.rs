// ABOUTME: Workout store abstraction consumed by the session controller
// ABOUTME: Narrow async contract for plan loading, weight write-through, and completion records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

//! # Workout Store
//!
//! The controller never touches a database directly. It reads a plan once at
//! session start and writes through weight edits and the final completion
//! record via [`WorkoutStore`]. Two backends ship with the crate:
//!
//! - [`memory::InMemoryWorkoutStore`] for tests and ad-hoc plans
//! - [`sqlite::SqliteWorkoutStore`] for durable local storage

/// `DashMap`-backed store with failure injection
pub mod memory;

/// `SQLite` store on an `sqlx` pool
pub mod sqlite;

pub use memory::{FailurePoint, InMemoryWorkoutStore};
pub use sqlite::SqliteWorkoutStore;

use async_trait::async_trait;
use liftmate_core::errors::StoreError;
use liftmate_core::models::{CompletionRecord, MuscleGroupEntry, WorkoutPlan};
use uuid::Uuid;

/// Backing data store for guided workout sessions
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Load a workout's ordered exercises and default rest
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for unknown workouts, or a backend error
    async fn load_workout_plan(&self, workout_id: Uuid) -> Result<WorkoutPlan, StoreError>;

    /// Persist a new working weight for an exercise record
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise is unknown or the write fails
    async fn update_exercise_weight(
        &self,
        exercise_id: Uuid,
        weight: Option<f64>,
    ) -> Result<(), StoreError>;

    /// Create one durable completion record
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    async fn record_completion(&self, record: &CompletionRecord) -> Result<(), StoreError>;

    /// Append muscle-group training log entries
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    async fn record_muscle_groups(&self, entries: &[MuscleGroupEntry]) -> Result<(), StoreError>;
}
