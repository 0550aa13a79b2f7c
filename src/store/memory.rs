// ABOUTME: In-memory workout store backed by DashMap with switchable failure injection
// ABOUTME: Used by tests and by the CLI when a plan is played without a database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use super::WorkoutStore;
use async_trait::async_trait;
use dashmap::DashMap;
use liftmate_core::errors::StoreError;
use liftmate_core::models::{CompletionRecord, MuscleGroupEntry, WorkoutPlan};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Operations whose failure can be simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    /// `load_workout_plan`
    Load,
    /// `update_exercise_weight`
    WeightUpdate,
    /// `record_completion`
    Completion,
    /// `record_muscle_groups`
    MuscleLog,
}

#[derive(Debug, Default)]
struct FailureSwitches {
    load: AtomicBool,
    weight_update: AtomicBool,
    completion: AtomicBool,
    muscle_log: AtomicBool,
}

impl FailureSwitches {
    const fn switch(&self, point: FailurePoint) -> &AtomicBool {
        match point {
            FailurePoint::Load => &self.load,
            FailurePoint::WeightUpdate => &self.weight_update,
            FailurePoint::Completion => &self.completion,
            FailurePoint::MuscleLog => &self.muscle_log,
        }
    }

    fn check(&self, point: FailurePoint) -> Result<(), StoreError> {
        if self.switch(point).load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(format!(
                "simulated {point:?} failure"
            )));
        }
        Ok(())
    }
}

/// Thread-safe in-memory store.
///
/// Exercises are stored by id so weight write-through can address them
/// independently of their workout, like the relational backend does.
#[derive(Debug, Default)]
pub struct InMemoryWorkoutStore {
    workouts: DashMap<Uuid, WorkoutPlan>,
    exercise_owner: DashMap<Uuid, Uuid>,
    completions: RwLock<Vec<CompletionRecord>>,
    muscle_log: RwLock<Vec<MuscleGroupEntry>>,
    failures: FailureSwitches,
}

impl InMemoryWorkoutStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a workout plan
    pub fn insert_workout(&self, plan: WorkoutPlan) {
        for exercise in &plan.exercises {
            self.exercise_owner.insert(exercise.id, plan.workout_id);
        }
        self.workouts.insert(plan.workout_id, plan);
    }

    /// Make subsequent calls to `point` fail (or succeed again)
    pub fn set_failure(&self, point: FailurePoint, fail: bool) {
        self.failures.switch(point).store(fail, Ordering::SeqCst);
    }

    /// Persisted weight of an exercise, if the exercise exists
    #[must_use]
    pub fn exercise_weight(&self, exercise_id: Uuid) -> Option<Option<f64>> {
        let workout_id = *self.exercise_owner.get(&exercise_id)?;
        let plan = self.workouts.get(&workout_id)?;
        let weight = plan
            .exercises
            .iter()
            .find(|exercise| exercise.id == exercise_id)
            .map(|exercise| exercise.weight);
        weight
    }

    /// All completion records written so far
    pub async fn completions(&self) -> Vec<CompletionRecord> {
        self.completions.read().await.clone()
    }

    /// All muscle-group log entries written so far
    pub async fn muscle_log(&self) -> Vec<MuscleGroupEntry> {
        self.muscle_log.read().await.clone()
    }
}

#[async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn load_workout_plan(&self, workout_id: Uuid) -> Result<WorkoutPlan, StoreError> {
        self.failures.check(FailurePoint::Load)?;
        self.workouts
            .get(&workout_id)
            .map(|plan| plan.clone())
            .ok_or_else(|| StoreError::not_found("workout", workout_id))
    }

    async fn update_exercise_weight(
        &self,
        exercise_id: Uuid,
        weight: Option<f64>,
    ) -> Result<(), StoreError> {
        self.failures.check(FailurePoint::WeightUpdate)?;
        let workout_id = self
            .exercise_owner
            .get(&exercise_id)
            .map(|owner| *owner)
            .ok_or_else(|| StoreError::not_found("exercise", exercise_id))?;

        let mut plan = self
            .workouts
            .get_mut(&workout_id)
            .ok_or_else(|| StoreError::not_found("workout", workout_id))?;
        let exercise = plan
            .exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
            .ok_or_else(|| StoreError::not_found("exercise", exercise_id))?;
        exercise.weight = weight;
        Ok(())
    }

    async fn record_completion(&self, record: &CompletionRecord) -> Result<(), StoreError> {
        self.failures.check(FailurePoint::Completion)?;
        self.completions.write().await.push(record.clone());
        Ok(())
    }

    async fn record_muscle_groups(&self, entries: &[MuscleGroupEntry]) -> Result<(), StoreError> {
        self.failures.check(FailurePoint::MuscleLog)?;
        self.muscle_log.write().await.extend_from_slice(entries);
        Ok(())
    }
}
