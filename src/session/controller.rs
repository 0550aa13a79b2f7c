// ABOUTME: Async session controller tying the workout state machine to its timer and store
// ABOUTME: Loads the plan, owns the rest timer, writes through edits, and finalizes completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use super::state::{SessionEvent, SessionSnapshot, WorkoutSession};
use super::timer::RestTimer;
use crate::store::WorkoutStore;
use crate::training_log;
use chrono::Utc;
use liftmate_core::config::SessionConfig;
use liftmate_core::errors::{PersistenceOperation, SessionError};
use liftmate_core::models::{CompletionRecord, ExercisePlan, WorkoutPlan};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Drives one guided workout session.
///
/// User actions are async methods; the rest countdown runs on a background
/// task owned through a [`RestTimer`]. Every transition, user- or
/// timer-driven, publishes a fresh [`SessionSnapshot`] to subscribers.
///
/// The session lock is never held across a store call, so the countdown keeps
/// running while a write is in flight. Dropping the controller stops the
/// timer and discards all in-memory state.
pub struct SessionController<S: WorkoutStore + ?Sized> {
    store: Arc<S>,
    session: Arc<Mutex<WorkoutSession>>,
    snapshots: watch::Sender<SessionSnapshot>,
    timer: Option<RestTimer>,
    config: SessionConfig,
    completion: Option<CompletionRecord>,
}

impl<S: WorkoutStore + ?Sized> SessionController<S> {
    /// Load `workout_id` and start a session at its first set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if the plan cannot be fetched. No session
    /// exists in that case.
    #[instrument(skip(store, config))]
    pub async fn start(
        store: Arc<S>,
        workout_id: Uuid,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let plan = store
            .load_workout_plan(workout_id)
            .await
            .map_err(|source| {
                warn!(error = %source, "Failed to load workout plan");
                SessionError::Load { workout_id, source }
            })?;

        info!(
            exercises = plan.exercises.len(),
            total_sets = plan.total_sets(),
            "Workout session started"
        );
        Ok(Self::from_plan(store, plan, config))
    }

    /// Start a session over an already loaded plan
    #[must_use]
    pub fn from_plan(store: Arc<S>, plan: WorkoutPlan, config: SessionConfig) -> Self {
        let session = WorkoutSession::new(plan, &config, Utc::now());
        let (snapshots, _) = watch::channel(session.snapshot());
        Self {
            store,
            session: Arc::new(Mutex::new(session)),
            snapshots,
            timer: None,
            config,
            completion: None,
        }
    }

    /// Receive a snapshot after every transition
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    /// Current state
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    /// Exercise list including weight edits made during the session
    pub async fn exercises(&self) -> Vec<ExercisePlan> {
        self.session.lock().await.exercises().to_vec()
    }

    /// Whether a rest countdown is currently running.
    ///
    /// False once the countdown has expired on its own, been skipped, or the
    /// session was finalized.
    #[must_use]
    pub fn has_rest_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(RestTimer::is_running)
    }

    /// Record written by `finalize`, once it has succeeded
    #[must_use]
    pub const fn completion(&self) -> Option<&CompletionRecord> {
        self.completion.as_ref()
    }

    /// Mark the current set done and start the rest countdown
    pub async fn complete_set(&mut self) -> SessionEvent {
        let mut session = self.session.lock().await;
        let event = session.complete_set();
        let generation = session.rest_generation();
        self.publish(&session);
        drop(session);

        if let SessionEvent::RestStarted { rest_secs, .. } = event {
            info!(rest_secs, generation, "Rest countdown started");
            // Any previous countdown has already expired or been skipped
            self.timer = Some(RestTimer::spawn(
                Arc::clone(&self.session),
                self.snapshots.clone(),
                generation,
                self.config.tick_interval,
            ));
        }
        event
    }

    /// End the current rest early
    pub async fn skip_rest(&mut self) -> SessionEvent {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }

        let mut session = self.session.lock().await;
        let event = session.skip_rest();
        self.publish(&session);
        drop(session);

        if !event.is_ignored() {
            info!(?event, "Rest skipped");
        }
        event
    }

    /// Pause or resume the rest countdown
    pub async fn toggle_pause(&self) -> SessionEvent {
        let mut session = self.session.lock().await;
        let event = session.toggle_pause();
        self.publish(&session);
        drop(session);
        event
    }

    /// Change the current exercise's weight and write it through to the store.
    ///
    /// The in-memory edit stands even when the write fails.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidWeight` for a rejected value, or
    /// `SessionError::Persistence` when the write-through fails.
    pub async fn edit_weight(&self, weight: Option<f64>) -> Result<SessionEvent, SessionError> {
        let mut session = self.session.lock().await;
        let event = session.edit_weight(weight)?;
        self.publish(&session);
        drop(session);

        if let SessionEvent::WeightEdited {
            exercise_id,
            weight,
        } = event
        {
            self.store
                .update_exercise_weight(exercise_id, weight)
                .await
                .map_err(|source| {
                    warn!(%exercise_id, error = %source, "Weight write-through failed");
                    SessionError::Persistence {
                        operation: PersistenceOperation::WeightUpdate,
                        source,
                    }
                })?;
        }
        Ok(event)
    }

    /// Replace the completion notes (only once the workout is complete)
    pub async fn set_notes(&self, notes: impl Into<String> + Send) -> SessionEvent {
        let mut session = self.session.lock().await;
        let event = session.set_notes(notes);
        self.publish(&session);
        drop(session);
        event
    }

    /// Persist the completion record and end the session.
    ///
    /// Returns `Ok(None)` when the workout is not complete yet. A successful
    /// finalize is remembered; calling again returns the same record without
    /// writing twice. The muscle-group log is written afterwards on a best
    /// effort basis.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Persistence` if the completion record could not
    /// be written. The session stays complete and finalize can be retried.
    pub async fn finalize(&mut self) -> Result<Option<CompletionRecord>, SessionError> {
        if let Some(record) = &self.completion {
            return Ok(Some(record.clone()));
        }

        let session = self.session.lock().await;
        let Some(record) = session.completion_record(Utc::now()) else {
            return Ok(None);
        };
        let exercises = session.exercises().to_vec();
        drop(session);

        self.store
            .record_completion(&record)
            .await
            .map_err(|source| {
                warn!(workout_id = %record.workout_id, error = %source, "Completion write failed");
                SessionError::Persistence {
                    operation: PersistenceOperation::Completion,
                    source,
                }
            })?;

        let entries =
            training_log::derive_entries(record.workout_id, &exercises, record.completed_at);
        if !entries.is_empty() {
            if let Err(e) = self.store.record_muscle_groups(&entries).await {
                warn!(
                    workout_id = %record.workout_id,
                    error = %e,
                    "Muscle group log write failed, continuing"
                );
            }
        }

        info!(
            workout_id = %record.workout_id,
            elapsed_minutes = record.elapsed_minutes,
            "Workout session finalized"
        );
        self.timer = None;
        self.completion = Some(record.clone());
        Ok(Some(record))
    }

    /// Abandon the session. Weight edits already written stay; nothing else is saved.
    pub fn cancel(mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        info!(finalized = self.completion.is_some(), "Workout session closed");
    }

    /// Publish while the session lock is held, so a timer tick can never
    /// overwrite a newer snapshot
    fn publish(&self, session: &WorkoutSession) {
        self.snapshots.send_replace(session.snapshot());
    }
}
