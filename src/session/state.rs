// ABOUTME: Pure in-memory state machine for a guided workout session
// ABOUTME: Sequences sets and exercises through Active, Resting, and Complete phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

//! # Workout Session State
//!
//! `WorkoutSession` holds the position, phase, and notes of one guided run
//! through a workout. Every transition is synchronous and infallible with
//! respect to its own invariants; operations invoked in the wrong phase are
//! reported as [`SessionEvent::Ignored`] and leave the state untouched.
//!
//! The session knows nothing about timers or storage. The controller drives
//! `tick` from its rest timer and forwards weight edits to the store.

use super::advance::{advance, Advance, SetPosition};
use super::progress::progress_percent;
use chrono::{DateTime, Utc};
use liftmate_core::config::SessionConfig;
use liftmate_core::constants::session::PROGRESS_COMPLETE;
use liftmate_core::errors::SessionError;
use liftmate_core::models::{is_valid_weight, CompletionRecord, ExercisePlan, WorkoutPlan};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Phase of a session. Rest bookkeeping only exists while resting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    /// Performing the current set
    Active,
    /// Counting down between sets
    Resting {
        /// Seconds left in the rest period
        remaining_secs: u32,
        /// Countdown suspended by the user
        paused: bool,
    },
    /// Sequence exhausted; only notes and finalize remain
    Complete,
}

impl SessionPhase {
    /// Currently performing a set
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Currently resting
    #[must_use]
    pub const fn is_resting(self) -> bool {
        matches!(self, Self::Resting { .. })
    }

    /// Sequence exhausted
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Short name for logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resting { .. } => "resting",
            Self::Complete => "complete",
        }
    }
}

/// Operations a caller can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Mark the current set done
    CompleteSet,
    /// One countdown second elapsed
    Tick,
    /// End the rest early
    SkipRest,
    /// Pause or resume the countdown
    TogglePause,
    /// Change the current exercise's weight
    EditWeight,
    /// Edit the completion notes
    SetNotes,
    /// Persist the completion record
    Finalize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CompleteSet => "complete_set",
            Self::Tick => "tick",
            Self::SkipRest => "skip_rest",
            Self::TogglePause => "toggle_pause",
            Self::EditWeight => "edit_weight",
            Self::SetNotes => "set_notes",
            Self::Finalize => "finalize",
        };
        f.write_str(name)
    }
}

/// What a transition did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A set was completed and a rest period began
    RestStarted {
        /// Set that was just completed
        completed: SetPosition,
        /// Length of the rest period
        rest_secs: u32,
    },
    /// The countdown decreased by one second
    RestTick {
        /// Seconds left
        remaining_secs: u32,
    },
    /// Rest ended and the next set is up
    Advanced {
        /// Position before the advance
        from: SetPosition,
        /// New current position
        to: SetPosition,
    },
    /// The last set is done
    Completed,
    /// The countdown was paused or resumed
    PauseToggled {
        /// New paused flag
        paused: bool,
        /// Seconds left (unchanged by the toggle)
        remaining_secs: u32,
    },
    /// The current exercise's weight changed in memory
    WeightEdited {
        /// Exercise record to write through
        exercise_id: Uuid,
        /// New weight
        weight: Option<f64>,
    },
    /// Completion notes changed
    NotesUpdated,
    /// Operation not defined in the current phase; nothing changed
    Ignored {
        /// Operation that was requested
        operation: Operation,
        /// Phase at the time of the request
        phase: SessionPhase,
    },
}

impl SessionEvent {
    /// Whether the transition changed nothing
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }
}

/// Observable view of a session, published after every transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Workout being played
    pub workout_id: Uuid,
    /// Current phase
    pub phase: SessionPhase,
    /// Current position
    pub position: SetPosition,
    /// Number of exercises in the plan
    pub exercise_count: usize,
    /// Name of the current exercise, absent once complete
    pub exercise_name: Option<String>,
    /// Set count of the current exercise
    pub sets_in_exercise: Option<u32>,
    /// Target reps of the current exercise
    pub reps: Option<u32>,
    /// Working weight of the current exercise
    pub weight: Option<f64>,
    /// Progress in percent
    pub progress_percent: f64,
    /// The plan had no exercises
    pub is_empty: bool,
}

/// One in-progress guided run through a workout
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    workout_id: Uuid,
    workout_name: String,
    exercises: Vec<ExercisePlan>,
    default_rest_secs: Option<u32>,
    config: SessionConfig,
    position: SetPosition,
    phase: SessionPhase,
    started_at: DateTime<Utc>,
    notes: String,
    rest_generation: u64,
}

impl WorkoutSession {
    /// Start a session over a loaded plan.
    ///
    /// An empty plan starts directly in `Complete` and reports `is_empty`.
    #[must_use]
    pub fn new(plan: WorkoutPlan, config: &SessionConfig, started_at: DateTime<Utc>) -> Self {
        let phase = if plan.exercises.is_empty() {
            SessionPhase::Complete
        } else {
            SessionPhase::Active
        };

        Self {
            workout_id: plan.workout_id,
            workout_name: plan.name,
            exercises: plan.exercises,
            default_rest_secs: plan.default_rest_secs,
            config: config.clone(),
            position: SetPosition::default(),
            phase,
            started_at,
            notes: String::new(),
            rest_generation: 0,
        }
    }

    /// Workout being played
    #[must_use]
    pub const fn workout_id(&self) -> Uuid {
        self.workout_id
    }

    /// Workout name
    #[must_use]
    pub fn workout_name(&self) -> &str {
        &self.workout_name
    }

    /// Exercise list, including in-session weight edits
    #[must_use]
    pub fn exercises(&self) -> &[ExercisePlan] {
        &self.exercises
    }

    /// Current position
    #[must_use]
    pub const fn position(&self) -> SetPosition {
        self.position
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The plan had no exercises
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// When the session started
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Completion notes typed so far
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Counter bumped each time a rest period begins.
    ///
    /// Timers capture it at spawn and must discard ticks once it has moved on.
    #[must_use]
    pub const fn rest_generation(&self) -> u64 {
        self.rest_generation
    }

    /// Exercise at the current position while work remains
    #[must_use]
    pub fn current_exercise(&self) -> Option<&ExercisePlan> {
        if self.phase.is_complete() {
            return None;
        }
        self.exercises.get(self.position.exercise_index)
    }

    /// Rest that follows a set of the current exercise
    #[must_use]
    pub fn current_rest_secs(&self) -> Option<u32> {
        self.current_exercise().map(|exercise| {
            self.config
                .resolve_rest_secs(exercise.rest_time_secs, self.default_rest_secs)
        })
    }

    /// Progress in percent; 100 once complete
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.phase.is_complete() {
            return PROGRESS_COMPLETE;
        }
        progress_percent(self.position, &self.exercises)
    }

    /// Mark the current set done and start resting.
    ///
    /// A zero-length rest advances immediately.
    pub fn complete_set(&mut self) -> SessionEvent {
        if !self.phase.is_active() {
            return self.ignored(Operation::CompleteSet);
        }
        let Some(rest_secs) = self.current_rest_secs() else {
            return self.ignored(Operation::CompleteSet);
        };

        if rest_secs == 0 {
            debug!(position = %self.position, "Zero rest configured, advancing immediately");
            return self.finish_rest();
        }

        self.rest_generation += 1;
        self.phase = SessionPhase::Resting {
            remaining_secs: rest_secs,
            paused: false,
        };
        debug!(
            workout_id = %self.workout_id,
            position = %self.position,
            rest_secs,
            generation = self.rest_generation,
            "Set completed, rest started"
        );
        SessionEvent::RestStarted {
            completed: self.position,
            rest_secs,
        }
    }

    /// One countdown second elapsed. Ignored while paused or not resting.
    pub fn tick(&mut self) -> SessionEvent {
        let SessionPhase::Resting {
            remaining_secs,
            paused,
        } = self.phase
        else {
            return self.ignored(Operation::Tick);
        };
        if paused {
            return self.ignored(Operation::Tick);
        }

        let remaining_secs = remaining_secs.saturating_sub(1);
        if remaining_secs == 0 {
            return self.finish_rest();
        }

        self.phase = SessionPhase::Resting {
            remaining_secs,
            paused,
        };
        SessionEvent::RestTick { remaining_secs }
    }

    /// End the rest now. Same outcome as letting the countdown reach zero.
    pub fn skip_rest(&mut self) -> SessionEvent {
        if !self.phase.is_resting() {
            return self.ignored(Operation::SkipRest);
        }
        self.finish_rest()
    }

    /// Pause or resume the countdown without touching the remaining time
    pub fn toggle_pause(&mut self) -> SessionEvent {
        let SessionPhase::Resting {
            remaining_secs,
            paused,
        } = self.phase
        else {
            return self.ignored(Operation::TogglePause);
        };

        let paused = !paused;
        self.phase = SessionPhase::Resting {
            remaining_secs,
            paused,
        };
        SessionEvent::PauseToggled {
            paused,
            remaining_secs,
        }
    }

    /// Change the current exercise's weight in memory.
    ///
    /// The returned event carries the exercise id for write-through. Outside
    /// `Active` the edit is ignored whatever the value.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidWeight` for negative or non-finite
    /// weights while `Active`; the state is left unchanged.
    pub fn edit_weight(&mut self, weight: Option<f64>) -> Result<SessionEvent, SessionError> {
        let index = self.position.exercise_index;
        if !self.phase.is_active() || index >= self.exercises.len() {
            return Ok(self.ignored(Operation::EditWeight));
        }
        if !is_valid_weight(weight) {
            return Err(SessionError::InvalidWeight {
                value: weight.unwrap_or(f64::NAN),
            });
        }

        let exercise = &mut self.exercises[index];
        exercise.weight = weight;
        Ok(SessionEvent::WeightEdited {
            exercise_id: exercise.id,
            weight,
        })
    }

    /// Replace the completion notes. Only allowed once complete.
    pub fn set_notes(&mut self, notes: impl Into<String>) -> SessionEvent {
        if !self.phase.is_complete() {
            return self.ignored(Operation::SetNotes);
        }
        self.notes = notes.into();
        SessionEvent::NotesUpdated
    }

    /// Completion record for a session finalized at `now`; `None` unless complete
    #[must_use]
    pub fn completion_record(&self, now: DateTime<Utc>) -> Option<CompletionRecord> {
        if !self.phase.is_complete() {
            debug!(phase = self.phase.name(), "Finalize requested before completion");
            return None;
        }
        Some(CompletionRecord::new(
            self.workout_id,
            self.started_at,
            now,
            self.notes.clone(),
        ))
    }

    /// Observable view of the current state
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let current = self.current_exercise();
        SessionSnapshot {
            workout_id: self.workout_id,
            phase: self.phase,
            position: self.position,
            exercise_count: self.exercises.len(),
            exercise_name: current.map(|exercise| exercise.name.clone()),
            sets_in_exercise: current.map(ExercisePlan::effective_sets),
            reps: current.map(|exercise| exercise.reps),
            weight: current.and_then(|exercise| exercise.weight),
            progress_percent: self.progress_percent(),
            is_empty: self.is_empty(),
        }
    }

    fn finish_rest(&mut self) -> SessionEvent {
        let from = self.position;
        match advance(from, &self.exercises) {
            Advance::Next(to) => {
                self.position = to;
                self.phase = SessionPhase::Active;
                debug!(workout_id = %self.workout_id, %from, %to, "Advanced to next set");
                SessionEvent::Advanced { from, to }
            }
            Advance::Exhausted => {
                self.phase = SessionPhase::Complete;
                debug!(workout_id = %self.workout_id, "Workout sequence exhausted");
                SessionEvent::Completed
            }
        }
    }

    fn ignored(&self, operation: Operation) -> SessionEvent {
        debug!(
            %operation,
            phase = self.phase.name(),
            "Operation not defined in current phase, ignoring"
        );
        SessionEvent::Ignored {
            operation,
            phase: self.phase,
        }
    }
}
