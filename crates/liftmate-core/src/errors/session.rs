// ABOUTME: Error types reported by the workout session controller
// ABOUTME: Load failures are fatal to session start, persistence failures are non-fatal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use super::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Which write-through operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceOperation {
    /// Exercise weight edit
    WeightUpdate,
    /// Final completion record
    Completion,
}

impl fmt::Display for PersistenceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightUpdate => f.write_str("weight update"),
            Self::Completion => f.write_str("completion record"),
        }
    }
}

/// Errors surfaced to the caller of the session controller.
///
/// None of these leave the in-memory session in an inconsistent state.
/// Out-of-phase operations are not errors; they are reported as ignored events.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The exercise plan could not be fetched; no session was created
    #[error("failed to load workout {workout_id}: {source}")]
    Load {
        /// Workout that was requested
        workout_id: Uuid,
        /// Underlying store failure
        #[source]
        source: StoreError,
    },

    /// A write-through failed. In-memory state is kept; the caller may retry.
    #[error("failed to persist {operation}: {source}")]
    Persistence {
        /// Operation that failed
        operation: PersistenceOperation,
        /// Underlying store failure
        #[source]
        source: StoreError,
    },

    /// Weight must be a finite, non-negative number
    #[error("invalid weight {value}: must be a finite non-negative number")]
    InvalidWeight {
        /// Rejected value
        value: f64,
    },
}

impl SessionError {
    /// Whether the session can keep running after this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Load { .. })
    }
}
