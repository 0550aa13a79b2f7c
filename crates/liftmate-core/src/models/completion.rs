// ABOUTME: Completion record written when a guided workout session is finalized
// ABOUTME: Captures elapsed minutes and the user's free-text notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use crate::constants::session::SECONDS_PER_MINUTE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Durable record of one finished workout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Record identifier
    pub id: Uuid,
    /// Workout that was completed
    pub workout_id: Uuid,
    /// Session duration rounded to the nearest minute
    pub elapsed_minutes: u32,
    /// Notes typed by the user after the last set
    pub notes: String,
    /// When the session was finalized
    pub completed_at: DateTime<Utc>,
}

impl CompletionRecord {
    /// Build a record for a session that started at `started_at` and ends at `completed_at`
    #[must_use]
    pub fn new(
        workout_id: Uuid,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_id,
            elapsed_minutes: elapsed_minutes(started_at, completed_at),
            notes: notes.into(),
            completed_at,
        }
    }
}

/// `round((end - start) / 60s)`, clamped at zero when the clock went backwards
#[must_use]
pub fn elapsed_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let seconds = (end - start).num_milliseconds() as f64 / 1_000.0;
    if seconds <= 0.0 {
        return 0;
    }
    (seconds / SECONDS_PER_MINUTE).round() as u32
}
