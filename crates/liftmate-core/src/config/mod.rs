// ABOUTME: Session-level configuration shared by the controller and the CLI
// ABOUTME: Rest fallback, countdown tick period, and media cache capacity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use crate::constants::{media, session};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for a guided workout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Rest used when neither the exercise nor the workout sets one
    pub fallback_rest_secs: u32,
    /// Period of the rest countdown tick
    pub tick_interval: Duration,
    /// Capacity of the exercise media lookup cache
    pub media_cache_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback_rest_secs: session::DEFAULT_REST_SECS,
            tick_interval: Duration::from_millis(session::REST_TICK_INTERVAL_MS),
            media_cache_capacity: media::DEFAULT_MEDIA_CACHE_ENTRIES,
        }
    }
}

impl SessionConfig {
    /// Override the fallback rest
    #[must_use]
    pub const fn with_fallback_rest(mut self, secs: u32) -> Self {
        self.fallback_rest_secs = secs;
        self
    }

    /// Override the countdown tick period
    #[must_use]
    pub const fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Rest for an exercise: its own rest, else the workout default, else the fallback
    #[must_use]
    pub fn resolve_rest_secs(
        &self,
        exercise_rest: Option<u32>,
        workout_default: Option<u32>,
    ) -> u32 {
        exercise_rest
            .or(workout_default)
            .unwrap_or(self.fallback_rest_secs)
    }
}
