// ABOUTME: Owned, cancellable rest countdown driving the session's tick transition
// ABOUTME: Dropping the handle stops the background task; stale ticks are discarded by generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use super::state::{SessionEvent, SessionSnapshot, WorkoutSession};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Handle to a running rest countdown.
///
/// The background task ticks the session once per period until the rest ends,
/// the handle is dropped, or the session's rest generation moves on. Holding
/// the handle is what keeps the countdown alive.
#[derive(Debug)]
pub struct RestTimer {
    generation: u64,
    task: JoinHandle<()>,
    _shutdown: oneshot::Sender<()>,
}

impl RestTimer {
    /// Start counting down the rest period identified by `generation`
    #[must_use]
    pub fn spawn(
        session: Arc<Mutex<WorkoutSession>>,
        snapshots: watch::Sender<SessionSnapshot>,
        generation: u64,
        period: Duration,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => {
                        debug!(generation, "Rest timer cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if !Self::on_tick(&session, &snapshots, generation).await {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            generation,
            task,
            _shutdown: shutdown_tx,
        }
    }

    /// Rest period this timer belongs to
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the countdown task is still running
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the countdown. Equivalent to dropping the handle.
    pub fn cancel(self) {
        debug!(generation = self.generation, "Cancelling rest timer");
    }

    /// Apply one tick; returns whether the countdown should keep running
    async fn on_tick(
        session: &Mutex<WorkoutSession>,
        snapshots: &watch::Sender<SessionSnapshot>,
        generation: u64,
    ) -> bool {
        let mut guard = session.lock().await;
        if guard.rest_generation() != generation || !guard.phase().is_resting() {
            debug!(generation, "Discarding tick for a finished rest period");
            return false;
        }

        let event = guard.tick();
        let still_resting = guard.phase().is_resting();
        // Published under the lock so snapshots reach subscribers in transition order
        snapshots.send_replace(guard.snapshot());
        drop(guard);

        match event {
            SessionEvent::Advanced { to, .. } => {
                info!(generation, position = %to, "Rest expired, next set ready");
            }
            SessionEvent::Completed => {
                info!(generation, "Rest expired, workout complete");
            }
            _ => {}
        }
        still_resting
    }
}
