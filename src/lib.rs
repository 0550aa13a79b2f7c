// ABOUTME: Main library entry point for the LiftMate guided workout player
// ABOUTME: Sequences sets and rest periods, writes edits through, and records completions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

#![deny(unsafe_code)]

//! # LiftMate
//!
//! Guided playback of a strength workout: the user performs the sets of each
//! exercise in order, a rest countdown runs between sets, and the finished
//! session is stored as a completion record.
//!
//! ## Architecture
//!
//! - **Session**: pure state machine plus an async controller that owns the
//!   rest timer and talks to the store
//! - **Store**: persistence boundary, with in-memory and `SQLite` backends
//! - **Training log**: muscle-group totals derived from completed workouts
//! - **Media**: cached lookup of demonstration images and videos
//! - **Config / Logging**: environment-driven runtime setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftmate::session::SessionController;
//! use liftmate::store::InMemoryWorkoutStore;
//! use liftmate_core::config::SessionConfig;
//! use liftmate_core::models::{ExercisePlan, WorkoutPlan};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryWorkoutStore::new());
//!     let plan = WorkoutPlan::new("Push day")
//!         .with_default_rest(90)
//!         .with_exercise(ExercisePlan::new("Bench Press", 3, 8).with_weight(60.0));
//!     let workout_id = plan.workout_id;
//!     store.insert_workout(plan);
//!
//!     let mut session =
//!         SessionController::start(store, workout_id, SessionConfig::default()).await?;
//!     session.complete_set().await;
//!     println!("{:?}", session.snapshot().await);
//!     Ok(())
//! }
//! ```

/// Environment-driven runtime configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Exercise media lookup with caching
pub mod media;

/// Manual page-flip view over a workout's exercises
pub mod player;

/// Guided workout session state machine and controller
pub mod session;

/// Persistence boundary and backends
pub mod store;

/// Muscle-group training log derivation and summaries
pub mod training_log;

pub use liftmate_core::errors::{AppError, AppResult, ErrorCode};
