// ABOUTME: Guided workout session: advance rule, progress, state machine, timer, and controller
// ABOUTME: Re-exports the types presentation layers need to drive and observe a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

/// Pure advance rule and `SetPosition`
pub mod advance;

/// Async controller owning the timer and store
pub mod controller;

/// Two-level progress percentage
pub mod progress;

/// Pure session state machine
pub mod state;

/// Owned rest countdown
pub mod timer;

pub use advance::{advance, Advance, SetPosition};
pub use controller::SessionController;
pub use progress::progress_percent;
pub use state::{Operation, SessionEvent, SessionPhase, SessionSnapshot, WorkoutSession};
pub use timer::RestTimer;
