// ABOUTME: Core types and constants for the LiftMate guided workout player
// ABOUTME: Foundation crate with error handling, workout models, and session configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

#![deny(unsafe_code)]

//! # LiftMate Core
//!
//! Foundation crate providing shared types and constants for the LiftMate
//! workout player. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the store/session error enums
//! - **constants**: Session timing defaults and environment variable names
//! - **models**: Workout plans, completion records, muscle groups
//! - **config**: Session tunables

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutPlan`, `ExercisePlan`, `CompletionRecord`, `MuscleGroup`)
pub mod models;

/// Session configuration (rest fallback, tick period)
pub mod config;
