// ABOUTME: Configuration module for the workout player
// ABOUTME: Environment-driven runtime configuration for storage and session timing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

/// Environment variable parsing and `PlayerConfig`
pub mod environment;

pub use environment::{Environment, PlayerConfig};
