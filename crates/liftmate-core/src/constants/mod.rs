// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Session timing defaults, environment variable names, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Session timing defaults
pub mod session {
    /// Rest between sets when neither the exercise nor the workout specifies one
    pub const DEFAULT_REST_SECS: u32 = 60;

    /// Rest countdown tick period in milliseconds
    pub const REST_TICK_INTERVAL_MS: u64 = 1_000;

    /// Seconds per minute, used when rounding elapsed session time
    pub const SECONDS_PER_MINUTE: f64 = 60.0;

    /// Progress reported once the sequence is exhausted
    pub const PROGRESS_COMPLETE: f64 = 100.0;
}

/// Exercise media lookup defaults
pub mod media {
    /// Default number of exercise names kept in the media lookup cache
    pub const DEFAULT_MEDIA_CACHE_ENTRIES: usize = 64;
}

/// Database defaults
pub mod database {
    /// Database used when `DATABASE_URL` is not set
    pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

    /// Connection pool size for file-backed databases
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
}

/// Environment variable names
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter / level
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line in log output
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Fallback rest when a workout has no default
    pub const FALLBACK_REST_SECS: &str = "LIFTMATE_FALLBACK_REST_SECS";
    /// Rest countdown tick period
    pub const TICK_INTERVAL_MS: &str = "LIFTMATE_TICK_INTERVAL_MS";
    /// Media lookup cache capacity
    pub const MEDIA_CACHE_SIZE: &str = "LIFTMATE_MEDIA_CACHE_SIZE";
}

/// Service names used in structured logs
pub mod service_names {
    /// Interactive player binary
    pub const LIFTMATE_PLAYER: &str = "liftmate-player";
}
