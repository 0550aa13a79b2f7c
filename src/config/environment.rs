// ABOUTME: Environment configuration for the workout player binary
// ABOUTME: Parses deployment mode, database URL, and session tunables from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

//! Environment-based configuration

use liftmate_core::config::SessionConfig;
use liftmate_core::constants::{database, env_config, media, session};
use liftmate_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Runtime configuration of the player binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Database connection string
    pub database_url: String,
    /// Session tunables
    pub session: SessionConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database_url: database::DEFAULT_DATABASE_URL.to_owned(),
            session: SessionConfig::default(),
        }
    }
}

impl PlayerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a numeric variable does not parse or
    /// a value that must be positive is zero.
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_str_or_default(&env_var_or(
            env_config::ENVIRONMENT,
            "development",
        ));
        let database_url = env_var_or(env_config::DATABASE_URL, database::DEFAULT_DATABASE_URL);

        let fallback_rest_secs =
            parse_env_or(env_config::FALLBACK_REST_SECS, session::DEFAULT_REST_SECS)?;
        let tick_interval_ms =
            parse_env_or(env_config::TICK_INTERVAL_MS, session::REST_TICK_INTERVAL_MS)?;
        let media_cache_capacity = parse_env_or(
            env_config::MEDIA_CACHE_SIZE,
            media::DEFAULT_MEDIA_CACHE_ENTRIES,
        )?;

        if tick_interval_ms == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::TICK_INTERVAL_MS
            )));
        }
        if media_cache_capacity == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::MEDIA_CACHE_SIZE
            )));
        }

        let config = Self {
            environment,
            database_url,
            session: SessionConfig {
                fallback_rest_secs,
                tick_interval: Duration::from_millis(tick_interval_ms),
                media_cache_capacity,
            },
        };
        config.log_summary();
        Ok(config)
    }

    /// Same configuration pointed at another database
    #[must_use]
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }

    fn log_summary(&self) {
        info!(
            environment = %self.environment,
            database_url = %self.database_url,
            fallback_rest_secs = self.session.fallback_rest_secs,
            tick_interval_ms = self.session.tick_interval.as_millis(),
            media_cache_capacity = self.session.media_cache_capacity,
            "Player configuration loaded"
        );
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::config_invalid(format!("{key} has an invalid value: {raw:?}"))
        }),
        Err(_) => Ok(default),
    }
}
