// ABOUTME: Tests for environment-driven player configuration
// ABOUTME: Validates defaults, overrides, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftmate::config::{Environment, PlayerConfig};
use liftmate_core::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: [&str; 5] = [
    "ENVIRONMENT",
    "DATABASE_URL",
    "LIFTMATE_FALLBACK_REST_SECS",
    "LIFTMATE_TICK_INTERVAL_MS",
    "LIFTMATE_MEDIA_CACHE_SIZE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = PlayerConfig::from_env().unwrap();

    assert_eq!(config, PlayerConfig::default());
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.session.fallback_rest_secs, 60);
    assert_eq!(config.session.tick_interval, Duration::from_secs(1));
    assert_eq!(config.session.media_cache_capacity, 64);
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("DATABASE_URL", "sqlite:./workouts.db");
    env::set_var("LIFTMATE_FALLBACK_REST_SECS", "90");
    env::set_var("LIFTMATE_TICK_INTERVAL_MS", "250");
    env::set_var("LIFTMATE_MEDIA_CACHE_SIZE", " 8 ");

    let config = PlayerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.database_url, "sqlite:./workouts.db");
    assert_eq!(config.session.fallback_rest_secs, 90);
    assert_eq!(config.session.tick_interval, Duration::from_millis(250));
    assert_eq!(config.session.media_cache_capacity, 8);
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("LIFTMATE_FALLBACK_REST_SECS", "soon"),
        ("LIFTMATE_FALLBACK_REST_SECS", "-5"),
        ("LIFTMATE_TICK_INTERVAL_MS", "0"),
        ("LIFTMATE_MEDIA_CACHE_SIZE", "0"),
    ];
    for (var, value) in cases {
        clear_env();
        env::set_var(var, value);
        let error = PlayerConfig::from_env().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{var}={value}");
        assert!(error.message.contains(var));
    }
    clear_env();
}

#[test]
fn test_database_url_override() {
    let config = PlayerConfig::default().with_database_url("sqlite:other.db");
    assert_eq!(config.database_url, "sqlite:other.db");
}
