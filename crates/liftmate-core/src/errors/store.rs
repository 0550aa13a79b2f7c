// ABOUTME: Structured error types for workout store backends
// ABOUTME: Distinguishes missing records, unavailable backends, and database/serialization faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use super::ErrorCode;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by a workout store backend
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The requested record does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of record (workout, exercise)
        entity: &'static str,
        /// Identifier that was looked up
        id: Uuid,
    },

    /// The backend could not be reached or refused the operation
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Backend-specific reason
        reason: String,
    },

    /// A query failed
    #[error("database error: {context}")]
    Database {
        /// Description of the failing operation
        context: String,
    },

    /// Stored data could not be decoded into a domain type
    #[error("corrupt record in {table}: {details}")]
    CorruptRecord {
        /// Table the row came from
        table: &'static str,
        /// What failed to decode
        details: String,
    },
}

impl StoreError {
    /// Create a "not found" error
    #[must_use]
    pub const fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create an "unavailable" error
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Create a database error
    #[must_use]
    pub fn database(context: impl Into<String>) -> Self {
        Self::Database {
            context: context.into(),
        }
    }

    /// Create a corrupt-record error
    #[must_use]
    pub fn corrupt(table: &'static str, details: impl Into<String>) -> Self {
        Self::CorruptRecord {
            table,
            details: details.into(),
        }
    }

    /// Error code used when this error crosses the application boundary
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::ResourceNotFound,
            Self::Unavailable { .. } => ErrorCode::ResourceUnavailable,
            Self::Database { .. } => ErrorCode::DatabaseError,
            Self::CorruptRecord { .. } => ErrorCode::SerializationError,
        }
    }
}
