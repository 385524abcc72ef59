//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Error encoding a document field for storage.
    #[error("Document encoding error: {0}")]
    EncodingError(#[from] serde_json::Error),
}

/// Errors surfaced to the caller of the report creation service.
///
/// The taxonomy mirrors the callable interface: `InvalidArgument` is always a
/// caller bug and names the first offending field; `Unauthenticated` means no
/// caller identity was presented; `Internal` is a transient storage-class
/// failure. Internal display text stays generic so storage details never leak
/// to clients; the full cause is retained as the error source for logs.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The payload failed validation. Fail-fast: reports the first bad field.
    #[error("invalid-argument: {field}: {reason}")]
    InvalidArgument {
        /// Wire name of the first field that failed validation.
        field: &'static str,
        /// Human-readable reason the field was rejected.
        reason: String,
    },

    /// No caller identity was presented.
    #[error("unauthenticated: you must be authenticated to submit a report")]
    Unauthenticated,

    /// Storage or encoding failure. Safe for the caller to retry with a fresh
    /// submission; the full pipeline (including jitter) runs again.
    #[error("internal: the report could not be saved")]
    Internal(#[source] anyhow::Error),
}

impl ReportError {
    /// Convenience constructor for validation failures.
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        ReportError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

impl From<DatabaseError> for ReportError {
    fn from(e: DatabaseError) -> Self {
        ReportError::Internal(e.into())
    }
}

/// Categories of failures tracked by the service statistics counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Missing or out-of-range coordinates.
    InvalidCoordinates,
    /// Missing, empty, or unknown tactic codes.
    InvalidTactics,
    /// An optional enum field carried a code outside its closed set.
    InvalidEnumField,
    /// Malformed `sourceOfInfoUrl`.
    InvalidSourceUrl,
    /// Malformed `dateOfRaid`.
    InvalidDate,
    /// Request arrived without a caller identity.
    Unauthenticated,
    /// A jittered coordinate could not be geohashed.
    GeohashError,
    /// The document could not be written to storage.
    PersistenceError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidCoordinates => "Invalid coordinates",
            ErrorType::InvalidTactics => "Invalid tactics",
            ErrorType::InvalidEnumField => "Invalid enum field",
            ErrorType::InvalidSourceUrl => "Invalid source URL",
            ErrorType::InvalidDate => "Invalid date",
            ErrorType::Unauthenticated => "Unauthenticated",
            ErrorType::GeohashError => "Geohash encoding error",
            ErrorType::PersistenceError => "Persistence error",
        }
    }

    /// Whether this failure class counts as a payload validation rejection.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorType::InvalidCoordinates
                | ErrorType::InvalidTactics
                | ErrorType::InvalidEnumField
                | ErrorType::InvalidSourceUrl
                | ErrorType::InvalidDate
        )
    }
}
