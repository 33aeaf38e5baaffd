//! Error handling module.
//!
//! This module provides the crate-wide error type and helpers for rendering
//! errors as short, human-readable strings.

pub mod format;

use crate::snowflake::Snowflake;

pub use format::{error_type_name, to_error_string};

/// Crate-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON serialization or parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snowflake timestamp cannot be represented as a datetime.
    #[error("Snowflake timestamp out of range: {0}")]
    TimestampOutOfRange(Snowflake),

    /// An entity was asked for id-derived data before its id was stored.
    #[error("Snowflake ID has not been assigned")]
    UnsetId,

    /// A raw payload could not be absorbed into an entity.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl Error {
    /// Build an [`Error::InvalidPayload`] for a field that is missing or has
    /// the wrong shape.
    pub fn invalid_field(field: &str, expected: &str) -> Self {
        Self::InvalidPayload(format!("field '{field}' must be {expected}"))
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
