//! Error types and utilities for playgraph

use thiserror::Error;

/// Result type alias for playgraph operations
pub type Result<T> = std::result::Result<T, PlayGraphError>;

/// Main error type for playgraph operations
#[derive(Error, Debug)]
pub enum PlayGraphError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for caller input or configuration
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// A requested week range cannot be satisfied
    #[error("Invalid range: {message}")]
    InvalidRange { message: String },

    /// Observations are not strictly ascending by week index
    #[error("Unsorted input: {message}")]
    UnsortedInput {
        message: String,
        /// Index of the offending observation
        position: Option<usize>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PlayGraphError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new invalid range error
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: msg.into(),
        }
    }

    /// Create a new unsorted input error
    pub fn unsorted_input(msg: impl Into<String>) -> Self {
        Self::UnsortedInput {
            message: msg.into(),
            position: None,
        }
    }

    /// Create a new unsorted input error pointing at an observation index
    pub fn unsorted_input_at(msg: impl Into<String>, position: usize) -> Self {
        Self::UnsortedInput {
            message: msg.into(),
            position: Some(position),
        }
    }
}

/// Convert from toml::de::Error to PlayGraphError
impl From<toml::de::Error> for PlayGraphError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}
