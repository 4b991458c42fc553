//! Error types for siteconf.
//!
//! This module defines all error types used throughout the siteconf crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for siteconf operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// An explicitly requested site file does not exist.
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The site file has an extension we cannot read.
    #[error("unsupported configuration format for {path} (expected .toml or .json)")]
    UnsupportedFormat {
        /// Path with the unrecognized extension.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// A URL in the configuration could not be parsed or joined.
    #[error("invalid URL '{input}': {source}")]
    Url {
        /// The text that failed to parse.
        input: String,
        /// The underlying error.
        #[source]
        source: url::ParseError,
    },

    // === I/O Errors ===
    /// Failed to write an exported configuration.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path that couldn't be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization failed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// A specialized Result type for siteconf operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a new URL error.
    #[must_use]
    pub fn url(input: impl Into<String>, source: url::ParseError) -> Self {
        Self::Url {
            input: input.into(),
            source,
        }
    }

    /// Check if this error came from schema validation.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::ConfigValidation { .. })
    }

    /// Check if this error means the site file is missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }
}
