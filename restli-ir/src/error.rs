//! Error types for translation and configuration.
//!
//! Every translation error is fatal: the run stops at the first one and no
//! partial result is returned.

use std::fmt;
use std::path::PathBuf;

use restli_schema::{DecodeError, SchemaType};
use thiserror::Error;

/// Result type alias for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Main error type for translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A reachable model has no source location; the resolver is inconsistent.
    #[error("Could not resolve original location for {name}")]
    UnresolvableLocation { name: String },

    /// A schema the translator cannot express.
    #[error("Unsupported or malformed schema: {0}")]
    Unsupported(#[from] UnsupportedSchema),
}

/// Reasons a schema is unsupported or malformed.
#[derive(Debug, Error)]
pub enum UnsupportedSchema {
    /// A schema kind with no IR counterpart reached the translator.
    #[error("Unknown type: {kind}")]
    UnknownType { kind: SchemaType },

    /// A union appeared without an enclosing record or typeref.
    #[error("Raw unions not supported outside of records or typerefs")]
    RawUnion,

    /// A complex key's key or params type is not a record.
    #[error("Complex key \"{role}\" must be a record type")]
    ComplexKeyNotRecord { role: KeyRole },

    /// An inline type expression could not be decoded.
    #[error("Failed to decode inline type: {0}")]
    InlineType(#[from] DecodeError),

    /// The resolver knows a location for a model but not its definition.
    #[error("No schema definition for {name}")]
    MissingSchema { name: String },
}

/// Which half of a complex key failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Key,
    Params,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => f.write_str("key"),
            Self::Params => f.write_str("params"),
        }
    }
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}
