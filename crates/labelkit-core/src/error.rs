//! Error handling for LabelKit
//!
//! Provides the error types used across the workspace:
//! - Document errors (lookups against the object collection and selection)
//! - Configuration errors (validation and file formats)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::ids::ObjectId;

/// Document error type
///
/// Most document operations degrade to silent no-ops when their target is
/// missing. These variants cover the lookups that must report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A selected object was requested but nothing is selected
    #[error("No selected object found")]
    SelectionNotFound,

    /// The object is not (or no longer) part of the document
    #[error("Object {id} not found in document")]
    ObjectNotFound {
        /// The identifier that was looked up.
        id: ObjectId,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value failed validation
    #[error("Invalid setting '{key}': {reason}")]
    Invalid {
        /// The offending key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The configuration file extension is not one we can read
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A length string could not be parsed
    #[error("Invalid length '{input}': {reason}")]
    InvalidLength {
        /// The text that was parsed.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A unit suffix is not one we know
    #[error("Unknown units: {0}")]
    UnknownUnits(String),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::Invalid`].
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for LabelKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a "not found" lookup failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Document(DocumentError::SelectionNotFound)
                | Error::Document(DocumentError::ObjectNotFound { .. })
        )
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
