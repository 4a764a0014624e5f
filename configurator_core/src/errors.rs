//! # Error Types
//!
//! Structured error types for configurator_core.
//!
//! The calculation pipeline itself (geometry, validation, BOM, pricing) never
//! fails: a configuration that breaks the rules is reported through
//! [`ValidationResult`](crate::validation::ValidationResult), not through an
//! error. `EngineError` only covers the edges where text comes in: parsing
//! product codes, country codes, JSON documents and snapshot versions.
//!
//! ## Example
//!
//! ```rust
//! use configurator_core::errors::{EngineError, EngineResult};
//!
//! fn parse_spacing(raw: &str) -> EngineResult<u32> {
//!     raw.parse().map_err(|_| EngineError::invalid_input(
//!         "rafter_spacing",
//!         raw,
//!         "Spacing must be a whole number of millimeters",
//!     ))
//! }
//!
//! assert!(parse_spacing("600").is_ok());
//! assert_eq!(parse_spacing("abc").unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for configurator_core operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Structured error type for the fallible edges of the engine.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EngineError {
    /// An input value could not be interpreted
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Product or product-variant code is not known
    #[error("Unknown product: {code}")]
    UnknownProduct { code: String },

    /// Country code is not one of the supported markets
    #[error("Unknown country: {code} (supported: NL, DE, BE)")]
    UnknownCountry { code: String },

    /// No preset with this name exists
    #[error("Preset not found: {name}")]
    PresetNotFound { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Stored snapshot was written by an incompatible schema
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl EngineError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownProduct error
    pub fn unknown_product(code: impl Into<String>) -> Self {
        EngineError::UnknownProduct { code: code.into() }
    }

    /// Create an UnknownCountry error
    pub fn unknown_country(code: impl Into<String>) -> Self {
        EngineError::UnknownCountry { code: code.into() }
    }

    /// Create a PresetNotFound error
    pub fn preset_not_found(name: impl Into<String>) -> Self {
        EngineError::PresetNotFound { name: name.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        EngineError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::InvalidInput { .. } => "INVALID_INPUT",
            EngineError::UnknownProduct { .. } => "UNKNOWN_PRODUCT",
            EngineError::UnknownCountry { .. } => "UNKNOWN_COUNTRY",
            EngineError::PresetNotFound { .. } => "PRESET_NOT_FOUND",
            EngineError::SerializationError { .. } => "SERIALIZATION_ERROR",
            EngineError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::serialization(err.to_string())
    }
}
