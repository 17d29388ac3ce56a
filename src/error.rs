//! Error types for json2go
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for json2go
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode input: {message}")]
    Decode { message: String },

    // ============================================================================
    // Shape Errors
    // ============================================================================
    #[error("Unexpected document shape: expected {expected}, got {found}")]
    Shape { expected: String, found: String },

    #[error("Cannot infer a type from an empty list ({context})")]
    EmptyList { context: String },

    #[error("Lists of lists are not supported (key '{key}')")]
    NestedList { key: String },

    // ============================================================================
    // Naming Errors
    // ============================================================================
    #[error("Key '{key}' does not produce an identifier")]
    EmptyIdentifier { key: String },

    #[error("Key '{key}' produces '{name}', which is not an exported Go identifier")]
    InvalidIdentifier { key: String, name: String },

    #[error("Key '{key}' produces field '{name}', already used in struct {record}")]
    DuplicateField {
        record: String,
        key: String,
        name: String,
    },

    #[error("Type '{name}' is declared more than once")]
    DuplicateRecord { name: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a shape error
    pub fn shape(expected: impl Into<String>, found: impl std::fmt::Display) -> Self {
        Self::Shape {
            expected: expected.into(),
            found: found.to_string(),
        }
    }

    /// Create an empty list error
    pub fn empty_list(context: impl Into<String>) -> Self {
        Self::EmptyList {
            context: context.into(),
        }
    }

    /// Check if this error was raised before any input was looked at
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::MissingConfigField { .. } | Error::InvalidConfigValue { .. }
        )
    }

    /// Check if this error comes from the sample not matching the requested shape
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Error::Shape { .. }
                | Error::EmptyList { .. }
                | Error::NestedList { .. }
                | Error::EmptyIdentifier { .. }
                | Error::InvalidIdentifier { .. }
                | Error::DuplicateField { .. }
                | Error::DuplicateRecord { .. }
        )
    }
}

/// Result type alias for json2go
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
