//! Error types for configuration edits.

use thiserror::Error;

use crate::field::ConfigField;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when an edit cannot be applied to a configuration.
///
/// None of these are fatal: the editor drops the edit and keeps the
/// previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An enumerated field received a token outside its catalog.
    #[error("Invalid value '{token}' for field '{field}'")]
    InvalidFieldValue { field: ConfigField, token: String },

    /// The field key is not part of the configuration.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The value has the wrong shape for the field.
    #[error("Field '{field}' expects {expected}")]
    TypeMismatch {
        field: ConfigField,
        expected: &'static str,
    },
}
