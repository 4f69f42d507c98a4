//! Session error types.

use thiserror::Error;

/// Errors surfaced by an editing session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Config error: {0}")]
    Config(#[from] tailor_core::ConfigError),

    #[error("Codegen error: {0}")]
    Codegen(#[from] tailor_codegen::CodegenError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
