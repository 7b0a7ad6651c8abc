//! Error types for sv-core

use thiserror::Error;

/// Core error type for Schemaver
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Target schema not configured
    #[error("[E001] Environment variable \"{name}\" is not set")]
    SchemaNotSet { name: String },

    /// E002: Project version is not a valid semantic version
    #[error("[E002] Invalid project version '{version}': {message}")]
    InvalidProjectVersion { version: String, message: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
