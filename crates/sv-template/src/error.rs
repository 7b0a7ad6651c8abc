//! Error types for sv-template

use thiserror::Error;

/// Template evaluation errors
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Expression span never closed (T001)
    #[error("[T001] Invalid template expression: missing {count} '}}'")]
    MissingClosers { count: usize },

    /// Unrecognized trailing fragment (T002)
    #[error("[T002] Invalid template expression: unknown fragment '{fragment}'")]
    UnterminatedExpression { fragment: String },

    /// Expression failed to compile or evaluate (T003)
    #[error("[T003] Template expression '${{{expression}}}' failed: {message}")]
    Evaluation { expression: String, message: String },
}

/// Result type alias for TemplateError
pub type TemplateResult<T> = Result<T, TemplateError>;
