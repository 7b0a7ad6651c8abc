//! Error types for sv-migrate

use sv_core::CoreError;
use sv_db::DbError;
use sv_template::TemplateError;
use thiserror::Error;

/// Migration run errors
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Recorded version newer than the target; fatal, never retried (M001)
    #[error("[M001] Database version \"{recorded}\" is newer than target version \"{target}\"")]
    VersionSkew { recorded: String, target: String },

    /// A statement failed inside the transaction; everything was rolled
    /// back (M002)
    #[error("[M002] Executing statement from \"{path}\" failed:\n\n{statement}\n\n{source}")]
    Execution {
        path: String,
        statement: String,
        #[source]
        source: DbError,
    },

    /// No procedure registered under this name (M003)
    #[error("[M003] Unknown procedure '{name}'")]
    UnknownProcedure { name: String },

    /// Configuration error (M004)
    #[error("[M004] Configuration error: {0}")]
    Core(#[from] CoreError),

    /// Template evaluation failed while loading sources (M005)
    #[error("[M005] Template error: {0}")]
    Template(#[from] TemplateError),

    /// Database error outside statement execution (M006)
    #[error("[M006] Database error: {0}")]
    Db(#[from] DbError),
}

/// Result type alias for MigrateError
pub type MigrateResult<T> = Result<T, MigrateError>;
