//! sv-migrate - Transactional migration executor for Schemaver
//!
//! Orchestrates one migration run: evaluate templates in the injected SQL
//! sources, split them into version buckets, resolve the applicable range
//! against the recorded schema version, and apply everything inside a
//! single transaction, recording the new version before commit. Also
//! provides the procedure registry that binds named SQL or native
//! procedures to a connection.

pub mod error;
pub mod executor;
pub mod procedures;
pub mod report;

pub use error::{MigrateError, MigrateResult};
pub use executor::Migrator;
pub use procedures::{
    BoundProcedures, NativeHandler, Procedure, ProcedureFuture, ProcedureRegistry,
};
pub use report::MigrationReport;
