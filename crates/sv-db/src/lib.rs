//! sv-db - Database abstraction layer for Schemaver
//!
//! This crate provides the `Database` trait the migration executor runs
//! against, a Postgres implementation behind the `postgres` feature, and
//! an in-memory backend with real transaction staging for tests.

pub mod error;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod traits;

pub use error::{DbError, DbResult};
pub use memory::MemoryBackend;
#[cfg(feature = "postgres")]
pub use postgres::PostgresBackend;
pub use traits::{Database, VersionRow, VERSION_TABLE};
