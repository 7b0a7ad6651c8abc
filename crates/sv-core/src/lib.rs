//! sv-core - Core library for Schemaver
//!
//! This crate provides the shared types, configuration, version-key
//! ordering, version-tag splitting, and range resolution used across all
//! Schemaver components. Everything here is pure: file discovery and
//! database access are injected by the caller.

pub mod config;
pub mod error;
pub mod resolve;
pub mod source;
pub mod split;
pub mod version;

pub use config::{MigrateConfig, SCHEMA_ENV_VAR};
pub use error::{CoreError, CoreResult};
pub use resolve::{resolve_versions, VersionRange};
pub use source::{EvaluatedFile, SourceFile, Statement, VersionBuckets};
pub use split::{split_files, DEFAULT_VERSION_KEY};
pub use version::{base_version, compare_keys, parse_key, ALWAYS_KEY, BEFORE_KEY};
