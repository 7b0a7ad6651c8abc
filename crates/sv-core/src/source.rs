//! Data types flowing through a migration run.
//!
//! The engine never walks directories itself: the caller hands it an
//! ordered list of [`SourceFile`]s, and that discovery order is preserved
//! all the way into the per-version statement buckets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One raw SQL source file, as discovered by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path the file was discovered at (identity, used in error reporting)
    pub path: String,

    /// Raw file content, before template evaluation
    pub raw: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            raw: raw.into(),
        }
    }
}

/// A source file after template evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatedFile {
    pub path: String,
    pub content: String,
}

/// One executable slice of SQL, tagged with its originating file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub path: String,
    pub sql: String,
}

/// Map of version key to its ordered statements.
///
/// Keys are semantic version strings plus the reserved `before` / `always`
/// buckets. Order within a bucket is file-discovery order, then in-file
/// appearance order; later statements may depend on earlier ones, so this
/// order is load-bearing.
pub type VersionBuckets = HashMap<String, Vec<Statement>>;
