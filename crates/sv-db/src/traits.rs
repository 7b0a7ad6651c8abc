//! Database trait definition and the persisted version row.

use crate::error::DbResult;
use async_trait::async_trait;
use semver::{Prerelease, Version};
use serde::{Deserialize, Serialize};

/// Name of the append-only version history table inside the target schema.
pub const VERSION_TABLE: &str = "schema_version";

/// One row of the schema version history.
///
/// `label` holds the pre-release label, `None` for stable versions. The
/// row with the greatest `updated_at` is authoritative; rows are never
/// updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRow {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub label: Option<String>,
}

impl VersionRow {
    /// Convert back to a semantic version.
    ///
    /// Returns `None` when the stored label is not a valid pre-release
    /// identifier; callers treat that the same as an unreadable row.
    pub fn to_version(&self) -> Option<Version> {
        let mut version = Version::new(self.major, self.minor, self.patch);
        if let Some(label) = &self.label {
            version.pre = Prerelease::new(label).ok()?;
        }
        Some(version)
    }
}

impl From<&Version> for VersionRow {
    fn from(version: &Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            label: (!version.pre.is_empty()).then(|| version.pre.to_string()),
        }
    }
}

/// Database abstraction trait for Schemaver
///
/// Transaction control is issued as plain statements through [`execute`]
/// so a backend is free to route everything over a single connection.
/// Implementations must be Send + Sync for async operation.
///
/// [`execute`]: Database::execute
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute one statement, or a semicolon-joined batch, returning the
    /// affected row count of the last statement.
    async fn execute(&self, sql: &str) -> DbResult<u64>;

    /// Open a transaction.
    async fn begin(&self) -> DbResult<()> {
        self.execute("BEGIN").await.map(|_| ())
    }

    /// Commit the open transaction.
    async fn commit(&self) -> DbResult<()> {
        self.execute("COMMIT").await.map(|_| ())
    }

    /// Roll back the open transaction.
    async fn rollback(&self) -> DbResult<()> {
        self.execute("ROLLBACK").await.map(|_| ())
    }

    /// Newest version row in `"{schema}".schema_version`, if any.
    async fn latest_version_row(&self, schema: &str) -> DbResult<Option<VersionRow>>;

    /// Append a version row to `"{schema}".schema_version`.
    async fn insert_version_row(&self, schema: &str, row: &VersionRow) -> DbResult<()>;

    /// Backend identifier for logging
    fn db_type(&self) -> &'static str;
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
