//! Result summary of one migration run.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of a successful [`Migrator::migrate`](crate::Migrator::migrate)
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    /// Version keys applied, in execution order (reserved buckets excluded)
    pub applied_versions: Vec<String>,

    /// Total statements executed, synthetic bootstrap statements included
    pub statement_count: usize,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration of the run
    pub duration_ms: u128,
}

impl MigrationReport {
    /// Whether the run applied nothing (database already at target).
    pub fn is_noop(&self) -> bool {
        self.statement_count == 0
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
