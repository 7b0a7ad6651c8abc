//! In-memory database backend for tests.
//!
//! Keeps a transcript of executed statements with real transaction
//! staging: statements and version rows written after `BEGIN` only become
//! visible on `COMMIT` and vanish on `ROLLBACK`. Failures can be scripted
//! by substring match to exercise rollback paths.

use crate::error::{DbError, DbResult};
use crate::traits::{Database, VersionRow};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    committed: Vec<String>,
    versions: Vec<VersionRow>,
    // Staged work of the open transaction, None when not transacting.
    staged: Option<Vec<String>>,
    staged_versions: Vec<VersionRow>,
    fail_contains: Option<String>,
    fail_version_reads: bool,
}

/// In-memory [`Database`] backend
#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<State>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any statement containing `pattern` with an execution error.
    pub fn fail_on(&self, pattern: impl Into<String>) {
        self.state.lock().unwrap().fail_contains = Some(pattern.into());
    }

    /// Make version-row reads fail, as when the table does not exist yet.
    pub fn fail_version_reads(&self) {
        self.state.lock().unwrap().fail_version_reads = true;
    }

    /// Statements visible after commits; staged statements are excluded.
    pub fn committed_statements(&self) -> Vec<String> {
        self.state.lock().unwrap().committed.clone()
    }

    /// Committed version history, oldest first.
    pub fn recorded_versions(&self) -> Vec<VersionRow> {
        self.state.lock().unwrap().versions.clone()
    }

    /// Seed a committed version row, bypassing the transaction machinery.
    pub fn seed_version(&self, row: VersionRow) {
        self.state.lock().unwrap().versions.push(row);
    }

    pub fn in_transaction(&self) -> bool {
        self.state.lock().unwrap().staged.is_some()
    }
}

#[async_trait]
impl Database for MemoryBackend {
    async fn execute(&self, sql: &str) -> DbResult<u64> {
        let mut state = self.state.lock().unwrap();

        match sql.trim() {
            "BEGIN" => {
                state.staged = Some(Vec::new());
                return Ok(0);
            }
            "COMMIT" => {
                let staged = state.staged.take().unwrap_or_default();
                state.committed.extend(staged);
                let staged_versions = std::mem::take(&mut state.staged_versions);
                state.versions.extend(staged_versions);
                return Ok(0);
            }
            "ROLLBACK" => {
                state.staged = None;
                state.staged_versions.clear();
                return Ok(0);
            }
            _ => {}
        }

        if let Some(pattern) = &state.fail_contains {
            if sql.contains(pattern.as_str()) {
                log::debug!("memory backend failing statement on '{pattern}'");
                return Err(DbError::ExecutionError(format!(
                    "scripted failure on '{pattern}'"
                )));
            }
        }

        match &mut state.staged {
            Some(staged) => staged.push(sql.to_string()),
            None => state.committed.push(sql.to_string()),
        }
        Ok(0)
    }

    async fn latest_version_row(&self, _schema: &str) -> DbResult<Option<VersionRow>> {
        let state = self.state.lock().unwrap();
        if state.fail_version_reads {
            return Err(DbError::ExecutionError(
                "relation \"schema_version\" does not exist".to_string(),
            ));
        }
        // A read inside the transaction sees its own staged write.
        Ok(state
            .staged_versions
            .last()
            .or_else(|| state.versions.last())
            .cloned())
    }

    async fn insert_version_row(&self, _schema: &str, row: &VersionRow) -> DbResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.staged.is_some() {
            state.staged_versions.push(row.clone());
        } else {
            state.versions.push(row.clone());
        }
        Ok(())
    }

    fn db_type(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
