//! The migration executor.
//!
//! One [`Migrator::migrate`] call walks the whole pipeline: template
//! evaluation, version-tag splitting, version check against the recorded
//! schema version, range resolution, and transactional application in the
//! order `before` bucket, resolved versions, `always` bucket. The new
//! version row is written inside the same transaction, immediately before
//! commit, so a crash can never leave the schema updated but unrecorded.

use crate::error::{MigrateError, MigrateResult};
use crate::report::MigrationReport;
use chrono::Utc;
use semver::Version;
use std::cmp::Ordering;
use std::time::Instant;
use sv_core::{
    compare_keys, resolve_versions, split_files, EvaluatedFile, MigrateConfig, SourceFile,
    Statement, VersionBuckets, VersionRange, ALWAYS_KEY, BEFORE_KEY,
};
use sv_db::{Database, VersionRow, VERSION_TABLE};
use sv_template::Evaluator;

/// Path recorded on statements the executor injects itself.
const BOOTSTRAP_PATH: &str = "sv-migrate::bootstrap";

/// Migration executor for one target schema and version.
///
/// Holds only immutable run inputs; the connection is passed per call so
/// the caller owns its lifecycle. Callers must serialize runs against the
/// same schema themselves (an advisory lock taken before invoking
/// [`Migrator::migrate`] is the usual choice).
pub struct Migrator {
    config: MigrateConfig,
    sources: Vec<SourceFile>,
}

impl Migrator {
    /// Create a migrator over caller-discovered SQL sources.
    ///
    /// Source order is preserved into bucket order, so callers should pass
    /// files in a stable discovery order.
    pub fn new(config: MigrateConfig, sources: Vec<SourceFile>) -> Self {
        Self { config, sources }
    }

    /// Run all applicable migrations against `db`.
    ///
    /// Idempotent at the version level: a re-run with the database already
    /// at the target version executes nothing. On any failure the
    /// transaction is rolled back and no state is persisted.
    pub async fn migrate(&self, db: &dyn Database) -> MigrateResult<MigrationReport> {
        let started_at = Utc::now();
        let start = Instant::now();
        let target = &self.config.version;

        // Everything that can fail without touching the database happens
        // ahead of the transaction.
        let mut buckets = self.load_buckets()?;

        let recorded = self.recorded_version(db).await;
        if let Some(recorded) = &recorded {
            // Ordered by compare_keys, not plain semver precedence: a
            // recorded stable base is older than its own pre-releases, so
            // targeting 2.0.0-beta.1 from 2.0.0 is a forward run.
            if compare_keys(recorded, target) == Ordering::Greater {
                return Err(MigrateError::VersionSkew {
                    recorded: recorded.to_string(),
                    target: target.to_string(),
                });
            }
        }

        if recorded.as_ref() == Some(target) {
            log::info!("database already at version {target}, nothing to apply");
            return Ok(MigrationReport {
                applied_versions: Vec::new(),
                statement_count: 0,
                started_at,
                duration_ms: start.elapsed().as_millis(),
            });
        }

        self.inject_bootstrap(&mut buckets);

        let keys: Vec<String> = buckets.keys().cloned().collect();
        let range = VersionRange::up_to(recorded.as_ref(), target);
        let resolved = resolve_versions(&keys, &range);
        log::debug!(
            "resolved {} version(s) for {} -> {}: {:?}",
            resolved.len(),
            recorded
                .as_ref()
                .map(Version::to_string)
                .unwrap_or_else(|| "unversioned".to_string()),
            target,
            resolved
        );

        let statement_count = self.apply(db, &buckets, &resolved).await?;

        log::info!(
            "migrated {} to version {} ({} statements, {} version(s))",
            self.config.schema,
            target,
            statement_count,
            resolved.len()
        );
        Ok(MigrationReport {
            applied_versions: resolved,
            statement_count,
            started_at,
            duration_ms: start.elapsed().as_millis(),
        })
    }

    /// Evaluate templates in every source and split into version buckets.
    fn load_buckets(&self) -> MigrateResult<VersionBuckets> {
        let evaluator = Evaluator::new(&self.config.version);
        let mut evaluated = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            evaluated.push(EvaluatedFile {
                path: source.path.clone(),
                content: evaluator.eval(&source.raw)?,
            });
        }
        Ok(split_files(&evaluated))
    }

    /// Read the recorded schema version.
    ///
    /// Any failure to read it, including the version table not existing
    /// yet, means "no version recorded" -- the one place an error is
    /// deliberately swallowed, limited to first-run bootstrapping.
    async fn recorded_version(&self, db: &dyn Database) -> Option<Version> {
        match db.latest_version_row(&self.config.schema).await {
            Ok(Some(row)) => {
                let version = row.to_version();
                if version.is_none() {
                    log::debug!("recorded version row is unreadable, treating as unversioned");
                }
                version
            }
            Ok(None) => None,
            Err(e) => {
                log::debug!("version probe failed, treating as unversioned: {e}");
                None
            }
        }
    }

    /// Prepend the namespace and version-table bootstrap to the `before`
    /// bucket so file-provided `before` statements already run inside the
    /// target schema.
    fn inject_bootstrap(&self, buckets: &mut VersionBuckets) {
        let schema = &self.config.schema;
        let mut bootstrap = vec![
            Statement {
                path: BOOTSTRAP_PATH.to_string(),
                sql: format!("CREATE SCHEMA IF NOT EXISTS \"{schema}\";"),
            },
            Statement {
                path: BOOTSTRAP_PATH.to_string(),
                sql: format!("SET search_path TO \"{schema}\";"),
            },
            Statement {
                path: BOOTSTRAP_PATH.to_string(),
                sql: version_table_ddl(schema),
            },
        ];

        let bucket = buckets.entry(BEFORE_KEY.to_string()).or_default();
        bootstrap.extend(bucket.drain(..));
        *bucket = bootstrap;
    }

    /// Execute the run inside one transaction and record the new version.
    async fn apply(
        &self,
        db: &dyn Database,
        buckets: &VersionBuckets,
        resolved: &[String],
    ) -> MigrateResult<usize> {
        db.begin().await?;

        let mut statement_count = 0;
        let order = std::iter::once(BEFORE_KEY)
            .chain(resolved.iter().map(String::as_str))
            .chain(std::iter::once(ALWAYS_KEY));

        for key in order {
            let Some(statements) = buckets.get(key) else {
                continue;
            };
            log::debug!("applying {key} ({} statement(s))", statements.len());
            for statement in statements {
                if let Err(source) = db.execute(&statement.sql).await {
                    let _ = db.rollback().await;
                    return Err(MigrateError::Execution {
                        path: statement.path.clone(),
                        statement: statement.sql.clone(),
                        source,
                    });
                }
                statement_count += 1;
            }
        }

        let row = VersionRow::from(&self.config.version);
        if let Err(e) = db.insert_version_row(&self.config.schema, &row).await {
            let _ = db.rollback().await;
            return Err(e.into());
        }

        if let Err(e) = db.commit().await {
            let _ = db.rollback().await;
            return Err(e.into());
        }
        Ok(statement_count)
    }
}

/// Bootstrap DDL for the append-only version history table.
fn version_table_ddl(schema: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS \"{schema}\".{VERSION_TABLE} (\n    \
            major      BIGINT NOT NULL,\n    \
            minor      BIGINT NOT NULL,\n    \
            patch      BIGINT NOT NULL,\n    \
            label      TEXT,\n    \
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()\n\
        );"
    )
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
