//! Postgres database backend implementation.
//!
//! Holds a single dedicated connection behind an async mutex so plain
//! `BEGIN`/`COMMIT`/`ROLLBACK` statements keep their transaction affinity;
//! a pooled executor would spread them over different connections.

use crate::error::{DbError, DbResult};
use crate::traits::{Database, VersionRow, VERSION_TABLE};
use async_trait::async_trait;
use sqlx::{Connection, PgConnection};
use tokio::sync::Mutex;

/// Postgres [`Database`] backend over one dedicated connection
pub struct PostgresBackend {
    conn: Mutex<PgConnection>,
}

impl PostgresBackend {
    /// Connect to the database at `url`.
    pub async fn connect(url: &str) -> DbResult<Self> {
        let conn = PgConnection::connect(url)
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self::new(conn))
    }

    /// Wrap an already established connection.
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Close the connection cleanly.
    pub async fn close(self) -> DbResult<()> {
        self.conn.into_inner().close().await?;
        Ok(())
    }
}

#[async_trait]
impl Database for PostgresBackend {
    async fn execute(&self, sql: &str) -> DbResult<u64> {
        let mut conn = self.conn.lock().await;
        // raw_sql runs semicolon-joined batches in one round trip.
        let result = sqlx::raw_sql(sql)
            .execute(&mut *conn)
            .await
            .map_err(|e| DbError::ExecutionError(format!("{e}: {sql}")))?;
        Ok(result.rows_affected())
    }

    async fn latest_version_row(&self, schema: &str) -> DbResult<Option<VersionRow>> {
        let mut conn = self.conn.lock().await;
        let sql = format!(
            "SELECT major, minor, patch, label FROM \"{schema}\".{VERSION_TABLE} \
             ORDER BY updated_at DESC LIMIT 1"
        );
        let row: Option<(i64, i64, i64, Option<String>)> =
            sqlx::query_as(&sql).fetch_optional(&mut *conn).await?;

        row.map(|(major, minor, patch, label)| {
            let into_u64 = |n: i64, column: &str| {
                u64::try_from(n)
                    .map_err(|_| DbError::InvalidVersionRow(format!("negative {column}: {n}")))
            };
            Ok(VersionRow {
                major: into_u64(major, "major")?,
                minor: into_u64(minor, "minor")?,
                patch: into_u64(patch, "patch")?,
                label,
            })
        })
        .transpose()
    }

    async fn insert_version_row(&self, schema: &str, row: &VersionRow) -> DbResult<()> {
        let mut conn = self.conn.lock().await;
        let sql = format!(
            "INSERT INTO \"{schema}\".{VERSION_TABLE} (major, minor, patch, label) \
             VALUES ($1, $2, $3, $4)"
        );
        sqlx::query(&sql)
            .bind(row.major as i64)
            .bind(row.minor as i64)
            .bind(row.patch as i64)
            .bind(row.label.as_deref())
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    fn db_type(&self) -> &'static str {
        "postgres"
    }
}
