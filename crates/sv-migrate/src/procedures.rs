//! Named procedure registry and per-connection binding.
//!
//! Procedures come in two flavors: SQL files (template-evaluated once at
//! load, name taken from the file stem) and native Rust handlers. A
//! registry is built once and bound to any number of connections; calling
//! a bound procedure runs its SQL, or invokes its handler, against that
//! connection.

use crate::error::{MigrateError, MigrateResult};
use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use sv_core::SourceFile;
use sv_db::Database;
use sv_template::Evaluator;

/// Future returned by a native procedure handler.
pub type ProcedureFuture<'a> = Pin<Box<dyn Future<Output = MigrateResult<u64>> + Send + 'a>>;

/// Native procedure handler bound to a connection at call time.
pub type NativeHandler =
    Arc<dyn for<'a> Fn(&'a dyn Database) -> ProcedureFuture<'a> + Send + Sync>;

/// One named procedure
#[derive(Clone)]
pub enum Procedure {
    /// A fixed SQL text, executed verbatim
    Sql(String),
    /// A native handler invoked with the bound connection
    Native(NativeHandler),
}

/// Registry of named procedures
#[derive(Default, Clone)]
pub struct ProcedureRegistry {
    procedures: HashMap<String, Procedure>,
}

impl ProcedureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from SQL procedure files.
    ///
    /// Each file becomes one procedure named after its file stem, its
    /// content template-evaluated exactly like migration sources. A
    /// template error aborts loading.
    pub fn from_sql_sources(
        sources: &[SourceFile],
        evaluator: &Evaluator,
    ) -> MigrateResult<Self> {
        let mut registry = Self::new();
        for source in sources {
            let sql = evaluator.eval(&source.raw)?;
            registry.register_sql(file_stem(&source.path), sql);
        }
        Ok(registry)
    }

    /// Register a SQL procedure, replacing any previous one of that name.
    pub fn register_sql(&mut self, name: impl Into<String>, sql: impl Into<String>) {
        self.procedures
            .insert(name.into(), Procedure::Sql(sql.into()));
    }

    /// Register a native handler, replacing any previous one of that name.
    pub fn register_native(&mut self, name: impl Into<String>, handler: NativeHandler) {
        self.procedures
            .insert(name.into(), Procedure::Native(handler));
    }

    /// Registered procedure names, unordered.
    pub fn names(&self) -> Vec<&str> {
        self.procedures.keys().map(String::as_str).collect()
    }

    /// Bind the registry to a connection.
    pub fn bind<'a>(&'a self, db: &'a dyn Database) -> BoundProcedures<'a> {
        BoundProcedures { registry: self, db }
    }
}

/// A registry attached to one connection
pub struct BoundProcedures<'a> {
    registry: &'a ProcedureRegistry,
    db: &'a dyn Database,
}

impl BoundProcedures<'_> {
    /// Invoke a procedure by name, returning its affected row count.
    pub async fn call(&self, name: &str) -> MigrateResult<u64> {
        match self.registry.procedures.get(name) {
            None => Err(MigrateError::UnknownProcedure {
                name: name.to_string(),
            }),
            Some(Procedure::Sql(sql)) => Ok(self.db.execute(sql).await?),
            Some(Procedure::Native(handler)) => handler(self.db).await,
        }
    }
}

fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
#[path = "procedures_test.rs"]
mod tests;
