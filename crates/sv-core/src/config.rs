//! Run configuration for the migration engine.
//!
//! The engine needs exactly two settings: the target schema (namespace) the
//! migrations run against, and the version the schema should end up at.
//! The schema comes from the `PGSCHEMA` environment variable; the version
//! is the embedding project's own version, injected by the caller.

use crate::error::{CoreError, CoreResult};
use semver::Version;

/// Environment variable naming the target schema.
pub const SCHEMA_ENV_VAR: &str = "PGSCHEMA";

/// Configuration for one migration run
#[derive(Debug, Clone)]
pub struct MigrateConfig {
    /// Target schema (namespace) all statements run inside
    pub schema: String,

    /// Version the database should be migrated to
    pub version: Version,
}

impl MigrateConfig {
    /// Create a config from an explicit schema name and target version.
    pub fn new(schema: impl Into<String>, version: Version) -> Self {
        Self {
            schema: schema.into(),
            version,
        }
    }

    /// Read the target schema from `PGSCHEMA`.
    ///
    /// Fails with [`CoreError::SchemaNotSet`] before any database work if
    /// the variable is absent or empty.
    pub fn from_env(version: Version) -> CoreResult<Self> {
        let schema = std::env::var(SCHEMA_ENV_VAR)
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::SchemaNotSet {
                name: SCHEMA_ENV_VAR.to_string(),
            })?;
        Ok(Self { schema, version })
    }

    /// Read both schema and version from the environment.
    ///
    /// The version comes from `CARGO_PKG_VERSION` as baked into the calling
    /// binary at compile time, so this is only useful from an embedder that
    /// re-exports its own version; library callers should prefer
    /// [`MigrateConfig::from_env`] with an explicit version.
    pub fn from_cargo_env(pkg_version: &str) -> CoreResult<Self> {
        let version =
            Version::parse(pkg_version).map_err(|e| CoreError::InvalidProjectVersion {
                version: pkg_version.to_string(),
                message: e.to_string(),
            })?;
        Self::from_env(version)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
