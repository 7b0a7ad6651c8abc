use super::*;

#[test]
fn test_schema_env_round_trip() {
    // Sequential set/unset in one test; parallel tests sharing the process
    // environment would race otherwise.
    std::env::set_var(SCHEMA_ENV_VAR, "app_schema");
    let config = MigrateConfig::from_env(Version::new(1, 2, 3)).unwrap();
    assert_eq!(config.schema, "app_schema");
    assert_eq!(config.version, Version::new(1, 2, 3));

    std::env::set_var(SCHEMA_ENV_VAR, "");
    let err = MigrateConfig::from_env(Version::new(1, 2, 3)).unwrap_err();
    assert!(matches!(err, CoreError::SchemaNotSet { .. }));

    std::env::remove_var(SCHEMA_ENV_VAR);
    let err = MigrateConfig::from_env(Version::new(1, 2, 3)).unwrap_err();
    assert!(err.to_string().contains(SCHEMA_ENV_VAR));
}

#[test]
fn test_new_takes_explicit_schema() {
    let config = MigrateConfig::new("reporting", Version::new(0, 1, 0));
    assert_eq!(config.schema, "reporting");
}

#[test]
fn test_from_cargo_env_rejects_invalid_version() {
    let err = MigrateConfig::from_cargo_env("one.two.three").unwrap_err();
    assert!(matches!(err, CoreError::InvalidProjectVersion { .. }));
}
