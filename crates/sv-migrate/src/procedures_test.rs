use super::*;
use semver::Version;
use sv_db::MemoryBackend;

fn evaluator() -> Evaluator {
    Evaluator::new(&Version::new(1, 0, 0))
}

fn now_handler(db: &dyn Database) -> ProcedureFuture<'_> {
    Box::pin(async move { db.execute("SELECT NOW()").await.map_err(MigrateError::from) })
}

#[tokio::test]
async fn test_sql_procedure_runs_against_bound_connection() {
    let sources = vec![SourceFile::new(
        "db/procedures/active_users.sql",
        "SELECT * FROM users WHERE active;",
    )];
    let registry = ProcedureRegistry::from_sql_sources(&sources, &evaluator()).unwrap();

    let db = MemoryBackend::new();
    registry.bind(&db).call("active_users").await.unwrap();

    assert_eq!(
        db.committed_statements(),
        vec!["SELECT * FROM users WHERE active;"]
    );
}

#[tokio::test]
async fn test_procedure_name_is_the_file_stem() {
    let sources = vec![
        SourceFile::new("db/procedures/a.sql", "SELECT 'a';"),
        SourceFile::new("db/procedures/b.pgsql", "SELECT 'b';"),
    ];
    let registry = ProcedureRegistry::from_sql_sources(&sources, &evaluator()).unwrap();

    let mut names = registry.names();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b"]);
}

#[tokio::test]
async fn test_sql_procedures_are_template_evaluated() {
    let sources = vec![SourceFile::new(
        "db/procedures/version.sql",
        "SELECT '${major}.${minor}.${patch}';",
    )];
    let registry = ProcedureRegistry::from_sql_sources(&sources, &evaluator()).unwrap();

    let db = MemoryBackend::new();
    registry.bind(&db).call("version").await.unwrap();

    assert_eq!(db.committed_statements(), vec!["SELECT '1.0.0';"]);
}

#[tokio::test]
async fn test_template_error_aborts_loading() {
    let sources = vec![SourceFile::new("db/procedures/bad.sql", "SELECT ${nope};")];
    let result = ProcedureRegistry::from_sql_sources(&sources, &evaluator());
    assert!(matches!(result, Err(MigrateError::Template(_))));
}

#[tokio::test]
async fn test_native_procedure_receives_bound_connection() {
    let mut registry = ProcedureRegistry::new();
    registry.register_native("now", std::sync::Arc::new(now_handler));

    let db = MemoryBackend::new();
    registry.bind(&db).call("now").await.unwrap();

    assert_eq!(db.committed_statements(), vec!["SELECT NOW()"]);
}

#[tokio::test]
async fn test_unknown_procedure_errors() {
    let registry = ProcedureRegistry::new();
    let db = MemoryBackend::new();
    let err = registry.bind(&db).call("missing").await.unwrap_err();
    assert!(matches!(err, MigrateError::UnknownProcedure { .. }));
}

#[tokio::test]
async fn test_later_registration_replaces_earlier() {
    let mut registry = ProcedureRegistry::new();
    registry.register_sql("report", "SELECT 'old';");
    registry.register_sql("report", "SELECT 'new';");

    let db = MemoryBackend::new();
    registry.bind(&db).call("report").await.unwrap();
    assert_eq!(db.committed_statements(), vec!["SELECT 'new';"]);
}
