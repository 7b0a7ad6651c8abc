use super::*;

#[tokio::test]
async fn test_statements_outside_transaction_commit_directly() {
    let db = MemoryBackend::new();
    db.execute("SELECT 1").await.unwrap();
    assert_eq!(db.committed_statements(), vec!["SELECT 1"]);
}

#[tokio::test]
async fn test_commit_publishes_staged_statements() {
    let db = MemoryBackend::new();
    db.begin().await.unwrap();
    db.execute("CREATE TABLE t (id INT)").await.unwrap();
    assert!(db.in_transaction());
    assert!(db.committed_statements().is_empty());

    db.commit().await.unwrap();
    assert!(!db.in_transaction());
    assert_eq!(db.committed_statements(), vec!["CREATE TABLE t (id INT)"]);
}

#[tokio::test]
async fn test_rollback_discards_staged_work() {
    let db = MemoryBackend::new();
    db.begin().await.unwrap();
    db.execute("CREATE TABLE t (id INT)").await.unwrap();
    db.insert_version_row(
        "app",
        &VersionRow {
            major: 1,
            minor: 0,
            patch: 0,
            label: None,
        },
    )
    .await
    .unwrap();

    db.rollback().await.unwrap();
    assert!(db.committed_statements().is_empty());
    assert!(db.recorded_versions().is_empty());
}

#[tokio::test]
async fn test_scripted_failure_matches_substring() {
    let db = MemoryBackend::new();
    db.fail_on("boom");
    db.execute("SELECT 'fine'").await.unwrap();
    let err = db.execute("SELECT 'boom'").await.unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
}

#[tokio::test]
async fn test_version_read_sees_staged_write() {
    let db = MemoryBackend::new();
    let row = VersionRow {
        major: 2,
        minor: 1,
        patch: 0,
        label: None,
    };

    assert_eq!(db.latest_version_row("app").await.unwrap(), None);

    db.begin().await.unwrap();
    db.insert_version_row("app", &row).await.unwrap();
    assert_eq!(db.latest_version_row("app").await.unwrap(), Some(row.clone()));

    db.commit().await.unwrap();
    assert_eq!(db.recorded_versions(), vec![row]);
}

#[tokio::test]
async fn test_failed_version_reads_error() {
    let db = MemoryBackend::new();
    db.fail_version_reads();
    assert!(db.latest_version_row("app").await.is_err());
}
