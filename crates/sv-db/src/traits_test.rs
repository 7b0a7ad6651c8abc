use super::*;

#[test]
fn test_version_row_from_stable_version() {
    let row = VersionRow::from(&Version::new(1, 2, 3));
    assert_eq!(
        row,
        VersionRow {
            major: 1,
            minor: 2,
            patch: 3,
            label: None
        }
    );
    assert_eq!(row.to_version(), Some(Version::new(1, 2, 3)));
}

#[test]
fn test_version_row_round_trips_label() {
    let version = Version::parse("2.0.0-beta.1").unwrap();
    let row = VersionRow::from(&version);
    assert_eq!(row.label.as_deref(), Some("beta.1"));
    assert_eq!(row.to_version(), Some(version));
}

#[test]
fn test_corrupt_label_reads_as_none() {
    let row = VersionRow {
        major: 1,
        minor: 0,
        patch: 0,
        label: Some("not a label!".to_string()),
    };
    assert_eq!(row.to_version(), None);
}
