use super::*;

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

#[test]
fn test_parse_key_valid() {
    assert!(parse_key("1.2.3").is_some());
    assert!(parse_key("2.0.0-beta.1").is_some());
}

#[test]
fn test_parse_key_invalid() {
    assert!(parse_key("before").is_none());
    assert!(parse_key("always").is_none());
    assert!(parse_key("1.2").is_none());
    assert!(parse_key("not-a-version").is_none());
}

#[test]
fn test_base_version_strips_label() {
    assert_eq!(base_version(&v("2.0.0-beta.1")), v("2.0.0"));
    assert_eq!(base_version(&v("1.2.3")), v("1.2.3"));
}

#[test]
fn test_stable_sorts_before_own_prerelease() {
    assert_eq!(compare_keys(&v("2.0.0"), &v("2.0.0-beta.1")), Ordering::Less);
    assert_eq!(
        compare_keys(&v("2.0.0-beta.1"), &v("2.0.0")),
        Ordering::Greater
    );
}

#[test]
fn test_prerelease_of_different_base_keeps_semver_order() {
    // 1.9.9-rc.1 is below 2.0.0 as usual; only the identical base inverts.
    assert_eq!(compare_keys(&v("1.9.9-rc.1"), &v("2.0.0")), Ordering::Less);
    assert_eq!(
        compare_keys(&v("2.0.1-rc.1"), &v("2.0.0")),
        Ordering::Greater
    );
}

#[test]
fn test_prereleases_sharing_base_use_semver_precedence() {
    assert_eq!(
        compare_keys(&v("2.0.0-alpha"), &v("2.0.0-beta")),
        Ordering::Less
    );
    assert_eq!(
        compare_keys(&v("2.0.0-beta.1"), &v("2.0.0-beta.2")),
        Ordering::Less
    );
}

#[test]
fn test_order_is_transitive_over_mixed_keys() {
    let mut keys = vec![
        v("0.0.0-alpha"),
        v("0.0.1"),
        v("0.0.0"),
        v("1.0.0"),
        v("1.0.0-rc.1"),
    ];
    keys.sort_by(compare_keys);
    let sorted: Vec<String> = keys.iter().map(Version::to_string).collect();
    assert_eq!(
        sorted,
        vec!["0.0.0", "0.0.0-alpha", "0.0.1", "1.0.0", "1.0.0-rc.1"]
    );
}
