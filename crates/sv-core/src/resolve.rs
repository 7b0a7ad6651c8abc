//! Version range resolution.
//!
//! Given every version key discovered in the SQL sources and a
//! `{from, to}` range, [`resolve_versions`] computes the subset of keys to
//! apply and their execution order. The rules:
//!
//! 1. Keys that are not valid semantic versions are ignored entirely.
//! 2. Keys sort by [`compare_keys`](crate::version::compare_keys) (stable
//!    before its own pre-releases).
//! 3. Bounds compare against the *base* (label-stripped) `from`/`to`.
//! 4. `from` is exclusive: the recorded version is never re-applied.
//! 5. `to` is inclusive at its base; everything past it is excluded, and
//!    the exclusion latches (later keys never re-enter the window).
//! 6. A labeled `to` differing from `from` is a labeled-target run: the key
//!    exactly equal to the full `to` string is force-included regardless of
//!    the bounds.

use crate::version::{base_version, compare_keys, parse_key};
use semver::Version;

/// Inclusion window for one migration run.
///
/// `from` is the currently recorded version (absent on first-time setup),
/// `to` the target version (absent means unbounded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl VersionRange {
    pub fn new(from: Option<String>, to: Option<String>) -> Self {
        Self { from, to }
    }

    /// Range from an optional recorded version up to a target version.
    pub fn up_to(from: Option<&Version>, to: &Version) -> Self {
        Self {
            from: from.map(Version::to_string),
            to: Some(to.to_string()),
        }
    }
}

/// Filter and order the version keys applicable within `range`.
///
/// Pure function; keys that do not parse as semantic versions (including
/// the reserved `before`/`always` buckets) never appear in the output.
pub fn resolve_versions(keys: &[String], range: &VersionRange) -> Vec<String> {
    let from_base = range
        .from
        .as_deref()
        .and_then(parse_key)
        .map(|v| base_version(&v));
    let to_parsed = range.to.as_deref().and_then(parse_key);
    let to_base = to_parsed.as_ref().map(base_version);

    // A labeled target distinct from the source forces exact inclusion of
    // the target key, outside the normal window.
    let is_test = to_parsed.map(|v| !v.pre.is_empty()).unwrap_or(false)
        && range.from != range.to;

    let mut valid: Vec<(Version, &str)> = keys
        .iter()
        .filter_map(|key| parse_key(key).map(|version| (version, key.as_str())))
        .collect();
    valid.sort_by(|a, b| compare_keys(&a.0, &b.0));

    let mut start = false;
    let mut stop = false;
    let mut resolved = Vec::new();

    for (version, key) in valid {
        if is_test && Some(key) == range.to.as_deref() {
            resolved.push(key.to_string());
            continue;
        }

        // The lower bound latches open on the first key past `from`; the
        // upper bound latches closed on the first key past `to`.
        let reached = match &from_base {
            None => true,
            Some(from) => start || version > *from,
        };
        if reached {
            start = true;
        }

        let past_end = match &to_base {
            None => false,
            Some(to) => stop || version > *to,
        };
        if past_end {
            stop = true;
        }

        if start && !stop {
            resolved.push(key.to_string());
        }
    }

    resolved
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
