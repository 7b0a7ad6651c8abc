//! Version-tag splitting of evaluated SQL files.
//!
//! A file is partitioned at every `@version` comment marker; each slice
//! (marker comment included) becomes one statement in the bucket of the
//! marker's version key. Content before the first marker falls into the
//! implicit `0.0.1` bucket via a synthetic marker, so an untagged file
//! still yields one applicable bucket.
//!
//! Unparseable version tokens are kept verbatim as keys: this component is
//! tolerant, the resolver is the strict half.

use crate::source::{EvaluatedFile, Statement, VersionBuckets};
use regex::Regex;
use std::sync::OnceLock;

/// Bucket for content appearing before the first explicit marker.
pub const DEFAULT_VERSION_KEY: &str = "0.0.1";

const MARKER: &str = "* @version";

fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\* @version\s+(\S+)").unwrap())
}

/// Split evaluated files into per-version statement buckets.
///
/// Bucket order is file order, then in-file marker order; both are
/// preserved exactly, since later statements in a version may depend on
/// earlier ones.
pub fn split_files(files: &[EvaluatedFile]) -> VersionBuckets {
    let mut buckets = VersionBuckets::new();

    for file in files {
        let content = format!("/* @version {DEFAULT_VERSION_KEY} */{}", file.content);
        let starts: Vec<usize> = content.match_indices(MARKER).map(|(i, _)| i).collect();

        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied();
            let slice = &content[start..end.unwrap_or(content.len())];

            let Some(captures) = marker_regex().captures(slice) else {
                // Marker without a token; nothing to bucket it under.
                log::debug!("{}: @version marker without a token, skipped", file.path);
                continue;
            };
            let version = captures[1].to_string();

            // Re-open the comment the marker sat in; when the slice was cut
            // at the next marker it ends inside that marker's comment
            // opener, so close it to keep the emitted SQL well-formed.
            let sql = match end {
                Some(_) => format!("/**\n {slice}\n */"),
                None => format!("/**\n {slice}"),
            };

            buckets.entry(version).or_default().push(Statement {
                path: file.path.clone(),
                sql,
            });
        }
    }

    buckets
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
