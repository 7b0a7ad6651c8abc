//! Version key parsing and ordering.
//!
//! Version keys are semantic version strings. Their total order follows
//! semver precedence with one deliberate inversion: a stable version sorts
//! *before* pre-releases of its own major.minor.patch, so `2.0.0` applies
//! ahead of `2.0.0-beta.1`. Pre-releases of different bases, and
//! pre-releases sharing a base, keep standard semver precedence.

use semver::Version;
use std::cmp::Ordering;

/// Reserved bucket executed before any versioned statements.
pub const BEFORE_KEY: &str = "before";

/// Reserved bucket executed after all versioned statements.
pub const ALWAYS_KEY: &str = "always";

/// Parse a version key, returning `None` for anything that is not a valid
/// semantic version (including the reserved bucket names).
pub fn parse_key(key: &str) -> Option<Version> {
    Version::parse(key).ok()
}

/// Strip the pre-release label (and build metadata) from a version.
pub fn base_version(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch)
}

/// Total order over version keys.
///
/// Standard semver precedence, except that a stable version compares less
/// than a pre-release of the identical base version.
pub fn compare_keys(a: &Version, b: &Version) -> Ordering {
    if !a.pre.is_empty() && b.pre.is_empty() && base_version(a) == *b {
        return Ordering::Greater;
    }
    if a.pre.is_empty() && !b.pre.is_empty() && *a == base_version(b) {
        return Ordering::Less;
    }
    a.cmp(b)
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
