//! The fixed evaluation context available inside `${...}` spans.

use minijinja::{context, Value};
use semver::Version;

/// Build the context for a project version.
///
/// `label` is the pre-release label, empty for stable versions. The bucket
/// names `always` and `before` are exposed as literals so a fragment can
/// write `@version ${always}` instead of hard-coding the string.
pub fn eval_context(version: &Version) -> Value {
    context! {
        major => version.major,
        minor => version.minor,
        patch => version.patch,
        label => version.pre.as_str(),
        version => version.to_string(),
        always => "always",
        before => "before",
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
