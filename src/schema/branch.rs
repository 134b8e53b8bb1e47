//! Content branch resolution.
//!
//! Hosted CMS environments inject the git branch being edited through
//! provider-specific environment variables. Resolution itself is a pure
//! fallback chain over already-read values; reading the environment
//! stays at the boundary in [`branch_from_env`].

use std::env;

/// Branch used when no environment source provides one.
pub const DEFAULT_BRANCH: &str = "main";

/// Environment variables consulted for the content branch, in order.
const BRANCH_ENV_VARS: [&str; 3] = ["GITHUB_BRANCH", "VERCEL_GIT_COMMIT_REF", "HEAD"];

/// First non-empty candidate, else `default`.
///
/// `None` and empty-string candidates are both skipped: providers that
/// define a variable without a value should not shadow later sources.
pub fn resolve_branch<I, S>(candidates: I, default: &str) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.as_ref().is_empty())
        .map(|s| s.as_ref().to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Resolve the content branch from the process environment.
pub fn branch_from_env() -> String {
    resolve_branch(
        BRANCH_ENV_VARS.iter().map(|var| env::var(var).ok()),
        DEFAULT_BRANCH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_empty_wins() {
        let branch = resolve_branch([Some(""), None, Some("feature-x")], DEFAULT_BRANCH);
        assert_eq!(branch, "feature-x");
    }

    #[test]
    fn test_order_is_preference() {
        let branch = resolve_branch([Some("develop"), Some("feature-x")], DEFAULT_BRANCH);
        assert_eq!(branch, "develop");
    }

    #[test]
    fn test_empty_candidates_fall_back() {
        assert_eq!(
            resolve_branch(std::iter::empty::<Option<&str>>(), DEFAULT_BRANCH),
            "main"
        );
        assert_eq!(
            resolve_branch([None::<&str>, Some("")], DEFAULT_BRANCH),
            "main"
        );
    }

    #[test]
    fn test_custom_default() {
        assert_eq!(resolve_branch([None::<&str>], "trunk"), "trunk");
    }
}
