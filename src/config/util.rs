//! Configuration validation helpers.
//!
//! Shared checks used by the section validators. Each helper pushes a
//! diagnostic into the collector instead of returning early, so a single
//! validation pass reports every violation at once.

use crate::config::types::{ConfigDiagnostics, ConfigErrorKind, FieldPath};

/// Validate that `value` is a well-formed http(s) URL.
///
/// # Checks
/// - parses with the `url` crate
/// - scheme is `http` or `https`
/// - has a host component
pub fn validate_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    ConfigErrorKind::InvalidUrl,
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none() {
                diag.error_with_hint(
                    ConfigErrorKind::InvalidUrl,
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                ConfigErrorKind::InvalidUrl,
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

/// Validate a link target. Accepts http(s) URLs plus `mailto:` addresses.
pub fn validate_link(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) if parsed.scheme() == "mailto" => {
            if parsed.path().is_empty() {
                diag.error_with_hint(
                    ConfigErrorKind::InvalidUrl,
                    field,
                    "mailto link has no address",
                    "use format like mailto:hello@example.com",
                );
            }
        }
        _ => validate_url(value, field, diag),
    }
}

/// Validate that a display string is non-empty.
pub fn ensure_non_empty(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if value.trim().is_empty() {
        diag.error(ConfigErrorKind::MissingField, field, "must not be empty");
    }
}

/// Validate that a count is at least 1.
pub fn ensure_positive(value: u32, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if value == 0 {
        diag.error(ConfigErrorKind::InvalidRange, field, "must be at least 1");
    }
}

// ============================================================================
// tests
// ============================================================================
