//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each section exposes a `FIELDS` const table of `FieldPath` values so
/// diagnostics always name the exact TOML field they refer to.
///
/// # Example
///
/// ```ignore
/// pub struct LogoConfigFields {
///     pub width: FieldPath,
/// }
///
/// impl LogoConfig {
///     pub const FIELDS: LogoConfigFields = LogoConfigFields {
///         width: FieldPath::new("logo.width"),
///     };
/// }
///
/// // Usage:
/// diag.error(ConfigErrorKind::InvalidRange, LogoConfig::FIELDS.width, "must be at least 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
