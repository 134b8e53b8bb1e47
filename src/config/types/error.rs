//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors.
///
/// All of these are fatal at load time: there is no valid partial
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// Which constraint a diagnostic violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Field must be a well-formed URL.
    InvalidUrl,
    /// Numeric field outside its allowed range.
    InvalidRange,
    /// A key that must be unique appears more than once.
    DuplicateKey,
    /// Required display string is empty.
    MissingField,
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Violated constraint.
    pub kind: ConfigErrorKind,
    /// Config field path (e.g., "site.website")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: ConfigErrorKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Collected validation errors, returned all at once after a full pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, kind: ConfigErrorKind, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(kind, field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        kind: ConfigErrorKind,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(kind, field, message).with_hint(hint));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Whether any collected error violated `kind`.
    pub fn contains(&self, kind: ConfigErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("inkpress.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("inkpress.toml"));
    }

    #[test]
    fn test_diagnostic_display_with_hint() {
        let diag = ConfigDiagnostic::new(
            ConfigErrorKind::InvalidUrl,
            FieldPath::new("site.website"),
            "invalid URL",
        )
        .with_hint("use format like https://example.com");

        let display = format!("{diag}");
        assert!(display.contains("site.website"));
        assert!(display.contains("invalid URL"));
        assert!(display.contains("https://example.com"));
    }

    #[test]
    fn test_diagnostics_collect_and_contains() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.error(
            ConfigErrorKind::InvalidRange,
            FieldPath::new("site.post_per_page"),
            "must be at least 1",
        );
        diag.error(
            ConfigErrorKind::DuplicateKey,
            FieldPath::new("socials.name"),
            "duplicate entry",
        );

        assert_eq!(diag.len(), 2);
        assert!(diag.contains(ConfigErrorKind::InvalidRange));
        assert!(diag.contains(ConfigErrorKind::DuplicateKey));
        assert!(!diag.contains(ConfigErrorKind::InvalidUrl));
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_diagnostics_empty_into_result() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
