//! Site configuration management for `inkpress.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] and [site.edit_post]
//! │   ├── locale     # [locale]
//! │   ├── logo       # [logo]
//! │   ├── socials    # [[socials]]
//! │   └── discussion # [discussion]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError + diagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # BlogConfig (this file)
//! ```
//!
//! The crate ships a complete built-in configuration; a config file only
//! overrides the sections it names. After loading, the value is validated
//! once and never mutated - consumers read it for the whole process
//! lifetime (or until a hosted environment swaps in a reloaded instance
//! through the handle).

pub mod section;
pub mod types;
mod util;

// Re-export from section/
pub use section::{
    DEFAULT_OG_IMAGE, DiscussionConfig, EditPostConfig, InputPosition, Loading, LocaleConfig,
    LogoConfig, Mapping, SiteInfoConfig, SocialEntry, SocialNetwork, Toggle, active_socials,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigErrorKind, FieldPath, cfg, init_config,
};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `inkpress.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity, pagination, and the edit-post link.
    pub site: SiteInfoConfig,

    /// Language settings.
    pub locale: LocaleConfig,

    /// Header logo.
    pub logo: LogoConfig,

    /// Social links, in display order.
    pub socials: Vec<SocialEntry>,

    /// Comment widget settings.
    pub discussion: DiscussionConfig,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            site: SiteInfoConfig::default(),
            locale: LocaleConfig::default(),
            logo: LogoConfig::default(),
            socials: section::default_socials(),
            discussion: DiscussionConfig::default(),
        }
    }
}

impl BlogConfig {
    /// Construct the built-in configuration and validate it.
    ///
    /// This is the static-literal path: no file is read, the shipped
    /// defaults are the configuration.
    pub fn load() -> Result<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string and validate it.
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::warn_unknown_fields(&ignored, None);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::warn_unknown_fields(&ignored, Some(path));
        }

        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Warn about unknown fields. Unlike a typo in a known field, these
    /// never fail the load - the file may target a newer version.
    fn warn_unknown_fields(fields: &[String], path: Option<&Path>) {
        match path {
            Some(path) => {
                let display_path = path
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_else(|| path.to_string_lossy());
                log!("warning"; "unknown fields in {}, ignoring:", display_path);
            }
            None => log!("warning"; "unknown config fields, ignoring:"),
        }
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Validate the aggregate, collecting all violations at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.logo.validate(&mut diag);
        section::validate_socials(&self.socials, &mut diag);
        self.discussion.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Social entries eligible for display, preserving file order.
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialEntry> {
        section::active_socials(&self.socials)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet on top of the built-in defaults.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> BlogConfig {
    let (parsed, ignored) = BlogConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
