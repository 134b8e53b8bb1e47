//! `[discussion]` section configuration.
//!
//! Comment-widget settings, passed through to the embed script as data
//! attributes. The widget maps pages to discussion threads in a
//! repository's discussion board; all identifiers are opaque values from
//! the widget's setup page.
//!
//! # Example
//!
//! ```toml
//! [discussion]
//! repo = "janedoe/inkpress"
//! repo_id = "R_kgDOABCDEF"
//! category = "Posts"
//! category_id = "DIC_kwDOABCDEF"
//! mapping = "pathname"
//! reactions_enabled = "1"
//! emit_metadata = "0"
//! input_position = "bottom"
//! lang = "en"
//! loading = "lazy"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::ensure_non_empty;
use serde::{Deserialize, Serialize};

/// How discussion threads map to pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mapping {
    /// Thread title contains the page pathname (default).
    #[default]
    Pathname,
    /// Thread title contains the full page URL.
    Url,
    /// Thread title contains the page `<title>`.
    Title,
    /// Thread title contains the `og:title` meta value.
    #[serde(rename = "og:title")]
    OgTitle,
    /// Threads matched against a specific term.
    Specific,
    /// Threads matched by discussion number.
    Number,
}

/// Where the comment input box sits relative to existing comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPosition {
    Top,
    #[default]
    Bottom,
}

/// Widget script loading strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loading {
    #[default]
    Lazy,
    Eager,
}

/// String flag in the "0"/"1" form the widget script expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toggle {
    #[serde(rename = "0")]
    #[default]
    Off,
    #[serde(rename = "1")]
    On,
}

impl Toggle {
    /// Wire value for the embed script's data attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::On => "1",
        }
    }
}

/// Discussion widget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscussionConfig {
    /// Repository hosting the discussion threads ("owner/name").
    pub repo: String,

    /// Opaque repository identifier from the widget setup page.
    pub repo_id: String,

    /// Discussion category used for new threads.
    pub category: String,

    /// Opaque category identifier.
    pub category_id: String,

    /// Page-to-thread mapping strategy.
    pub mapping: Mapping,

    /// Show reactions on the main post.
    pub reactions_enabled: Toggle,

    /// Emit discussion metadata to the parent page.
    pub emit_metadata: Toggle,

    /// Comment box position.
    pub input_position: InputPosition,

    /// Widget UI language.
    pub lang: String,

    /// Script loading strategy.
    pub loading: Loading,
}

impl Default for DiscussionConfig {
    fn default() -> Self {
        Self {
            repo: "janedoe/inkpress".into(),
            repo_id: String::new(),
            category: "Posts".into(),
            category_id: String::new(),
            mapping: Mapping::Pathname,
            reactions_enabled: Toggle::On,
            emit_metadata: Toggle::Off,
            input_position: InputPosition::Bottom,
            lang: "en".into(),
            loading: Loading::Lazy,
        }
    }
}

/// Field paths for diagnostics.
pub struct DiscussionConfigFields {
    pub repo: FieldPath,
}

impl DiscussionConfig {
    pub const FIELDS: DiscussionConfigFields = DiscussionConfigFields {
        repo: FieldPath::new("discussion.repo"),
    };

    /// Validate widget settings. Identifier strings are opaque to us;
    /// only the repository slot is checked for presence.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        ensure_non_empty(&self.repo, Self::FIELDS.repo, diag);
    }
}

// ============================================================================
// tests
// ============================================================================
