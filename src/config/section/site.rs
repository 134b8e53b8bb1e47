//! `[site]` section configuration.
//!
//! Core site identity consumed by the page renderer: titles, pagination
//! sizes, the scheduling window, and the "edit this post" link template.
//!
//! # Example
//!
//! ```toml
//! [site]
//! website = "https://blog.example.dev"
//! profile = "https://blog.example.dev"
//! author = "Jane Doe"
//! title = "example.dev"
//! description = "Notes on systems and tooling."
//! og_image = "og-banner.jpg"
//! light_and_dark_mode = true
//! post_per_index = 4
//! post_per_page = 3
//! scheduled_post_margin = 900000   # 15 minutes, in milliseconds
//! show_archives = false
//!
//! [site.edit_post]
//! url = "https://github.com/janedoe/blog/edit/main/content"
//! text = "Suggest Changes"
//! append_file_path = true
//! ```

use crate::config::types::{ConfigDiagnostics, ConfigErrorKind, FieldPath};
use crate::config::util::{ensure_non_empty, ensure_positive, validate_url};
use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// Fallback Open Graph image when `og_image` is not set.
pub const DEFAULT_OG_IMAGE: &str = "og-image.jpg";

/// Site identity and rendering knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Canonical site URL.
    pub website: String,

    /// Author profile URL (used in structured data markup).
    pub profile: String,

    /// Author name.
    pub author: String,

    /// Site title.
    pub title: String,

    /// Site description for meta tags.
    pub description: String,

    /// Default Open Graph image filename. Falls back to
    /// [`DEFAULT_OG_IMAGE`] when unset.
    pub og_image: Option<String>,

    /// Show the light/dark theme toggle.
    pub light_and_dark_mode: bool,

    /// Number of posts on the index page.
    pub post_per_index: u32,

    /// Number of posts per paginated listing page.
    pub post_per_page: u32,

    /// Look-ahead window in milliseconds. A future-dated post within this
    /// window counts as scheduled rather than unpublished.
    pub scheduled_post_margin: i64,

    /// Enable the archives page.
    pub show_archives: bool,

    /// "Edit this post" link template.
    pub edit_post: EditPostConfig,
}

/// External "suggest changes" link shown on posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditPostConfig {
    /// Base URL of the edit surface.
    pub url: String,
    /// Link text.
    pub text: String,
    /// Append the content file path to `url`. The exact templating is
    /// renderer policy.
    pub append_file_path: bool,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            website: "https://inkpress.pages.dev".into(),
            profile: "https://inkpress.pages.dev".into(),
            author: "Jane Doe".into(),
            title: "Inkpress".into(),
            description: "A personal blog on systems programming and tooling.".into(),
            og_image: None,
            light_and_dark_mode: true,
            post_per_index: 4,
            post_per_page: 3,
            scheduled_post_margin: 15 * 60 * 1000, // 15 minutes
            show_archives: false,
            edit_post: EditPostConfig::default(),
        }
    }
}

impl Default for EditPostConfig {
    fn default() -> Self {
        Self {
            url: "https://github.com/janedoe/inkpress/edit/main/content".into(),
            text: "Suggest Changes".into(),
            append_file_path: true,
        }
    }
}

/// Field paths for diagnostics.
pub struct SiteInfoConfigFields {
    pub website: FieldPath,
    pub profile: FieldPath,
    pub author: FieldPath,
    pub title: FieldPath,
    pub description: FieldPath,
    pub post_per_index: FieldPath,
    pub post_per_page: FieldPath,
    pub scheduled_post_margin: FieldPath,
    pub edit_post_url: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoConfigFields = SiteInfoConfigFields {
        website: FieldPath::new("site.website"),
        profile: FieldPath::new("site.profile"),
        author: FieldPath::new("site.author"),
        title: FieldPath::new("site.title"),
        description: FieldPath::new("site.description"),
        post_per_index: FieldPath::new("site.post_per_index"),
        post_per_page: FieldPath::new("site.post_per_page"),
        scheduled_post_margin: FieldPath::new("site.scheduled_post_margin"),
        edit_post_url: FieldPath::new("site.edit_post.url"),
    };

    /// Effective Open Graph image filename.
    pub fn og_image(&self) -> &str {
        self.og_image.as_deref().unwrap_or(DEFAULT_OG_IMAGE)
    }

    /// Whether a post published at `pub_datetime` counts as scheduled.
    ///
    /// True iff `pub_datetime` lies in the future but no further ahead
    /// than `scheduled_post_margin`. Past timestamps and far-future
    /// timestamps return false; what to do with the latter is caller
    /// policy.
    pub fn is_scheduled(&self, pub_datetime: DateTimeUtc, now: DateTimeUtc) -> bool {
        self.is_scheduled_millis(pub_datetime.unix_millis(), now.unix_millis())
    }

    /// Millisecond-precision variant of [`is_scheduled`](Self::is_scheduled),
    /// for callers holding raw epoch timestamps.
    pub const fn is_scheduled_millis(&self, pub_millis: i64, now_millis: i64) -> bool {
        let delta = pub_millis - now_millis;
        delta > 0 && delta <= self.scheduled_post_margin
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `website`, `profile`, `edit_post.url` are well-formed http(s) URLs
    /// - `author`, `title`, `description` are non-empty
    /// - pagination sizes are at least 1
    /// - `scheduled_post_margin` is not negative
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_url(&self.website, Self::FIELDS.website, diag);
        validate_url(&self.profile, Self::FIELDS.profile, diag);
        validate_url(&self.edit_post.url, Self::FIELDS.edit_post_url, diag);

        ensure_non_empty(&self.author, Self::FIELDS.author, diag);
        ensure_non_empty(&self.title, Self::FIELDS.title, diag);
        ensure_non_empty(&self.description, Self::FIELDS.description, diag);

        ensure_positive(self.post_per_index, Self::FIELDS.post_per_index, diag);
        ensure_positive(self.post_per_page, Self::FIELDS.post_per_page, diag);

        if self.scheduled_post_margin < 0 {
            diag.error(
                ConfigErrorKind::InvalidRange,
                Self::FIELDS.scheduled_post_margin,
                "must not be negative",
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================
