//! `[locale]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [locale]
//! lang = "en"               # html lang attribute
//! lang_tags = ["en-US"]     # BCP 47 tags for date formatting
//! ```

use serde::{Deserialize, Serialize};

/// Language settings for rendered pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// HTML lang code. Empty falls back to "en".
    pub lang: String,

    /// BCP 47 language tags, in preference order. An empty list means the
    /// consumer uses its environment default.
    pub lang_tags: Vec<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            lang_tags: vec!["en-US".into()],
        }
    }
}

impl LocaleConfig {
    /// Effective `lang` attribute value.
    pub fn html_lang(&self) -> &str {
        if self.lang.is_empty() { "en" } else { &self.lang }
    }
}
