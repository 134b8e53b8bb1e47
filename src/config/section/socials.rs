//! `[[socials]]` configuration.
//!
//! Ordered list of social-network links. File order is display order;
//! only entries with `active = true` are rendered.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "Github"
//! href = "https://github.com/janedoe"
//! link_title = "Inkpress on Github"
//! active = true
//!
//! [[socials]]
//! name = "Mail"
//! href = "mailto:hello@example.com"
//! link_title = "Send an email to Inkpress"
//! active = true
//! ```

use crate::config::types::{ConfigDiagnostics, ConfigErrorKind, FieldPath};
use crate::config::util::validate_link;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported social network identifiers.
///
/// The renderer maps each variant to an icon; unknown networks are a
/// parse error rather than a silently missing icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialNetwork {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    X,
    Twitch,
    YouTube,
    WhatsApp,
    Telegram,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Mastodon,
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A single social link entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialEntry {
    /// Which network this entry links to. Each network may appear at
    /// most once across the list.
    pub name: SocialNetwork,

    /// Link target (http(s) URL or `mailto:` address).
    pub href: String,

    /// Accessible title for the link.
    pub link_title: String,

    /// Whether the entry is rendered.
    pub active: bool,
}

impl SocialEntry {
    pub fn new(name: SocialNetwork, href: &str, link_title: &str, active: bool) -> Self {
        Self {
            name,
            href: href.into(),
            link_title: link_title.into(),
            active,
        }
    }
}

/// Entries eligible for display, preserving input order.
pub fn active_socials(socials: &[SocialEntry]) -> impl Iterator<Item = &SocialEntry> {
    socials.iter().filter(|s| s.active)
}

/// Field paths for diagnostics.
pub struct SocialsFields {
    pub name: FieldPath,
    pub href: FieldPath,
}

pub const SOCIALS_FIELDS: SocialsFields = SocialsFields {
    name: FieldPath::new("socials.name"),
    href: FieldPath::new("socials.href"),
};

/// Validate the socials list.
///
/// # Checks
/// - every `href` is a valid link (http(s) or mailto)
/// - no network appears twice
pub fn validate_socials(socials: &[SocialEntry], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for entry in socials {
        validate_link(&entry.href, SOCIALS_FIELDS.href, diag);

        if !seen.insert(entry.name) {
            diag.error_with_hint(
                ConfigErrorKind::DuplicateKey,
                SOCIALS_FIELDS.name,
                format!("duplicate social network `{}`", entry.name),
                "each network may appear at most once",
            );
        }
    }
}

/// Default social links shipped with the built-in configuration.
pub(crate) fn default_socials() -> Vec<SocialEntry> {
    vec![
        SocialEntry::new(
            SocialNetwork::Github,
            "https://github.com/janedoe",
            "Inkpress on Github",
            true,
        ),
        SocialEntry::new(
            SocialNetwork::Facebook,
            "https://facebook.com/janedoe",
            "Inkpress on Facebook",
            false,
        ),
        SocialEntry::new(
            SocialNetwork::Instagram,
            "https://instagram.com/janedoe",
            "Inkpress on Instagram",
            false,
        ),
        SocialEntry::new(
            SocialNetwork::X,
            "https://x.com/janedoe",
            "Inkpress on X",
            true,
        ),
        SocialEntry::new(
            SocialNetwork::LinkedIn,
            "https://www.linkedin.com/in/janedoe",
            "Inkpress on LinkedIn",
            true,
        ),
        SocialEntry::new(
            SocialNetwork::Mail,
            "mailto:hello@example.com",
            "Send an email to Inkpress",
            true,
        ),
    ]
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_active_socials_preserves_order() {
        let socials = vec![
            SocialEntry::new(SocialNetwork::Github, "https://github.com/a", "a", true),
            SocialEntry::new(SocialNetwork::Facebook, "https://facebook.com/a", "a", false),
            SocialEntry::new(SocialNetwork::X, "https://x.com/a", "a", true),
        ];

        let active: Vec<_> = active_socials(&socials).map(|s| s.name).collect();
        assert_eq!(active, vec![SocialNetwork::Github, SocialNetwork::X]);
    }

    #[test]
    fn test_active_socials_empty() {
        assert_eq!(active_socials(&[]).count(), 0);
    }

    #[test]
    fn test_duplicate_network_rejected() {
        let socials = vec![
            SocialEntry::new(SocialNetwork::Github, "https://github.com/a", "a", true),
            SocialEntry::new(SocialNetwork::Github, "https://github.com/b", "b", false),
        ];

        let mut diag = ConfigDiagnostics::new();
        validate_socials(&socials, &mut diag);
        assert!(diag.contains(ConfigErrorKind::DuplicateKey));
    }

    #[test]
    fn test_invalid_href_rejected() {
        let socials = vec![SocialEntry::new(
            SocialNetwork::Github,
            "github.com/janedoe",
            "a",
            true,
        )];

        let mut diag = ConfigDiagnostics::new();
        validate_socials(&socials, &mut diag);
        assert!(diag.contains(ConfigErrorKind::InvalidUrl));
    }

    #[test]
    fn test_default_socials_are_valid() {
        let mut diag = ConfigDiagnostics::new();
        validate_socials(&default_socials(), &mut diag);
        assert!(diag.is_empty(), "{:?}", diag.errors());
    }

    #[test]
    fn test_parse_socials_list() {
        let config = test_parse_config(
            "[[socials]]\nname = \"Mastodon\"\nhref = \"https://hachyderm.io/@janedoe\"\nlink_title = \"on Mastodon\"\nactive = true\n",
        );
        assert_eq!(config.socials.len(), 1);
        assert_eq!(config.socials[0].name, SocialNetwork::Mastodon);
    }

    #[test]
    fn test_unknown_network_is_parse_error() {
        let toml = "[[socials]]\nname = \"Friendster\"\nhref = \"https://example.com\"\nlink_title = \"t\"\nactive = true\n";
        let result = crate::config::BlogConfig::from_str(toml);
        assert!(result.is_err());
    }
}
