//! Content collection schemas and the builtin definitions.

use super::field::{FieldDescriptor, FieldKind};
use crate::config::types::{ConfigDiagnostics, ConfigErrorKind, FieldPath};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// A named, ordered set of field descriptors describing one content
/// collection: its front matter plus a single body field.
#[derive(Debug, Clone, Serialize)]
pub struct ContentCollectionSchema {
    /// Registry key, e.g. `"post"`.
    pub name: &'static str,

    /// Display name for the editing surface.
    pub label: &'static str,

    /// Fields, in edit-form display order.
    pub fields: Vec<FieldDescriptor>,
}

impl ContentCollectionSchema {
    /// The field flagged `is_title`, if any.
    pub fn title_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.is_title)
    }

    /// The field flagged `is_body`, if any.
    pub fn body_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.is_body)
    }

    /// Look up a field by front-matter key.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Enforce structural invariants.
    ///
    /// # Checks
    /// - field names are unique within the schema
    /// - at most one field is flagged `is_title`
    /// - at most one field is flagged `is_body`
    pub(super) fn check(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for field in &self.fields {
            if !seen.insert(field.name) {
                diag.error(
                    ConfigErrorKind::DuplicateKey,
                    FieldPath::new("schema.fields.name"),
                    format!("duplicate field `{}` in collection `{}`", field.name, self.name),
                );
            }
        }

        if self.fields.iter().filter(|f| f.is_title).count() > 1 {
            diag.error(
                ConfigErrorKind::DuplicateKey,
                FieldPath::new("schema.fields.is_title"),
                format!("collection `{}` flags more than one title field", self.name),
            );
        }

        if self.fields.iter().filter(|f| f.is_body).count() > 1 {
            diag.error(
                ConfigErrorKind::DuplicateKey,
                FieldPath::new("schema.fields.is_body"),
                format!("collection `{}` flags more than one body field", self.name),
            );
        }
    }
}

// ============================================================================
// builtin collections
// ============================================================================

/// Static pages: a title, a layout to render with, and the body.
pub(super) fn page() -> ContentCollectionSchema {
    ContentCollectionSchema {
        name: "page",
        label: "Pages",
        fields: vec![
            FieldDescriptor::title(),
            FieldDescriptor::required(FieldKind::String, "layout", "Layout"),
            FieldDescriptor::body(),
        ],
    }
}

/// Dated blog posts.
pub(super) fn post() -> ContentCollectionSchema {
    ContentCollectionSchema {
        name: "post",
        label: "Posts",
        fields: vec![
            FieldDescriptor::title(),
            FieldDescriptor::required(FieldKind::String, "slug", "Slug"),
            FieldDescriptor::required(FieldKind::String, "description", "Metatag - description"),
            FieldDescriptor::new(FieldKind::Boolean, "featured", "Featured (Show on Top)"),
            FieldDescriptor::required(FieldKind::Datetime, "pub_datetime", "Publication Datetime"),
            FieldDescriptor::required(FieldKind::String, "tags", "Tags").list(),
            FieldDescriptor::body(),
        ],
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shape() {
        let page = page();
        assert_eq!(page.title_field().map(|f| f.name), Some("title"));
        assert_eq!(page.body_field().map(|f| f.name), Some("body"));
        assert!(page.field("layout").is_some_and(|f| f.required));
    }

    #[test]
    fn test_post_shape() {
        let post = post();
        // exactly one title and one body field
        assert_eq!(post.fields.iter().filter(|f| f.is_title).count(), 1);
        assert_eq!(post.fields.iter().filter(|f| f.is_body).count(), 1);

        let tags = post.field("tags").unwrap();
        assert!(tags.list);
        assert!(tags.required);
        assert_eq!(tags.kind, FieldKind::String);

        let featured = post.field("featured").unwrap();
        assert!(!featured.required);
        assert_eq!(featured.kind, FieldKind::Boolean);

        let pub_datetime = post.field("pub_datetime").unwrap();
        assert_eq!(pub_datetime.kind, FieldKind::Datetime);
    }

    #[test]
    fn test_builtin_collections_pass_checks() {
        for schema in [page(), post()] {
            let mut diag = ConfigDiagnostics::new();
            schema.check(&mut diag);
            assert!(diag.is_empty(), "{}: {:?}", schema.name, diag.errors());
        }
    }

    #[test]
    fn test_duplicate_field_name_detected() {
        let schema = ContentCollectionSchema {
            name: "broken",
            label: "Broken",
            fields: vec![
                FieldDescriptor::new(FieldKind::String, "slug", "Slug"),
                FieldDescriptor::new(FieldKind::String, "slug", "Slug Again"),
            ],
        };

        let mut diag = ConfigDiagnostics::new();
        schema.check(&mut diag);
        assert!(diag.contains(ConfigErrorKind::DuplicateKey));
    }

    #[test]
    fn test_double_title_detected() {
        let schema = ContentCollectionSchema {
            name: "broken",
            label: "Broken",
            fields: vec![
                FieldDescriptor::title(),
                {
                    let mut f = FieldDescriptor::new(FieldKind::String, "subtitle", "Subtitle");
                    f.is_title = true;
                    f
                },
            ],
        };

        let mut diag = ConfigDiagnostics::new();
        schema.check(&mut diag);
        assert!(diag.contains(ConfigErrorKind::DuplicateKey));
    }
}
