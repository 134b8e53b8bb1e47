//! Content collection schemas for the external editing surface.
//!
//! The schema model mirrors the config model: static definitions, built
//! once, immutable afterwards. A schema-driven editor reads the
//! descriptors to generate edit forms; [`validate_instance`] checks a
//! content file's front matter against its collection before the editor
//! persists it.
//!
//! # Module Structure
//!
//! | Module       | Purpose                                     |
//! |--------------|---------------------------------------------|
//! | `branch`     | Content branch resolution                   |
//! | `collection` | Collection schemas and builtin definitions  |
//! | `field`      | Typed field descriptors                     |
//! | `validate`   | Front-matter instance validation            |

mod branch;
mod collection;
mod field;
mod validate;

pub use branch::{DEFAULT_BRANCH, branch_from_env, resolve_branch};
pub use collection::ContentCollectionSchema;
pub use field::{FieldDescriptor, FieldKind};
pub use validate::{FieldError, FieldErrorReason, Record, validate_instance};

use crate::config::types::{ConfigDiagnostics, ConfigError, ConfigErrorKind, FieldPath};
use anyhow::Result;
use thiserror::Error;

/// Schema lookup errors.
///
/// Unlike config errors these are recoverable - callers typically skip
/// content files that claim an unknown collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown content collection `{0}`")]
    NotFound(String),
}

/// Registry of named content collection schemas.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    collections: Vec<ContentCollectionSchema>,
}

impl SchemaRegistry {
    /// Build a registry, enforcing structural invariants on every
    /// collection. Violations are fatal: a malformed schema would
    /// produce a broken editing surface.
    pub fn new(collections: Vec<ContentCollectionSchema>) -> Result<Self> {
        let mut diag = ConfigDiagnostics::new();

        let mut seen = rustc_hash::FxHashSet::default();
        for schema in &collections {
            if !seen.insert(schema.name) {
                diag.error(
                    ConfigErrorKind::DuplicateKey,
                    FieldPath::new("schema.name"),
                    format!("duplicate collection `{}`", schema.name),
                );
            }
            schema.check(&mut diag);
        }

        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(Self { collections })
    }

    /// The built-in `page` and `post` collections.
    pub fn builtin() -> Result<Self> {
        Self::new(vec![collection::page(), collection::post()])
    }

    /// Look up a collection schema by name.
    pub fn get(&self, name: &str) -> Result<&ContentCollectionSchema, SchemaError> {
        self.collections
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// All registered collections, in registration order.
    pub fn collections(&self) -> &[ContentCollectionSchema] {
        &self.collections
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = SchemaRegistry::builtin().unwrap();
        let names: Vec<_> = registry.collections().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["page", "post"]);
    }

    #[test]
    fn test_get_post_schema() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        assert_eq!(post.title_field().map(|f| f.name), Some("title"));
        assert_eq!(post.body_field().map(|f| f.name), Some("body"));
    }

    #[test]
    fn test_get_unknown_collection() {
        let registry = SchemaRegistry::builtin().unwrap();
        let err = registry.get("unknown").unwrap_err();
        assert_eq!(err, SchemaError::NotFound("unknown".to_string()));
    }

    #[test]
    fn test_duplicate_collection_rejected() {
        let result = SchemaRegistry::new(vec![
            ContentCollectionSchema {
                name: "post",
                label: "Posts",
                fields: vec![FieldDescriptor::title()],
            },
            ContentCollectionSchema {
                name: "post",
                label: "Posts Again",
                fields: vec![FieldDescriptor::title()],
            },
        ]);
        assert!(result.is_err());
    }
}
