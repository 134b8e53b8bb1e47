//! Front-matter validation against a collection schema.

use super::collection::ContentCollectionSchema;
use super::field::{FieldDescriptor, FieldKind};
use crate::utils::date::DateTimeUtc;
use serde_json::Value;
use std::fmt;

/// A front-matter record as parsed from a content file.
pub type Record = serde_json::Map<String, Value>;

/// A single validation violation.
///
/// Returned as data, never raised: validation failure is an expected,
/// frequent outcome that the editing surface reports per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Front-matter key of the offending field.
    pub field: String,
    /// Why the value was rejected.
    pub reason: FieldErrorReason,
}

impl FieldError {
    fn new(field: &FieldDescriptor, reason: FieldErrorReason) -> Self {
        Self {
            field: field.name.to_string(),
            reason,
        }
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorReason {
    /// Required field absent from the record.
    Missing,
    /// Required field present but empty (empty string or empty list).
    Empty,
    /// Value does not match the declared field kind.
    TypeMismatch,
    /// Datetime value failed to parse.
    InvalidDatetime,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            FieldErrorReason::Missing => "is required but missing",
            FieldErrorReason::Empty => "is required but empty",
            FieldErrorReason::TypeMismatch => "has the wrong type",
            FieldErrorReason::InvalidDatetime => "is not a valid timestamp",
        };
        write!(f, "`{}` {}", self.field, reason)
    }
}

/// Check `record` against `schema`.
///
/// Deterministic and total: returns one `FieldError` per violating field,
/// an empty vec when the record is valid. Keys in `record` that the
/// schema does not declare are ignored (forward compatibility is the
/// editor's concern, not ours).
pub fn validate_instance(schema: &ContentCollectionSchema, record: &Record) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for field in &schema.fields {
        // The body lives outside front matter.
        if field.is_body {
            continue;
        }

        match record.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    errors.push(FieldError::new(field, FieldErrorReason::Missing));
                }
            }
            Some(value) => check_value(field, value, &mut errors),
        }
    }

    errors
}

/// Check one present value against its descriptor.
fn check_value(field: &FieldDescriptor, value: &Value, errors: &mut Vec<FieldError>) {
    if field.list {
        let Some(items) = value.as_array() else {
            errors.push(FieldError::new(field, FieldErrorReason::TypeMismatch));
            return;
        };
        if field.required && items.is_empty() {
            errors.push(FieldError::new(field, FieldErrorReason::Empty));
            return;
        }
        // One error per field, not per element.
        if let Some(reason) = items.iter().find_map(|item| scalar_violation(field, item)) {
            errors.push(FieldError::new(field, reason));
        }
    } else if field.required && is_empty_string(value) {
        errors.push(FieldError::new(field, FieldErrorReason::Empty));
    } else if let Some(reason) = scalar_violation(field, value) {
        errors.push(FieldError::new(field, reason));
    }
}

/// Why a scalar value violates `field.kind`, if it does.
fn scalar_violation(field: &FieldDescriptor, value: &Value) -> Option<FieldErrorReason> {
    match field.kind {
        FieldKind::String | FieldKind::RichText => {
            (!value.is_string()).then_some(FieldErrorReason::TypeMismatch)
        }
        FieldKind::Boolean => (!value.is_boolean()).then_some(FieldErrorReason::TypeMismatch),
        FieldKind::Datetime => match value.as_str() {
            None => Some(FieldErrorReason::TypeMismatch),
            Some(s) => DateTimeUtc::parse(s)
                .is_none()
                .then_some(FieldErrorReason::InvalidDatetime),
        },
    }
}

fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaRegistry;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn valid_post() -> Record {
        record(json!({
            "title": "Hello World",
            "slug": "hello-world",
            "description": "First post.",
            "featured": true,
            "pub_datetime": "2024-06-15T14:30:45Z",
            "tags": ["rust", "blog"],
        }))
    }

    #[test]
    fn test_valid_post_has_no_errors() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();
        assert!(validate_instance(post, &valid_post()).is_empty());
    }

    #[test]
    fn test_missing_pub_datetime_single_error() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let mut rec = valid_post();
        rec.remove("pub_datetime");

        let errors = validate_instance(post, &rec);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "pub_datetime");
        assert_eq!(errors[0].reason, FieldErrorReason::Missing);
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let mut rec = valid_post();
        rec.remove("featured");
        assert!(validate_instance(post, &rec).is_empty());
    }

    #[test]
    fn test_invalid_datetime() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let mut rec = valid_post();
        rec.insert("pub_datetime".into(), json!("15/06/2024"));

        let errors = validate_instance(post, &rec);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].reason, FieldErrorReason::InvalidDatetime);
    }

    #[test]
    fn test_empty_required_string() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let mut rec = valid_post();
        rec.insert("slug".into(), json!(""));

        let errors = validate_instance(post, &rec);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "slug");
        assert_eq!(errors[0].reason, FieldErrorReason::Empty);
    }

    #[test]
    fn test_empty_required_list() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let mut rec = valid_post();
        rec.insert("tags".into(), json!([]));

        let errors = validate_instance(post, &rec);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tags");
        assert_eq!(errors[0].reason, FieldErrorReason::Empty);
    }

    #[test]
    fn test_list_type_mismatch() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let mut rec = valid_post();
        // scalar where a list is declared
        rec.insert("tags".into(), json!("rust"));
        let errors = validate_instance(post, &rec);
        assert_eq!(errors[0].reason, FieldErrorReason::TypeMismatch);

        // non-string element
        rec.insert("tags".into(), json!(["rust", 42]));
        let errors = validate_instance(post, &rec);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].reason, FieldErrorReason::TypeMismatch);
    }

    #[test]
    fn test_boolean_type_mismatch() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let mut rec = valid_post();
        rec.insert("featured".into(), json!("yes"));

        let errors = validate_instance(post, &rec);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "featured");
        assert_eq!(errors[0].reason, FieldErrorReason::TypeMismatch);
    }

    #[test]
    fn test_null_required_field_counts_as_missing() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let mut rec = valid_post();
        rec.insert("description".into(), Value::Null);

        let errors = validate_instance(post, &rec);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].reason, FieldErrorReason::Missing);
    }

    #[test]
    fn test_undeclared_keys_ignored() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let mut rec = valid_post();
        rec.insert("draft".into(), json!(true));
        assert!(validate_instance(post, &rec).is_empty());
    }

    #[test]
    fn test_multiple_violations_reported_together() {
        let registry = SchemaRegistry::builtin().unwrap();
        let post = registry.get("post").unwrap();

        let rec = record(json!({
            "title": "Hello",
            "tags": [],
        }));

        let errors = validate_instance(post, &rec);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"slug"));
        assert!(fields.contains(&"description"));
        assert!(fields.contains(&"pub_datetime"));
        assert!(fields.contains(&"tags"));
    }

    #[test]
    fn test_page_layout_required() {
        let registry = SchemaRegistry::builtin().unwrap();
        let page = registry.get("page").unwrap();

        let rec = record(json!({ "title": "About" }));
        let errors = validate_instance(page, &rec);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "layout");
        assert_eq!(errors[0].reason, FieldErrorReason::Missing);
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError {
            field: "pub_datetime".into(),
            reason: FieldErrorReason::Missing,
        };
        assert_eq!(format!("{error}"), "`pub_datetime` is required but missing");
    }
}
