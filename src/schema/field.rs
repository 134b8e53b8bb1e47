//! Typed field descriptors.

use serde::Serialize;

/// Value type of a front-matter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Plain string.
    String,
    /// Boolean flag.
    Boolean,
    /// Timestamp, `YYYY-MM-DD` or RFC 3339.
    Datetime,
    /// Document body content (lives outside front matter).
    RichText,
}

/// One field of a content collection schema.
///
/// Descriptors are static definitions serialized for the editing surface;
/// they are never deserialized back.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// Value type.
    pub kind: FieldKind,

    /// Front-matter key. Unique within the owning schema.
    pub name: &'static str,

    /// Display label for the edit form.
    pub label: &'static str,

    /// Marks the field used as the document title. At most one per schema.
    pub is_title: bool,

    /// Marks the field holding the document body. At most one per schema.
    pub is_body: bool,

    /// Whether the field must be present and non-empty.
    pub required: bool,

    /// The field holds an ordered sequence of scalars of `kind` instead
    /// of a single scalar.
    pub list: bool,
}

impl FieldDescriptor {
    /// An optional scalar field.
    pub const fn new(kind: FieldKind, name: &'static str, label: &'static str) -> Self {
        Self {
            kind,
            name,
            label,
            is_title: false,
            is_body: false,
            required: false,
            list: false,
        }
    }

    /// A required scalar field.
    pub const fn required(kind: FieldKind, name: &'static str, label: &'static str) -> Self {
        let mut field = Self::new(kind, name, label);
        field.required = true;
        field
    }

    /// The schema's title field: a required string shown as the document
    /// title in the editor.
    pub const fn title() -> Self {
        let mut field = Self::required(FieldKind::String, "title", "Title");
        field.is_title = true;
        field
    }

    /// The schema's rich-text body field.
    pub const fn body() -> Self {
        let mut field = Self::new(FieldKind::RichText, "body", "Body");
        field.is_body = true;
        field
    }

    /// Turn the field into a list of its scalar kind.
    pub const fn list(mut self) -> Self {
        self.list = true;
        self
    }
}
