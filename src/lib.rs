//! Inkpress - site configuration and content schema for a personal blog.
//!
//! Two independent models, both loaded once and immutable afterwards:
//!
//! - [`config`] - the validated site configuration (`inkpress.toml`):
//!   site identity, locale, logo, social links, and the discussion
//!   widget. Read by the static-site generator at build time.
//! - [`schema`] - content collection schemas consumed by the external
//!   schema-driven editor, plus front-matter instance validation and
//!   content branch resolution.
//!
//! The generator and the editing surface are external consumers; this
//! crate only describes the data they read and validates it once at
//! load.
//!
//! ```ignore
//! let config = BlogConfig::load()?;
//! let registry = SchemaRegistry::builtin()?;
//!
//! let post = registry.get("post")?;
//! let violations = schema::validate_instance(post, &front_matter);
//! ```

pub mod config;
pub mod logger;
pub mod schema;
pub mod utils;

pub use config::{BlogConfig, ConfigError, ConfigErrorKind, cfg, init_config};
pub use schema::{SchemaError, SchemaRegistry};
