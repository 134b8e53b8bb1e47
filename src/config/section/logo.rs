//! `[logo]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [logo]
//! enable = false
//! svg = true
//! width = 216
//! height = 46
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::ensure_positive;
use serde::{Deserialize, Serialize};

/// Header logo image settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Render an image logo instead of the text title.
    pub enable: bool,

    /// The logo asset is an SVG (affects the asset path the renderer uses).
    pub svg: bool,

    /// Rendered width in pixels.
    pub width: u32,

    /// Rendered height in pixels.
    pub height: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enable: false,
            svg: true,
            width: 216,
            height: 46,
        }
    }
}

/// Field paths for diagnostics.
pub struct LogoConfigFields {
    pub width: FieldPath,
    pub height: FieldPath,
}

impl LogoConfig {
    pub const FIELDS: LogoConfigFields = LogoConfigFields {
        width: FieldPath::new("logo.width"),
        height: FieldPath::new("logo.height"),
    };

    /// Validate logo dimensions: zero-sized logos are a config mistake.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        ensure_positive(self.width, Self::FIELDS.width, diag);
        ensure_positive(self.height, Self::FIELDS.height, diag);
    }
}
