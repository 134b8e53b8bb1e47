//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads and atomic replacement. Readers
//! may hold the `Arc` across the whole render; hosted environments that
//! re-inject environment-derived values swap in a freshly loaded config
//! on restart without coordinating with readers.
//!
//! The handle is a convenience for deeply nested consumers. The primary
//! API is the explicitly passed [`BlogConfig`] value - prefer passing it
//! down where practical.

use crate::config::BlogConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<BlogConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(BlogConfig::default()));

/// Current process-wide config.
#[inline]
pub fn cfg() -> Arc<BlogConfig> {
    CONFIG.load_full()
}

/// Install `config` as the process-wide instance.
///
/// Called once at startup; calling it again replaces the instance
/// atomically (configuration reload in hosted environments).
#[inline]
pub fn init_config(config: BlogConfig) -> Arc<BlogConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_read() {
        let mut config = BlogConfig::default();
        config.site.title = "handle test".into();

        let installed = init_config(config);
        let read = cfg();

        assert_eq!(read.site.title, "handle test");
        assert!(Arc::ptr_eq(&installed, &read));
    }
}
