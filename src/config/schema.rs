//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Base path settings (URL prefix the app is served under).
    pub base: BaseConfig,

    /// Route table settings.
    pub routes: RoutesConfig,

    /// Lazy component loading settings.
    pub lazy_load: LazyLoadConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Base path configuration.
///
/// The base path is the URL prefix the application is mounted under.
/// Navigation targets are resolved relative to it; a target outside the
/// prefix never matches a route.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BaseConfig {
    /// URL path prefix (e.g., "/" or "/app/").
    pub path: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
        }
    }
}

/// Route table configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Include the lazily loaded about route.
    ///
    /// The application shipped in two revisions: one with an `/about`
    /// route and one without. This flag selects between them.
    pub about_enabled: bool,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            about_enabled: true,
        }
    }
}

/// Lazy component loading configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LazyLoadConfig {
    /// Maximum time a single deferred load may take, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for LazyLoadConfig {
    fn default() -> Self {
        Self { timeout_ms: 5_000 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.base.path, "/");
        assert!(config.routes.about_enabled);
        assert_eq!(config.lazy_load.timeout_ms, 5_000);
    }

    #[test]
    fn test_minimal_toml() {
        let config: RouterConfig = toml::from_str("[routes]\nabout_enabled = false\n").unwrap();
        assert!(!config.routes.about_enabled);
        assert_eq!(config.base.path, "/");
    }
}
