//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use url::Url;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the base URL prefix.
///
/// Read once at startup. Accepts either a bare path ("/app/") or a full
/// URL ("https://example.com/app/"), of which only the path part is kept.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration.
///
/// Order: file (if given) → `BASE_URL` environment override → validation.
pub fn load_config(path: Option<&Path>) -> Result<RouterConfig, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = fs::read_to_string(p).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => RouterConfig::default(),
    };

    if let Ok(raw) = std::env::var(BASE_URL_ENV) {
        config.base.path = base_path_from(&raw);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Extract a base path from a `BASE_URL` value.
///
/// A full URL contributes only its path component; anything else is taken
/// verbatim as a path.
fn base_path_from(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) if !url.cannot_be_a_base() => url.path().to_string(),
        _ => raw.to_string(),
    }
}
