//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the base path shape (absolute, no query/fragment)
//! - Validate value ranges (lazy-load timeout > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use crate::config::schema::RouterConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Base path must be absolute (start with '/').
    BasePathNotAbsolute(String),
    /// Base path may not carry a query string or fragment.
    BasePathHasQuery(String),
    /// Lazy-load timeout must be non-zero.
    ZeroLazyLoadTimeout,
    /// Log level is not one of the recognized levels.
    UnknownLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::BasePathNotAbsolute(p) => {
                write!(f, "base path {:?} must start with '/'", p)
            }
            ValidationError::BasePathHasQuery(p) => {
                write!(f, "base path {:?} may not contain '?' or '#'", p)
            }
            ValidationError::ZeroLazyLoadTimeout => {
                write!(f, "lazy_load.timeout_ms must be greater than zero")
            }
            ValidationError::UnknownLogLevel(l) => {
                write!(f, "unknown log level {:?}", l)
            }
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.base.path.starts_with('/') {
        errors.push(ValidationError::BasePathNotAbsolute(config.base.path.clone()));
    }
    if config.base.path.contains('?') || config.base.path.contains('#') {
        errors.push(ValidationError::BasePathHasQuery(config.base.path.clone()));
    }
    if config.lazy_load.timeout_ms == 0 {
        errors.push(ValidationError::ZeroLazyLoadTimeout);
    }
    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
