//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → BASE_URL environment override (read once at startup)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → passed explicitly to Router::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never changes
//!   for the life of the process
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, BASE_URL_ENV};
pub use schema::RouterConfig;
