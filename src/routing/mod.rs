//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Table Compilation (at startup):
//!     RouteDef[]
//!         → RouteTableBuilder (preserve declaration order)
//!         → enforce unique paths & names
//!         → freeze as immutable RouteTable
//!
//! Resolution:
//!     navigation path
//!         → normalize (trailing slashes)
//!         → path index lookup
//!         → Return: matched RouteDef or explicit no-match
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same path always matches the same route
//! - Explicit no-match rather than silent default

pub mod table;
pub mod types;

pub use table::{RouteDef, RouteTable, RouteTableBuilder};
pub use types::{RouteId, TableError, TableResult};
