//! Route identifiers and table construction errors.

use thiserror::Error;

/// Index of a route within its table, used for cross-references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub usize);

impl From<usize> for RouteId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl From<RouteId> for usize {
    fn from(id: RouteId) -> Self {
        id.0
    }
}

/// Errors that can occur while building a route table.
///
/// Duplicates are hard construction errors, never silent overwrites.
#[derive(Debug, Error)]
pub enum TableError {
    /// Two definitions declare the same path.
    #[error("duplicate route path {path:?}")]
    DuplicatePath { path: String },

    /// Two definitions declare the same name.
    #[error("duplicate route name {name:?}")]
    DuplicateName { name: String },

    /// A path pattern was rejected by the matcher.
    #[error("invalid route path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// The table declares no routes at all.
    #[error("route table is empty")]
    Empty,
}

/// Result type for table construction.
pub type TableResult<T> = Result<T, TableError>;
