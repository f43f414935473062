//! View subsystem.
//!
//! # Data Flow
//! ```text
//! Eager route:
//!     ComponentSource::Eager → view handed out directly
//!
//! Lazy route (first visit):
//!     ComponentSource::Lazy
//!         → cache.rs (single-flight, per-load timeout)
//!         → ViewLoader::load() (deferred fetch-and-resolve)
//!         → success cached for the life of the process
//!
//! Lazy route (later visits):
//!     cache hit, no load triggered
//! ```
//!
//! # Design Decisions
//! - Views are opaque trait objects; the router never inspects them
//! - Only successful loads are cached; failures retry on next visit
//! - Concurrent first visits coalesce into one in-flight load

pub mod cache;
pub mod component;

pub use cache::LoaderCache;
pub use component::{ComponentSource, LoadError, StaticView, View, ViewLoader};
