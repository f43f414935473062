//! Router subsystem.
//!
//! # Data Flow
//! ```text
//! navigate(external path)
//!     → strip query/fragment, strip base prefix
//!     → routing (table resolution)
//!     → view (eager clone, or cached deferred load)
//!     → commit history entry (newest navigation only)
//!     → publish ActiveView snapshot (arc-swap, lock-free readers)
//!
//! back()/forward()
//!     → step history cursor
//!     → re-activate entry (lazy views come from the cache)
//! ```
//!
//! # Design Decisions
//! - Router is explicitly constructed and passed, never a global
//! - Unmatched paths and failed loads are explicit outcomes with
//!   configurable fallback views, not framework defaults
//! - A navigation overtaken mid-load commits nothing (Superseded); the
//!   finished load still lands in the cache. Back/forward steps count as
//!   navigations and supersede in-flight loads too

pub mod core;

pub use core::{ActiveView, Outcome, Router};
