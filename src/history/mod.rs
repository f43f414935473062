//! History subsystem.
//!
//! # Responsibilities
//! - Keep the ordered list of committed navigations
//! - Track the cursor for back/forward stepping
//! - Expose a serializable snapshot for diagnostics
//!
//! # Design Decisions
//! - Mirrors the browser model: push drops the forward branch
//! - Entries store the external path (base prefix included) so each one
//!   is a shareable address
//! - The stack itself is dumb storage; re-resolution on back/forward is
//!   the router's job

pub mod stack;

pub use stack::{History, HistoryEntry, HistorySnapshot};
