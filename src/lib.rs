//! History-backed route table for the ear-trainer single-page app.

pub mod app;
pub mod config;
pub mod history;
pub mod router;
pub mod routing;
pub mod view;

pub use config::RouterConfig;
pub use router::{Outcome, Router};
pub use routing::{RouteDef, RouteTable, RouteTableBuilder};
