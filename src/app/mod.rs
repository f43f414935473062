//! The ear-trainer application surface: concrete views and the preset
//! route table the router navigates.

pub mod routes;
pub mod views;

pub use routes::route_table;
