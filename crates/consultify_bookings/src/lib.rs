// --- File: crates/consultify_bookings/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod routes;

pub use handlers::BookingsState;
pub use routes::{admin_routes, routes};
