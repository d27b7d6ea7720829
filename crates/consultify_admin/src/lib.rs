// --- File: crates/consultify_admin/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod doc;
pub mod handlers;
pub mod routes;
pub mod token;

pub use auth::{admin_auth_middleware, AdminAuthState};
pub use handlers::AdminState;
pub use routes::routes;
