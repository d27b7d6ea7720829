// --- File: crates/consultify_contact/src/routes.rs ---

use crate::handlers::{create_contact_handler, list_contact_handler, ContactState};
use axum::{
    routing::{get, post},
    Router,
};
use consultify_config::AppConfig;
use consultify_db::ContactRepository;
use std::sync::Arc;

/// Creates a router containing the public contact routes.
pub fn routes<R>(config: Arc<AppConfig>, repository: R) -> Router
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let state = Arc::new(ContactState { config, repository });

    Router::new()
        .route("/contact", post(create_contact_handler::<R>))
        .with_state(state)
}

/// Creates a router containing the admin-only contact routes.
/// The backend wraps this with the admin auth middleware.
pub fn admin_routes<R>(config: Arc<AppConfig>, repository: R) -> Router
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let state = Arc::new(ContactState { config, repository });

    Router::new()
        .route("/contact", get(list_contact_handler::<R>))
        .with_state(state)
}
