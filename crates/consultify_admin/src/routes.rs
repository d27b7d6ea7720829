// --- File: crates/consultify_admin/src/routes.rs ---
use crate::handlers::{login_handler, AdminState};
use axum::{routing::post, Router};
use consultify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing the admin login route.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let admin_state = Arc::new(AdminState { config });

    Router::new()
        .route("/admin/login", post(login_handler))
        .with_state(admin_state)
}
