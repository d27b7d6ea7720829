// --- File: crates/services/consultify_backend/src/app_state.rs ---
use consultify_config::AppConfig;
use consultify_db::DbClient;
use std::sync::Arc;

/// Application state shared by the service-level routes.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration, kept here so service-level handlers
    /// added later have a single place to read it from.
    #[allow(dead_code)]
    pub config: Arc<AppConfig>,

    /// Shared database client; the health endpoint pings through it.
    pub db_client: DbClient,
}
