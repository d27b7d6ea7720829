// --- File: crates/consultify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via CONSULTIFY_DATABASE__URL
}

// --- Scheduling Config ---
// Working hours and slot width for the consultation grid. All times UTC.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchedulingConfig {
    pub work_start_hour: Option<u32>,       // default 9
    pub work_end_hour: Option<u32>,         // default 17
    pub slot_duration_minutes: Option<i64>, // default 30
    pub working_days: Option<Vec<String>>,  // e.g. ["Mon", "Tue", ...], default Mon-Fri
}

// --- Admin Config ---
// Holds non-secret admin settings. Secrets loaded directly from env vars:
// CONSULTIFY_ADMIN__PASSWORD
// CONSULTIFY_ADMIN__TOKEN_SECRET
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AdminConfig {
    pub password: Option<String>,
    pub token_secret: Option<String>,
    pub session_ttl_minutes: Option<i64>, // default 60
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_bookings: bool,
    #[serde(default)]
    pub use_contact: bool,
    #[serde(default)]
    pub use_admin: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>, // Central DB config
    #[serde(default)]
    pub scheduling: Option<SchedulingConfig>,
    #[serde(default)]
    pub admin: Option<AdminConfig>,
}
