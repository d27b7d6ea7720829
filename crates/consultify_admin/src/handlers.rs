// File: crates/consultify_admin/src/handlers.rs
use crate::token::issue_token;
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{DateTime, Duration, Utc};
use consultify_config::AppConfig;
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

// Shared state for the admin handlers
#[derive(Clone)]
pub struct AdminState {
    pub config: Arc<AppConfig>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Handler to verify the admin credential and issue a session token.
#[axum::debug_handler]
pub async fn login_handler(
    State(state): State<Arc<AdminState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    // Ensure the admin feature is enabled via runtime config
    if !state.config.use_admin {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Admin service is disabled.".to_string(),
        ));
    }

    let admin_config = state.config.admin.as_ref().ok_or_else(|| {
        info!("Admin configuration missing in AppConfig.");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: admin config missing.".to_string(),
        )
    })?;
    let expected_password = admin_config.password.as_ref().ok_or_else(|| {
        info!("Admin password missing in AdminConfig.");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: admin password missing.".to_string(),
        )
    })?;
    let token_secret = admin_config.token_secret.as_ref().ok_or_else(|| {
        info!("Admin token secret missing in AdminConfig.");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: admin token secret missing.".to_string(),
        )
    })?;

    if !constant_time_eq(payload.password.as_bytes(), expected_password.as_bytes()) {
        warn!("Admin login attempt with invalid credentials");
        return Err((
            StatusCode::UNAUTHORIZED,
            "Unauthorized: Invalid credentials.".to_string(),
        ));
    }

    let ttl = Duration::minutes(
        admin_config
            .session_ttl_minutes
            .filter(|minutes| *minutes > 0)
            .unwrap_or(DEFAULT_SESSION_TTL_MINUTES),
    );
    let (token, expires_at) = issue_token(token_secret, ttl, Utc::now());

    info!("Admin session issued, expires at {}", expires_at);
    Ok(Json(LoginResponse { token, expires_at }))
}
