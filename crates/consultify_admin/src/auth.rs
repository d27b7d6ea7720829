// --- File: crates/consultify_admin/src/auth.rs ---

use crate::token::verify_token;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use consultify_config::AppConfig;
use std::sync::Arc;
use tracing::{error, warn};

// The state that this auth middleware will have access to.
// It needs the AppConfig to get the token-signing secret.
#[derive(Clone)]
pub struct AdminAuthState {
    pub config: Arc<AppConfig>,
}

const BEARER_PREFIX: &str = "Bearer ";

/// Axum middleware to authenticate admin requests.
/// Checks for a valid session token in the `Authorization: Bearer` header.
pub async fn admin_auth_middleware(
    State(auth_state): State<Arc<AdminAuthState>>,
    req: Request,
    next: Next,
) -> Response {
    // 1. Get the token-signing secret from config
    let token_secret = match auth_state
        .config
        .admin
        .as_ref()
        .and_then(|admin| admin.token_secret.clone())
    {
        Some(secret) => secret,
        None => {
            error!("Admin token secret not configured in AppConfig");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error for admin auth.".to_string(),
            )
                .into_response();
        }
    };

    // 2. Get the token from the request header
    let provided_token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX));

    // 3. Validate the token
    match provided_token {
        Some(token) => match verify_token(&token_secret, token, Utc::now()) {
            Ok(()) => next.run(req).await,
            Err(e) => {
                warn!("Admin request rejected: {}", e);
                (
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized: Invalid credentials.".to_string(),
                )
                    .into_response()
            }
        },
        None => {
            warn!("Admin request missing bearer token");
            (
                StatusCode::UNAUTHORIZED,
                "Unauthorized: Missing Authorization header.".to_string(),
            )
                .into_response()
        }
    }
}
