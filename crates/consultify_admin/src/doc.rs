// File: crates/consultify_admin/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{LoginRequest, LoginResponse};

#[utoipa::path(
    post,
    path = "/admin/login",
    request_body(content = LoginRequest, example = json!({ "password": "..." })),
    responses(
        (status = 200, description = "Session token", body = LoginResponse,
         example = json!({
             "token": "1893456000.q2h8...",
             "expires_at": "2030-06-03T13:00:00Z"
         })
        ),
        (status = 401, description = "Invalid credentials",
         example = json!("Unauthorized: Invalid credentials.")
        ),
        (status = 503, description = "Admin service disabled")
    )
)]
fn doc_login_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_login_handler),
    components(schemas(LoginRequest, LoginResponse)),
    tags(
        (name = "admin", description = "Admin session API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct AdminApiDoc;
