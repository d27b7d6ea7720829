// File: crates/consultify_contact/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::CreateContactRequest;

#[utoipa::path(
    post,
    path = "/contact",
    request_body(content = CreateContactRequest, example = json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "1234567890",
        "message": "Interested in a data-infrastructure review",
        "contact_preference": "email",
        "preferred_days": ["Mon", "Wed"]
    })),
    responses(
        (status = 200, description = "The saved submission"),
        (status = 400, description = "Missing required fields",
         example = json!("Missing required fields")
        ),
        (status = 500, description = "Persistence failure",
         example = json!("Failed to save contact form.")
        )
    )
)]
fn doc_create_contact_handler() {}

#[utoipa::path(
    get,
    path = "/contact",
    responses(
        (status = 200, description = "All submissions, newest first"),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 500, description = "Fetch failure",
         example = json!("Failed to fetch contact forms.")
        )
    )
)]
fn doc_list_contact_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_create_contact_handler, doc_list_contact_handler),
    components(schemas(CreateContactRequest)),
    tags(
        (name = "contact", description = "Contact form API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct ContactApiDoc;
