// File: crates/consultify_contact/src/handlers.rs
use crate::logic::{validate_contact_request, CreateContactRequest};
use axum::{extract::State, http::StatusCode, response::Json};
use consultify_config::AppConfig;
use consultify_db::{ContactRepository, ContactSubmission};
use std::sync::Arc;
use tracing::{error, info};

// Shared state for the contact handlers
#[derive(Clone)]
pub struct ContactState<R> {
    pub config: Arc<AppConfig>,
    pub repository: R,
}

/// Handler to save a contact-form submission.
pub async fn create_contact_handler<R>(
    State(state): State<Arc<ContactState<R>>>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<Json<ContactSubmission>, (StatusCode, String)>
where
    R: ContactRepository + Send + Sync + 'static,
{
    // Ensure the contact feature is enabled via runtime config
    if !state.config.use_contact {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Contact service is disabled.".to_string(),
        ));
    }

    let submission = validate_contact_request(&payload)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    match state.repository.create(submission).await {
        Ok(created) => {
            info!("Saved contact submission from: {}", created.email);
            Ok(Json(created))
        }
        Err(e) => {
            error!("Failed to save contact form: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save contact form.".to_string(),
            ))
        }
    }
}

/// Handler to list contact submissions, newest first. Admin-gated by the
/// backend router.
pub async fn list_contact_handler<R>(
    State(state): State<Arc<ContactState<R>>>,
) -> Result<Json<Vec<ContactSubmission>>, (StatusCode, String)>
where
    R: ContactRepository + Send + Sync + 'static,
{
    if !state.config.use_contact {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Contact service is disabled.".to_string(),
        ));
    }

    match state.repository.list_all().await {
        Ok(submissions) => Ok(Json(submissions)),
        Err(e) => {
            error!("Failed to fetch contact forms: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch contact forms.".to_string(),
            ))
        }
    }
}
