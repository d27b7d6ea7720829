// --- File: crates/consultify_contact/src/logic.rs ---
use consultify_common::format_phone_number;
use consultify_db::ContactSubmission;
use serde::Deserialize;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug, PartialEq)]
pub enum ContactValidationError {
    #[error("Missing required fields")]
    MissingFields,
}

// --- Data Structures ---
#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
    /// Preferred way of being reached back, e.g. "email" or "phone".
    #[serde(default)]
    pub contact_preference: Option<String>,
    /// Days of the week the requester prefers to be contacted.
    #[serde(default)]
    pub preferred_days: Option<Vec<String>>,
}

/// Validates a contact-form request and shapes it into a persistable record.
///
/// Name, email, and message must be non-blank; the optional phone number is
/// normalized to the US display format.
pub fn validate_contact_request(
    payload: &CreateContactRequest,
) -> Result<ContactSubmission, ContactValidationError> {
    let required = [&payload.name, &payload.email, &payload.message];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ContactValidationError::MissingFields);
    }

    let phone = payload
        .phone
        .as_deref()
        .map(format_phone_number)
        .filter(|phone| !phone.is_empty());

    Ok(ContactSubmission {
        id: None,
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        phone,
        message: payload.message.trim().to_string(),
        contact_preference: payload
            .contact_preference
            .as_deref()
            .map(str::trim)
            .filter(|preference| !preference.is_empty())
            .map(str::to_string),
        preferred_days: payload.preferred_days.clone().filter(|days| !days.is_empty()),
        created_at: None,
    })
}
