//! Repository for contact-form submissions

use crate::error::DbError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message submitted through the site's contact form.
///
/// Submissions are immutable once created: the repository offers create and
/// list only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    /// Preferred way of being reached back, e.g. "email" or "phone".
    #[serde(default)]
    pub contact_preference: Option<String>,
    /// Days of the week the requester prefers to be contacted.
    #[serde(default)]
    pub preferred_days: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Repository for contact-form submissions
pub trait ContactRepository {
    /// Initialize the database schema.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Persist a submission, returning it with its id and creation time set.
    fn create(
        &self,
        submission: ContactSubmission,
    ) -> impl std::future::Future<Output = Result<ContactSubmission, DbError>> + Send;

    /// All submissions, newest first.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ContactSubmission>, DbError>> + Send;
}
