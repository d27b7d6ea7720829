//! Repositories for the Consultify entities
//!
//! Each entity gets a repository trait plus a SQL implementation backed by
//! [`DbClient`](crate::DbClient). Timestamps are stored as RFC3339 text
//! because `DateTime<Utc>` does not decode through the `sqlx::Any` driver.

pub mod booking;
pub mod booking_sql;
pub mod contact;
pub mod contact_sql;

pub use booking::{Booking, BookingRepository};
pub use booking_sql::SqlBookingRepository;
pub use contact::{ContactRepository, ContactSubmission};
pub use contact_sql::SqlContactRepository;

use crate::error::DbError;
use chrono::{DateTime, SecondsFormat, Utc};

/// Renders a timestamp in the canonical stored form.
///
/// Second precision with a `Z` suffix keeps the text representation uniform,
/// so lexicographic ordering in SQL matches chronological ordering.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a stored RFC3339 timestamp back into UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| DbError::DecodeError(format!("invalid timestamp '{}': {}", raw, e)))
}
