//! Repository for consultation bookings
//!
//! This module provides a generic interface for storing and retrieving
//! confirmed consultation bookings in the database.

use crate::error::DbError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A confirmed reservation of one consultation slot by a named requester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Option<i64>,
    /// Stable external identifier of the reserved slot (`YYYY-MM-DD-HH-MM`).
    pub slot_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Repository for consultation bookings
///
/// The `UNIQUE(slot_id)` constraint behind [`create`](BookingRepository::create)
/// is what makes slot reservation atomic: two concurrent submissions for the
/// same slot race on the insert itself, and the loser gets
/// [`DbError::UniqueViolation`].
pub trait BookingRepository {
    /// Initialize the database schema.
    ///
    /// Creates the bookings table if it doesn't already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Persist a booking, returning it with its id and creation time set.
    ///
    /// # Errors
    ///
    /// [`DbError::UniqueViolation`] when the slot is already booked.
    fn create(
        &self,
        booking: Booking,
    ) -> impl std::future::Future<Output = Result<Booking, DbError>> + Send;

    /// Find a booking by its id.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Booking>, DbError>> + Send;

    /// All bookings starting at or after `now`, ascending by start time.
    fn list_upcoming(
        &self,
        now: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<Vec<Booking>, DbError>> + Send;

    /// All bookings whose slot falls on the given calendar day.
    fn list_for_day(
        &self,
        day: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Vec<Booking>, DbError>> + Send;

    /// Delete a booking by id.
    ///
    /// Returns `true` if a booking was deleted, `false` if no booking with
    /// that id existed.
    fn delete(&self, id: i64) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;
}
