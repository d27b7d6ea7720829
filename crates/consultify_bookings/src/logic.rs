// --- File: crates/consultify_bookings/src/logic.rs ---
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use consultify_common::format_phone_number;
use consultify_config::SchedulingConfig;
use consultify_db::Booking;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug, PartialEq)]
pub enum BookingValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid date format")]
    InvalidTimestamp,
    #[error("start_time must be before end_time")]
    InvertedInterval,
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct BookingsQuery {
    /// When present, respond with the slot grid for this date (YYYY-MM-DD)
    /// instead of the list of upcoming bookings.
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-05"))]
    pub date: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub start_time: String, // ISO 8601 format string
    #[serde(default)]
    pub end_time: String, // ISO 8601 format string
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One 30-minute interval of the daily grid, with its availability verdict.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimeSlot {
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-05-09-30"))]
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub available: bool,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailableSlotsResponse {
    pub slots: Vec<TimeSlot>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct DeleteBookingQuery {
    pub id: Option<i64>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteBookingResponse {
    pub success: bool,
}

// --- Scheduling Window ---

/// Working hours and slot width used to lay out the daily grid. All UTC.
#[derive(Debug, Clone)]
pub struct SchedulingWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_minutes: i64,
    pub working_days: Vec<Weekday>,
}

const DEFAULT_START_HOUR: u32 = 9;
const DEFAULT_END_HOUR: u32 = 17;
const DEFAULT_SLOT_MINUTES: i64 = 30;

impl Default for SchedulingWindow {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            working_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }
}

impl SchedulingWindow {
    /// Builds a window from configuration, falling back to the defaults for
    /// anything absent or out of range.
    pub fn from_config(config: Option<&SchedulingConfig>) -> Self {
        let defaults = Self::default();
        let Some(config) = config else {
            return defaults;
        };

        let start_hour = config
            .work_start_hour
            .filter(|h| *h < 24)
            .unwrap_or(defaults.start_hour);
        let end_hour = config
            .work_end_hour
            .filter(|h| *h <= 24 && *h > start_hour)
            .unwrap_or(defaults.end_hour);
        let slot_minutes = config
            .slot_duration_minutes
            .filter(|m| *m > 0)
            .unwrap_or(defaults.slot_minutes);

        let working_days: Vec<Weekday> = match &config.working_days {
            Some(days) => days
                .iter()
                .filter_map(|day| match day.as_str() {
                    "Mon" => Some(Weekday::Mon),
                    "Tue" => Some(Weekday::Tue),
                    "Wed" => Some(Weekday::Wed),
                    "Thu" => Some(Weekday::Thu),
                    "Fri" => Some(Weekday::Fri),
                    "Sat" => Some(Weekday::Sat),
                    "Sun" => Some(Weekday::Sun),
                    _ => None,
                })
                .collect(),
            None => defaults.working_days.clone(),
        };
        let working_days = if working_days.is_empty() {
            defaults.working_days
        } else {
            working_days
        };

        Self {
            start_hour,
            end_hour,
            slot_minutes,
            working_days,
        }
    }
}

// --- Slot Grid Logic ---

/// Stable external identifier of the slot starting at `start`.
pub fn slot_id_for(start: &DateTime<Utc>) -> String {
    start.format("%Y-%m-%d-%H-%M").to_string()
}

/// Lays out the slot grid for one calendar day.
///
/// A slot is available iff its id is not in `booked` and its start is not
/// before `now`. A day outside the configured working days yields an empty
/// grid. With the default window this is 16 slots covering 09:00-17:00.
pub fn generate_time_slots(
    day: NaiveDate,
    now: DateTime<Utc>,
    booked: &HashSet<String>,
    window: &SchedulingWindow,
) -> Vec<TimeSlot> {
    if !window.working_days.contains(&day.weekday()) {
        return Vec::new();
    }

    let midnight = match day.and_hms_opt(0, 0, 0) {
        Some(naive) => Utc.from_utc_datetime(&naive),
        None => return Vec::new(),
    };
    let day_start = midnight + Duration::hours(i64::from(window.start_hour));
    let day_end = midnight + Duration::hours(i64::from(window.end_hour));
    let step = Duration::minutes(window.slot_minutes);

    let mut slots = Vec::new();
    let mut start = day_start;
    while start + step <= day_end {
        let end = start + step;
        let id = slot_id_for(&start);
        let available = !booked.contains(&id) && start >= now;
        slots.push(TimeSlot {
            id,
            start_time: start,
            end_time: end,
            available,
        });
        start = end;
    }
    slots
}

// --- Booking Validation ---

/// Validates a booking request and shapes it into a persistable record.
///
/// Required fields must be non-blank, the timestamps must parse as RFC3339,
/// and the interval must run forward. The phone number is normalized to the
/// US display format and the slot id is derived from the start time.
pub fn validate_booking_request(
    payload: &CreateBookingRequest,
) -> Result<Booking, BookingValidationError> {
    let required = [
        &payload.start_time,
        &payload.end_time,
        &payload.name,
        &payload.email,
        &payload.phone,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(BookingValidationError::MissingFields);
    }

    let start_time = DateTime::parse_from_rfc3339(&payload.start_time)
        .map_err(|_| BookingValidationError::InvalidTimestamp)?
        .with_timezone(&Utc);
    let end_time = DateTime::parse_from_rfc3339(&payload.end_time)
        .map_err(|_| BookingValidationError::InvalidTimestamp)?
        .with_timezone(&Utc);

    if start_time >= end_time {
        return Err(BookingValidationError::InvertedInterval);
    }

    Ok(Booking {
        id: None,
        slot_id: slot_id_for(&start_time),
        start_time,
        end_time,
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        phone: format_phone_number(&payload.phone),
        notes: payload
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(str::to_string),
        created_at: None,
    })
}
