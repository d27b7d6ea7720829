// File: crates/consultify_bookings/src/handlers.rs
use crate::logic::{
    generate_time_slots, validate_booking_request, AvailableSlotsResponse, BookingsQuery,
    CreateBookingRequest, DeleteBookingQuery, DeleteBookingResponse, SchedulingWindow,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{NaiveDate, Utc};
use consultify_config::AppConfig;
use consultify_db::{Booking, BookingRepository, DbError};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{error, info};

// Shared state for the booking handlers
#[derive(Clone)]
pub struct BookingsState<R> {
    pub config: Arc<AppConfig>,
    pub repository: R,
}

/// `GET /bookings` serves two shapes: the slot grid when a `date` query
/// parameter is present, the upcoming-booking list otherwise.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum BookingsListResponse {
    Slots(AvailableSlotsResponse),
    Bookings(Vec<Booking>),
}

/// Handler to create a booking.
pub async fn create_booking_handler<R>(
    State(state): State<Arc<BookingsState<R>>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<Booking>, (StatusCode, String)>
where
    R: BookingRepository + Send + Sync + 'static,
{
    // Ensure the booking feature is enabled via runtime config
    if !state.config.use_bookings {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Booking service is disabled.".to_string(),
        ));
    }

    let booking = validate_booking_request(&payload)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    match state.repository.create(booking).await {
        Ok(created) => {
            info!("Successfully created booking for slot: {}", created.slot_id);
            Ok(Json(created))
        }
        Err(DbError::UniqueViolation(_)) => Err((
            StatusCode::CONFLICT,
            "Requested time slot is no longer available.".to_string(),
        )),
        Err(e) => {
            error!("Failed to create booking: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create booking.".to_string(),
            ))
        }
    }
}

/// Handler to list upcoming bookings, or the slot grid for a given date.
pub async fn list_bookings_handler<R>(
    State(state): State<Arc<BookingsState<R>>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<BookingsListResponse>, (StatusCode, String)>
where
    R: BookingRepository + Send + Sync + 'static,
{
    if !state.config.use_bookings {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Booking service is disabled.".to_string(),
        ));
    }

    if let Some(raw_date) = query.date.as_deref() {
        let day = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                "Invalid date format (YYYY-MM-DD)".to_string(),
            )
        })?;

        let booked: HashSet<String> = match state.repository.list_for_day(day).await {
            Ok(bookings) => bookings.into_iter().map(|b| b.slot_id).collect(),
            Err(e) => {
                error!("Failed to load bookings for {}: {}", day, e);
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to query slot availability.".to_string(),
                ));
            }
        };

        let window = SchedulingWindow::from_config(state.config.scheduling.as_ref());
        let slots = generate_time_slots(day, Utc::now(), &booked, &window);
        return Ok(Json(BookingsListResponse::Slots(AvailableSlotsResponse {
            slots,
        })));
    }

    // The public schedule page keeps rendering when the database is down, so
    // a load failure degrades to an empty list instead of a 500.
    let bookings = match state.repository.list_upcoming(Utc::now()).await {
        Ok(bookings) => bookings,
        Err(e) => {
            error!("Failed to list bookings: {}", e);
            Vec::new()
        }
    };
    Ok(Json(BookingsListResponse::Bookings(bookings)))
}

/// Handler to cancel a booking by id. Admin-gated by the backend router.
pub async fn delete_booking_handler<R>(
    State(state): State<Arc<BookingsState<R>>>,
    Query(query): Query<DeleteBookingQuery>,
) -> Result<Json<DeleteBookingResponse>, (StatusCode, String)>
where
    R: BookingRepository + Send + Sync + 'static,
{
    if !state.config.use_bookings {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Booking service is disabled.".to_string(),
        ));
    }

    let id = query.id.ok_or((
        StatusCode::BAD_REQUEST,
        "Booking ID is required".to_string(),
    ))?;

    match state.repository.delete(id).await {
        Ok(true) => {
            info!("Cancelled booking {}", id);
            Ok(Json(DeleteBookingResponse { success: true }))
        }
        Ok(false) => Err((StatusCode::NOT_FOUND, "Booking not found.".to_string())),
        Err(e) => {
            error!("Failed to delete booking {}: {}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete booking.".to_string(),
            ))
        }
    }
}
