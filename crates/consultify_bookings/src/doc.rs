// File: crates/consultify_bookings/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AvailableSlotsResponse, BookingsQuery, CreateBookingRequest, DeleteBookingResponse, TimeSlot,
};

#[utoipa::path(
    get,
    path = "/bookings",
    params(
        ("date" = Option<String>, Query, description = "Return the slot grid for this date (YYYY-MM-DD) instead of the booking list", example = "2025-05-05")
    ),
    responses(
        (status = 200, description = "Upcoming bookings, or the slot grid when a date is given", body = AvailableSlotsResponse),
        (status = 400, description = "Invalid date format",
         example = json!("Invalid date format (YYYY-MM-DD)")
        ),
        (status = 503, description = "Booking service disabled")
    )
)]
fn doc_list_bookings_handler() {}

#[utoipa::path(
    post,
    path = "/bookings",
    request_body(content = CreateBookingRequest, example = json!({
        "start_time": "2025-05-05T09:30:00Z",
        "end_time": "2025-05-05T10:00:00Z",
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "1234567890",
        "notes": "First consultation"
    })),
    responses(
        (status = 200, description = "The created booking"),
        (status = 400, description = "Missing or malformed field",
         example = json!("Missing required fields")
        ),
        (status = 409, description = "Slot already booked",
         example = json!("Requested time slot is no longer available.")
        ),
        (status = 500, description = "Persistence failure",
         example = json!("Failed to create booking.")
        )
    )
)]
fn doc_create_booking_handler() {}

#[utoipa::path(
    delete,
    path = "/bookings",
    params(
        ("id" = i64, Query, description = "The id of the booking to cancel")
    ),
    responses(
        (status = 200, description = "Cancellation result", body = DeleteBookingResponse,
         example = json!({ "success": true })
        ),
        (status = 400, description = "Missing booking id",
         example = json!("Booking ID is required")
        ),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 404, description = "Booking not found",
         example = json!("Booking not found.")
        )
    )
)]
fn doc_delete_booking_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_bookings_handler,
        doc_create_booking_handler,
        doc_delete_booking_handler
    ),
    components(
        schemas(
            BookingsQuery,
            CreateBookingRequest,
            TimeSlot,
            AvailableSlotsResponse,
            DeleteBookingResponse
        )
    ),
    tags(
        (name = "bookings", description = "Consultation booking API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct BookingsApiDoc;
