// --- File: crates/consultify_bookings/src/routes.rs ---

use crate::handlers::{
    create_booking_handler, delete_booking_handler, list_bookings_handler, BookingsState,
};
use axum::{
    routing::{delete, get},
    Router,
};
use consultify_config::AppConfig;
use consultify_db::BookingRepository;
use std::sync::Arc;

/// Creates a router containing the public booking routes.
pub fn routes<R>(config: Arc<AppConfig>, repository: R) -> Router
where
    R: BookingRepository + Clone + Send + Sync + 'static,
{
    let state = Arc::new(BookingsState { config, repository });

    Router::new()
        .route(
            "/bookings",
            get(list_bookings_handler::<R>).post(create_booking_handler::<R>),
        )
        .with_state(state)
}

/// Creates a router containing the admin-only booking routes.
/// The backend wraps this with the admin auth middleware.
pub fn admin_routes<R>(config: Arc<AppConfig>, repository: R) -> Router
where
    R: BookingRepository + Clone + Send + Sync + 'static,
{
    let state = Arc::new(BookingsState { config, repository });

    Router::new()
        .route("/bookings", delete(delete_booking_handler::<R>))
        .with_state(state)
}
