// --- File: crates/tibenkana_bookings/src/routes.rs ---

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::{
    booking_options_handler, create_booking_handler, list_bookings_handler, BookingsState,
};
use crate::logic::BookingService;

/// Creates a router containing all booking routes.
pub fn routes(service: BookingService) -> Router {
    let state = Arc::new(BookingsState { service });

    Router::new()
        .route(
            "/bookings",
            get(list_bookings_handler).post(create_booking_handler),
        )
        .route("/bookings/options", get(booking_options_handler))
        .with_state(state)
}
