// File: crates/tibenkana_bookings/src/handlers.rs
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::info;

#[cfg(feature = "openapi")]
use crate::logic::ErrorResponse;
use crate::logic::{
    BookingListResponse, BookingService, CreateBookingResponse, BOOKING_CREATED_MESSAGE,
};
use tibenkana_common::{BookingOptions, BookingPayload, TibenkanaError};

// Shared state for the booking handlers
#[derive(Clone)]
pub struct BookingsState {
    pub service: BookingService,
}

/// Handler to create a booking.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings",
    request_body = BookingPayload,
    responses(
        (status = 201, description = "Booking stored", body = CreateBookingResponse),
        (status = 400, description = "Missing or invalid fields, or malformed JSON", body = ErrorResponse),
        (status = 500, description = "Booking could not be stored", body = ErrorResponse),
        (status = 503, description = "Bookings are paused", body = ErrorResponse)
    ),
    tag = "Bookings"
))]
pub async fn create_booking_handler(
    State(state): State<Arc<BookingsState>>,
    payload: Result<Json<BookingPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), TibenkanaError> {
    let Json(payload) =
        payload.map_err(|rejection| TibenkanaError::Validation(rejection.body_text()))?;

    let booking = state.service.submit(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            success: true,
            booking,
            message: BOOKING_CREATED_MESSAGE.to_string(),
        }),
    ))
}

/// Handler to list every booking, newest first.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings",
    responses(
        (status = 200, description = "All bookings, newest first", body = BookingListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Bookings"
))]
pub async fn list_bookings_handler(
    State(state): State<Arc<BookingsState>>,
) -> Result<Json<BookingListResponse>, TibenkanaError> {
    let bookings = state.service.list().await?;
    info!("Listing {} bookings", bookings.len());
    Ok(Json(BookingListResponse {
        count: bookings.len(),
        bookings,
    }))
}

/// Handler returning the service and time-slot catalogs.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings/options",
    responses(
        (status = 200, description = "Catalogs for the booking form", body = BookingOptions)
    ),
    tag = "Bookings"
))]
pub async fn booking_options_handler(
    State(state): State<Arc<BookingsState>>,
) -> Json<BookingOptions> {
    Json(state.service.options())
}
