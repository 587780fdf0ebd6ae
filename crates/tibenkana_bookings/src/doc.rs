// File: crates/tibenkana_bookings/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{BookingListResponse, CreateBookingResponse, ErrorResponse};
use tibenkana_common::{
    BookingOptions, BookingPayload, BookingRecord, BookingRequest, BookingStatus, MeetingType,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::create_booking_handler,
        crate::handlers::list_bookings_handler,
        crate::handlers::booking_options_handler
    ),
    components(
        schemas(
            BookingPayload,
            BookingRequest,
            BookingRecord,
            BookingStatus,
            MeetingType,
            BookingOptions,
            CreateBookingResponse,
            BookingListResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Bookings", description = "Appointment booking API")
    ),
    servers(
        (url = "/api", description = "Booking API server")
    )
)]
pub struct BookingsApiDoc;
