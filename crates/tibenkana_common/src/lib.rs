// --- File: crates/tibenkana_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Booking data model
pub mod services; // Injected service abstractions

// Re-export error types and utilities for easier access
pub use error::{config_error, Context, HttpStatusCode, TibenkanaError};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_from_config, init_with_level, log_result};

pub use models::{
    BookingOptions, BookingPayload, BookingRecord, BookingRequest, BookingStatus, MeetingType,
};
pub use services::{
    BookingNotifier, BoxFuture, Clock, NotificationOutcome, NotifyFuture, SystemClock,
};
