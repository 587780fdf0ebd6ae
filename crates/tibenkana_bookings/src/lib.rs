// --- File: crates/tibenkana_bookings/src/lib.rs ---
pub mod doc;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod routes;
#[cfg(test)]
mod test_support;

pub use handlers::BookingsState;
pub use logic::{generate_booking_id, validate, BookingService, ValidationPolicy};
pub use routes::routes;
