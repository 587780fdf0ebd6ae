//! Booking repositories
//!
//! The trait lives in `booking`, with a SQL implementation for configured
//! databases and an in-memory one for everything else.

pub mod booking;
pub mod booking_factory;
pub mod booking_memory;
pub mod booking_sql;

pub use booking::BookingRepository;
pub use booking_factory::BookingRepositoryFactory;
pub use booking_memory::InMemoryBookingRepository;
pub use booking_sql::SqlBookingRepository;
