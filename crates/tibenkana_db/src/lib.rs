//! Booking storage for the Tibenkana booking service
//!
//! Bookings are stored through the [`BookingRepository`] trait. A SQL
//! implementation runs on an sqlx `Any` pool (SQLite by default, PostgreSQL
//! with the `postgres` feature); without a configured database the service
//! falls back to [`InMemoryBookingRepository`].
//!
//! ```rust,no_run
//! use tibenkana_db::{BookingRepository, BookingRepositoryFactory, DbClient, RepositoryFactory};
//!
//! async fn open() -> Result<(), tibenkana_db::DbError> {
//!     let client = DbClient::from_url("sqlite://data/bookings.db").await?;
//!     let repo = BookingRepositoryFactory::new().create_repository(client);
//!     repo.init_schema().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;
pub mod repository;

pub use client::DbClient;
pub use error::DbError;
pub use repository::RepositoryFactory;

pub use repositories::{
    BookingRepository, BookingRepositoryFactory, InMemoryBookingRepository, SqlBookingRepository,
};
