//! Repository for bookings
//!
//! Storage is injected into the submission service through this trait. All
//! methods return boxed futures so the repository can be held as
//! `Arc<dyn BookingRepository>`.

use crate::error::DbError;
use tibenkana_common::{BookingRecord, BoxFuture};

pub trait BookingRepository: Send + Sync {
    /// Create the backing table if it does not exist yet.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Store a new booking.
    ///
    /// Ids are unique: inserting an id that is already stored fails with
    /// `DbError::Conflict` and leaves the stored booking untouched.
    fn insert(&self, record: BookingRecord) -> BoxFuture<'_, BookingRecord, DbError>;

    /// Look a booking up by id.
    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<BookingRecord>, DbError>;

    /// All bookings, newest `created_at` first.
    fn find_all(&self) -> BoxFuture<'_, Vec<BookingRecord>, DbError>;

    /// Number of stored bookings.
    fn count(&self) -> BoxFuture<'_, u64, DbError>;
}
