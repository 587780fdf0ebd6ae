// --- File: crates/tibenkana_common/src/services.rs ---
//! Service abstractions shared by the booking crates.
//!
//! Storage lives in `tibenkana-db`; everything the submission service needs
//! besides storage is injected through the traits in this module so that
//! tests can swap in fakes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

use crate::models::BookingRecord;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Boxed future of a notification attempt. Notifications cannot fail the caller.
pub type NotifyFuture<'a> = Pin<Box<dyn Future<Output = NotificationOutcome> + Send + 'a>>;

/// What happened when a booking notification was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum NotificationOutcome {
    /// The email went out to `recipients` addresses.
    Sent {
        recipients: usize,
        calendar_link: bool,
    },
    /// Nothing was sent, e.g. because the mail transport is not configured.
    Skipped { reason: String },
    /// The transport rejected the message. Already logged, never retried.
    Failed { reason: String },
}

/// Sends the "new booking" notification for a persisted booking.
///
/// Best effort: implementations log and report failures through
/// [`NotificationOutcome::Failed`] and do not retry.
pub trait BookingNotifier: Send + Sync {
    fn notify<'a>(&'a self, booking: &'a BookingRecord) -> NotifyFuture<'a>;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
