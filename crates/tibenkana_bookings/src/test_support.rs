//! Fakes shared by the unit tests of this crate.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::mpsc;

use crate::logic::BookingService;
use tibenkana_common::{
    BookingNotifier, BookingPayload, BookingRecord, BoxFuture, Clock, NotificationOutcome,
    NotifyFuture,
};
use tibenkana_config::BookingsConfig;
use tibenkana_db::{BookingRepository, DbError, InMemoryBookingRepository};

/// A clock that advances by `step_ms` every time it is read.
pub struct SteppingClock {
    start: DateTime<Utc>,
    step_ms: i64,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step_ms: i64) -> Self {
        Self {
            start,
            step_ms,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + chrono::Duration::milliseconds(tick * self.step_ms)
    }
}

/// 2024-06-15 08:00:00.123 UTC.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap() + chrono::Duration::milliseconds(123)
}

/// Forwards every notified booking id to a channel.
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl BookingNotifier for ChannelNotifier {
    fn notify<'a>(&'a self, booking: &'a BookingRecord) -> NotifyFuture<'a> {
        Box::pin(async move {
            let _ = self.sender.send(booking.id.clone());
            NotificationOutcome::Failed {
                reason: "fake transport always fails".to_string(),
            }
        })
    }
}

/// A repository whose writes always fail.
pub struct BrokenRepository;

impl BookingRepository for BrokenRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async { Ok(()) })
    }

    fn insert(&self, _record: BookingRecord) -> BoxFuture<'_, BookingRecord, DbError> {
        Box::pin(async { Err(DbError::QueryError("disk I/O error".to_string())) })
    }

    fn find_by_id<'a>(&'a self, _id: &'a str) -> BoxFuture<'a, Option<BookingRecord>, DbError> {
        Box::pin(async { Ok(None) })
    }

    fn find_all(&self) -> BoxFuture<'_, Vec<BookingRecord>, DbError> {
        Box::pin(async { Err(DbError::QueryError("no such table: bookings".to_string())) })
    }

    fn count(&self) -> BoxFuture<'_, u64, DbError> {
        Box::pin(async { Ok(0) })
    }
}

pub struct Harness {
    pub service: BookingService,
    pub repository: Arc<InMemoryBookingRepository>,
    pub notified: mpsc::UnboundedReceiver<String>,
}

pub fn harness_with(config: BookingsConfig) -> Harness {
    let repository = Arc::new(InMemoryBookingRepository::new());
    let (notifier, notified) = ChannelNotifier::new();
    let service = BookingService::new(
        repository.clone(),
        Some(Arc::new(notifier)),
        Arc::new(SteppingClock::new(start_time(), 1)),
        config,
    );
    Harness {
        service,
        repository,
        notified,
    }
}

pub fn harness() -> Harness {
    harness_with(BookingsConfig::default())
}

pub fn broken_service() -> BookingService {
    BookingService::new(
        Arc::new(BrokenRepository),
        None,
        Arc::new(SteppingClock::new(start_time(), 1)),
        BookingsConfig::default(),
    )
}

/// The booking from the product walkthrough: an online export-readiness session.
pub fn scenario_payload() -> BookingPayload {
    BookingPayload {
        service: Some("Export Readiness & Standards Compliance".to_string()),
        group_size: Some(2),
        meeting_type: Some("online".to_string()),
        location: None,
        name: Some("A".to_string()),
        email: Some("a@b.com".to_string()),
        phone: Some("123".to_string()),
        date: Some("2024-07-01".to_string()),
        time: Some("10:00".to_string()),
    }
}

pub async fn next_notification(receiver: &mut mpsc::UnboundedReceiver<String>) -> Option<String> {
    tokio::time::timeout(Duration::from_secs(2), receiver.recv())
        .await
        .ok()
        .flatten()
}
