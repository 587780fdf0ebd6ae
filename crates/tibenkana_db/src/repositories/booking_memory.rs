//! In-memory booking repository
//!
//! Used when no database is configured, and by tests. Contents are lost when
//! the process exits.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::DbError;
use crate::repositories::booking::BookingRepository;
use tibenkana_common::{BookingRecord, BoxFuture};

#[derive(Debug, Default)]
struct Store {
    /// id -> (insertion sequence, booking)
    bookings: HashMap<String, (u64, BookingRecord)>,
    next_seq: u64,
}

/// Bookings kept in a map behind an async lock.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    store: RwLock<Store>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async { Ok(()) })
    }

    fn insert(&self, record: BookingRecord) -> BoxFuture<'_, BookingRecord, DbError> {
        Box::pin(async move {
            let mut store = self.store.write().await;
            if store.bookings.contains_key(&record.id) {
                return Err(DbError::Conflict(record.id));
            }
            let seq = store.next_seq;
            store.next_seq += 1;
            store
                .bookings
                .insert(record.id.clone(), (seq, record.clone()));
            debug!("Stored booking {} in memory", record.id);
            Ok(record)
        })
    }

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<BookingRecord>, DbError> {
        Box::pin(async move {
            let store = self.store.read().await;
            Ok(store.bookings.get(id).map(|(_, record)| record.clone()))
        })
    }

    fn find_all(&self) -> BoxFuture<'_, Vec<BookingRecord>, DbError> {
        Box::pin(async move {
            let store = self.store.read().await;
            let mut entries: Vec<&(u64, BookingRecord)> = store.bookings.values().collect();
            // Newest first; equal timestamps fall back to reverse insertion order
            entries.sort_by(|(seq_a, a), (seq_b, b)| {
                b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
            });
            Ok(entries.into_iter().map(|(_, record)| record.clone()).collect())
        })
    }

    fn count(&self) -> BoxFuture<'_, u64, DbError> {
        Box::pin(async move { Ok(self.store.read().await.bookings.len() as u64) })
    }
}
