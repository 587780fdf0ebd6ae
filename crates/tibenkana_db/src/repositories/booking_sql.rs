//! SQL implementation of the booking repository
//!
//! Dates and timestamps are stored as text so the same statements work
//! through the `Any` driver on SQLite and PostgreSQL. `created_at` is written
//! as RFC 3339 UTC with millisecond precision, which keeps lexical order equal
//! to chronological order.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

use crate::error::DbError;
use crate::repositories::booking::BookingRepository;
use crate::DbClient;
use tibenkana_common::{BookingRecord, BookingRequest, BoxFuture};

// The Any driver cannot decode NULL text, so a missing location reads back as ''
const SELECT_COLUMNS: &str = "id, service, group_size, meeting_type, \
                              COALESCE(location, '') AS location, name, email, \
                              phone, booking_date, booking_time, created_at, status";

/// SQL implementation of the booking repository
#[derive(Debug, Clone)]
pub struct SqlBookingRepository {
    db_client: DbClient,
}

impl SqlBookingRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    async fn insert_record(&self, record: BookingRecord) -> Result<BookingRecord, DbError> {
        debug!("Inserting booking {}", record.id);

        let query = r#"
            INSERT INTO bookings (id, service, group_size, meeting_type, location, name, email,
                                  phone, booking_date, booking_time, created_at, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#;

        let request = &record.request;
        let result = sqlx::query(query)
            .bind(&record.id)
            .bind(&request.service)
            .bind(i64::from(request.group_size))
            .bind(request.meeting_type.as_str())
            .bind(request.location.clone())
            .bind(&request.name)
            .bind(&request.email)
            .bind(&request.phone)
            .bind(request.date.format("%Y-%m-%d").to_string())
            .bind(&request.time)
            .bind(format_timestamp(&record.created_at))
            .bind(record.status.as_str())
            .execute(self.db_client.pool())
            .await;

        match result {
            Ok(_) => {
                info!("Booking {} stored", record.id);
                Ok(record)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DbError::Conflict(record.id))
            }
            Err(e) => {
                error!("Failed to insert booking {}: {}", record.id, e);
                Err(DbError::QueryError(e.to_string()))
            }
        }
    }

    async fn select_by_id(&self, id: &str) -> Result<Option<BookingRecord>, DbError> {
        let query = format!("SELECT {} FROM bookings WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find booking {}: {}", id, e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn select_all(&self) -> Result<Vec<BookingRecord>, DbError> {
        let query = format!(
            "SELECT {} FROM bookings ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list bookings: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(row_to_record).collect()
    }

    async fn select_count(&self) -> Result<u64, DbError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM bookings")
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        let total: i64 = row.try_get("total")?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}

impl BookingRepository for SqlBookingRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing booking schema");

            let query = r#"
                CREATE TABLE IF NOT EXISTS bookings (
                    id TEXT PRIMARY KEY,
                    service TEXT NOT NULL,
                    group_size BIGINT NOT NULL,
                    meeting_type TEXT NOT NULL,
                    location TEXT,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    phone TEXT NOT NULL,
                    booking_date TEXT NOT NULL,
                    booking_time TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    status TEXT NOT NULL
                )
            "#;
            self.db_client.execute(query).await?;

            info!("Booking schema initialized successfully");
            Ok(())
        })
    }

    fn insert(&self, record: BookingRecord) -> BoxFuture<'_, BookingRecord, DbError> {
        Box::pin(self.insert_record(record))
    }

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<BookingRecord>, DbError> {
        Box::pin(self.select_by_id(id))
    }

    fn find_all(&self) -> BoxFuture<'_, Vec<BookingRecord>, DbError> {
        Box::pin(self.select_all())
    }

    fn count(&self) -> BoxFuture<'_, u64, DbError> {
        Box::pin(self.select_count())
    }
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn row_to_record(row: &AnyRow) -> Result<BookingRecord, DbError> {
    let id: String = row.try_get("id")?;
    let decode = |what: &str, detail: String| {
        DbError::DecodeError(format!("booking {}: bad {}: {}", id, what, detail))
    };

    let group_size: i64 = row.try_get("group_size")?;
    let meeting_type: String = row.try_get("meeting_type")?;
    let booking_date: String = row.try_get("booking_date")?;
    let created_at: String = row.try_get("created_at")?;
    let status: String = row.try_get("status")?;
    let location: String = row.try_get("location")?;

    let request = BookingRequest {
        service: row.try_get("service")?,
        group_size: u32::try_from(group_size)
            .map_err(|e| decode("group_size", e.to_string()))?,
        meeting_type: meeting_type
            .parse()
            .map_err(|e: String| decode("meeting_type", e))?,
        location: Some(location).filter(|l| !l.is_empty()),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        date: NaiveDate::parse_from_str(&booking_date, "%Y-%m-%d")
            .map_err(|e| decode("booking_date", e.to_string()))?,
        time: row.try_get("booking_time")?,
    };

    Ok(BookingRecord {
        id: id.clone(),
        request,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| decode("created_at", e.to_string()))?
            .with_timezone(&Utc),
        status: status.parse().map_err(|e: String| decode("status", e))?,
    })
}
