// File: crates/tibenkana_bookings/src/logic.rs
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use tibenkana_common::{
    logging::log_result, BookingNotifier, BookingOptions, BookingPayload, BookingRecord,
    BookingRequest, Clock, MeetingType, NotificationOutcome, TibenkanaError,
};
use tibenkana_config::BookingsConfig;
use tibenkana_db::BookingRepository;

/// Field names that must be present on every booking, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "service",
    "groupSize",
    "meetingType",
    "name",
    "email",
    "phone",
    "date",
    "time",
];

pub const BOOKING_CREATED_MESSAGE: &str = "Appointment booked successfully";

pub const MAINTENANCE_MESSAGE: &str =
    "Bookings are temporarily paused while we update our calendar. Please try again shortly.";

// --- API response types ---

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking: BookingRecord,
    pub message: String,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingRecord>,
    pub count: usize,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Missing required fields: phone"))]
    pub error: String,
}

/// The rules a payload is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub max_group_size: u32,
    pub require_location_for_physical: bool,
}

impl From<&BookingsConfig> for ValidationPolicy {
    fn from(config: &BookingsConfig) -> Self {
        Self {
            max_group_size: config.max_group_size,
            require_location_for_physical: config.require_location_for_physical,
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::from(&BookingsConfig::default())
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Names of the required fields that are absent, empty, or (for the group size) zero.
/// Whitespace counts as a value.
pub fn missing_fields(payload: &BookingPayload) -> Vec<String> {
    let checks = [
        blank(&payload.service),
        payload.group_size.map_or(true, |size| size == 0),
        blank(&payload.meeting_type),
        blank(&payload.name),
        blank(&payload.email),
        blank(&payload.phone),
        blank(&payload.date),
        blank(&payload.time),
    ];

    REQUIRED_FIELDS
        .iter()
        .zip(checks)
        .filter(|(_, missing)| *missing)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Check a payload and turn it into a [`BookingRequest`].
///
/// All missing fields are reported together; only when every field is
/// present are the values themselves checked.
pub fn validate(
    payload: &BookingPayload,
    policy: &ValidationPolicy,
) -> Result<BookingRequest, TibenkanaError> {
    let mut missing = missing_fields(payload);

    let meeting_type = payload
        .meeting_type
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(str::parse::<MeetingType>);

    if matches!(meeting_type, Some(Ok(MeetingType::Physical)))
        && policy.require_location_for_physical
        && blank(&payload.location)
    {
        missing.push("location".to_string());
    }

    if !missing.is_empty() {
        return Err(TibenkanaError::MissingFields(missing));
    }

    let meeting_type = meeting_type
        .transpose()
        .map_err(TibenkanaError::Validation)?
        .unwrap_or(MeetingType::Online);

    let group_size = payload.group_size.unwrap_or_default();
    let group_size = u32::try_from(group_size)
        .ok()
        .filter(|size| (1..=policy.max_group_size).contains(size))
        .ok_or_else(|| {
            TibenkanaError::Validation(format!(
                "groupSize must be between 1 and {}, got {}",
                policy.max_group_size, group_size
            ))
        })?;

    let raw_date = payload.date.as_deref().unwrap_or_default().trim();
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
        TibenkanaError::Validation(format!("date must be formatted YYYY-MM-DD, got '{}'", raw_date))
    })?;

    let location = payload
        .location
        .as_ref()
        .filter(|loc| !loc.is_empty())
        .cloned();

    Ok(BookingRequest {
        service: payload.service.clone().unwrap_or_default(),
        group_size,
        meeting_type,
        location,
        name: payload.name.clone().unwrap_or_default(),
        email: payload.email.clone().unwrap_or_default(),
        phone: payload.phone.clone().unwrap_or_default(),
        date,
        time: payload.time.clone().unwrap_or_default(),
    })
}

/// `BT-` followed by the last six digits of the epoch milliseconds.
pub fn generate_booking_id(now: DateTime<Utc>) -> String {
    format!("BT-{:06}", now.timestamp_millis().rem_euclid(1_000_000))
}

/// Accepts, stores and announces bookings.
///
/// Storage, notification and time are injected so the service can run
/// against the in-memory repository and fakes in tests.
#[derive(Clone)]
pub struct BookingService {
    repository: Arc<dyn BookingRepository>,
    notifier: Option<Arc<dyn BookingNotifier>>,
    clock: Arc<dyn Clock>,
    config: BookingsConfig,
}

impl BookingService {
    pub fn new(
        repository: Arc<dyn BookingRepository>,
        notifier: Option<Arc<dyn BookingNotifier>>,
        clock: Arc<dyn Clock>,
        config: BookingsConfig,
    ) -> Self {
        Self {
            repository,
            notifier,
            clock,
            config,
        }
    }

    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::from(&self.config)
    }

    /// Validate, store and announce a booking.
    ///
    /// The notification is dispatched after the booking is stored and runs
    /// detached; its outcome never changes the result.
    pub async fn submit(&self, payload: BookingPayload) -> Result<BookingRecord, TibenkanaError> {
        if self.config.maintenance_mode {
            info!("Refusing booking while maintenance mode is on");
            return Err(TibenkanaError::Unavailable(MAINTENANCE_MESSAGE.to_string()));
        }

        let request = validate(&payload, &self.policy()).map_err(|err| {
            debug!("Rejected booking payload: {}", err);
            err
        })?;

        // Stored timestamps keep millisecond precision
        let now = self.clock.now().trunc_subsecs(3);
        let record = BookingRecord::confirmed(generate_booking_id(now), request, now);

        let stored = log_result(
            self.repository.insert(record).await,
            "Booking stored",
            "Failed to store booking",
        )?;
        info!(
            "Booking {} created for {} on {} at {}",
            stored.id,
            stored.request.service,
            stored.request.date,
            stored.request.time
        );

        self.dispatch_notification(stored.clone());
        Ok(stored)
    }

    /// Every stored booking, newest first.
    pub async fn list(&self) -> Result<Vec<BookingRecord>, TibenkanaError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn find(&self, id: &str) -> Result<Option<BookingRecord>, TibenkanaError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// The catalogs a client needs to render the booking form.
    pub fn options(&self) -> BookingOptions {
        BookingOptions::from(&self.config)
    }

    fn dispatch_notification(&self, record: BookingRecord) {
        let Some(notifier) = self.notifier.clone() else {
            debug!("No notifier configured, skipping notification for {}", record.id);
            return;
        };

        tokio::spawn(async move {
            match notifier.notify(&record).await {
                NotificationOutcome::Sent { recipients, .. } => {
                    info!("Notification for {} sent to {} recipient(s)", record.id, recipients)
                }
                NotificationOutcome::Skipped { reason } => {
                    info!("Notification for {} skipped: {}", record.id, reason)
                }
                NotificationOutcome::Failed { reason } => {
                    warn!("Notification for {} failed: {}", record.id, reason)
                }
            }
        });
    }
}
