// --- File: crates/tibenkana_common/src/models.rs ---

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the appointment takes place.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingType {
    Online,
    Physical,
}

impl MeetingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingType::Online => "online",
            MeetingType::Physical => "physical",
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(MeetingType::Online),
            "physical" => Ok(MeetingType::Physical),
            other => Err(format!(
                "meetingType must be 'online' or 'physical', got '{}'",
                other
            )),
        }
    }
}

/// Lifecycle state of a stored booking. Only `confirmed` is ever assigned.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(BookingStatus::Confirmed),
            other => Err(format!("unknown booking status '{}'", other)),
        }
    }
}

/// Booking request as it arrives over the wire.
///
/// Every field is optional so that the submission service can report all
/// missing fields at once instead of failing on the first one.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "Export Readiness & Standards Compliance"))]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub group_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "online"))]
    pub meeting_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "2024-07-01"))]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub time: Option<String>,
}

/// A validated booking request.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub service: String,
    pub group_size: u32,
    pub meeting_type: MeetingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
}

impl BookingRequest {
    /// Human readable meeting line, e.g. "Online Meeting" or "In-Person at Kampala".
    pub fn meeting_description(&self) -> String {
        match self.meeting_type {
            MeetingType::Online => "Online Meeting".to_string(),
            MeetingType::Physical => {
                format!("In-Person at {}", self.location.as_deref().unwrap_or_default())
            }
        }
    }
}

impl From<&BookingRequest> for BookingPayload {
    fn from(request: &BookingRequest) -> Self {
        Self {
            service: Some(request.service.clone()),
            group_size: Some(i64::from(request.group_size)),
            meeting_type: Some(request.meeting_type.to_string()),
            location: request.location.clone(),
            name: Some(request.name.clone()),
            email: Some(request.email.clone()),
            phone: Some(request.phone.clone()),
            date: Some(request.date.format("%Y-%m-%d").to_string()),
            time: Some(request.time.clone()),
        }
    }
}

/// A booking as stored: the request plus the server-assigned fields.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[cfg_attr(feature = "openapi", schema(example = "BT-482913"))]
    pub id: String,
    #[serde(flatten)]
    pub request: BookingRequest,
    pub created_at: DateTime<Utc>,
    pub status: BookingStatus,
}

impl BookingRecord {
    /// Create a freshly confirmed booking.
    pub fn confirmed(id: String, request: BookingRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            request,
            created_at,
            status: BookingStatus::Confirmed,
        }
    }
}

/// What a client needs to render the booking form.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOptions {
    pub services: Vec<String>,
    pub time_slots: Vec<String>,
    pub max_group_size: u32,
}

impl From<&tibenkana_config::BookingsConfig> for BookingOptions {
    fn from(config: &tibenkana_config::BookingsConfig) -> Self {
        Self {
            services: config.services.clone(),
            time_slots: config.time_slots.clone(),
            max_group_size: config.max_group_size,
        }
    }
}
