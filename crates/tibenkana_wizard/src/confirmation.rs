// --- File: crates/tibenkana_wizard/src/confirmation.rs ---
use serde::Serialize;

use tibenkana_common::{BookingRecord, BookingStatus};

pub const CONFIRMATION_TITLE: &str = "Appointment Confirmed!";

/// What the confirmation page shows after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationView {
    pub title: &'static str,
    pub booking_id: String,
    pub service: String,
    /// e.g. "Monday, July 1, 2024"
    pub date: String,
    pub time: String,
    /// "1 person" or "3 people"
    pub attendees: String,
    pub meeting: String,
    pub contact: String,
    pub status: String,
}

pub(crate) fn attendees(group_size: u32) -> String {
    if group_size == 1 {
        "1 person".to_string()
    } else {
        format!("{} people", group_size)
    }
}

fn status_label(status: BookingStatus) -> String {
    match status {
        BookingStatus::Confirmed => "Confirmed".to_string(),
    }
}

impl ConfirmationView {
    pub fn from_record(record: &BookingRecord) -> Self {
        let request = &record.request;
        Self {
            title: CONFIRMATION_TITLE,
            booking_id: record.id.clone(),
            service: request.service.clone(),
            date: request.date.format("%A, %B %-d, %Y").to_string(),
            time: request.time.clone(),
            attendees: attendees(request.group_size),
            meeting: request.meeting_description(),
            contact: format!("{} ({})", request.name, request.email),
            status: status_label(record.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use tibenkana_common::{BookingRequest, MeetingType};

    fn record(group_size: u32) -> BookingRecord {
        BookingRecord::confirmed(
            "BT-400123".to_string(),
            BookingRequest {
                service: "Export Readiness & Standards Compliance".to_string(),
                group_size,
                meeting_type: MeetingType::Online,
                location: None,
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                phone: "123".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                time: "10:00".to_string(),
            },
            Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn shows_long_date_and_plural_attendees() {
        let view = ConfirmationView::from_record(&record(2));
        assert_eq!(view.title, "Appointment Confirmed!");
        assert_eq!(view.booking_id, "BT-400123");
        assert_eq!(view.date, "Monday, July 1, 2024");
        assert_eq!(view.attendees, "2 people");
        assert_eq!(view.meeting, "Online Meeting");
        assert_eq!(view.status, "Confirmed");
    }

    #[test]
    fn single_attendee_is_singular() {
        assert_eq!(ConfirmationView::from_record(&record(1)).attendees, "1 person");
    }
}
