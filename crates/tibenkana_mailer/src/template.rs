// --- File: crates/tibenkana_mailer/src/template.rs ---
use askama::Template;

use crate::error::NotificationError;
use tibenkana_common::BookingRecord;

pub fn subject(booking: &BookingRecord) -> String {
    format!("New Booking - {}", booking.id)
}

pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// HTML body of the notification sent to the booking team.
#[derive(Template)]
#[template(path = "booking_email.html")]
pub struct BookingEmailTemplate<'a> {
    pub rows: Vec<DetailRow>,
    pub calendar_link: Option<&'a str>,
}

impl<'a> BookingEmailTemplate<'a> {
    pub fn new(booking: &BookingRecord, calendar_link: Option<&'a str>) -> Self {
        let request = &booking.request;
        let row = |label, value| DetailRow { label, value };
        Self {
            rows: vec![
                row("Booking ID", booking.id.clone()),
                row("Service", request.service.clone()),
                row(
                    "Date & Time",
                    format!("{} at {}", request.date.format("%Y-%m-%d"), request.time),
                ),
                row("Group Size", request.group_size.to_string()),
                row("Meeting Type", request.meeting_description()),
                row("Name", request.name.clone()),
                row("Email", request.email.clone()),
                row("Phone", request.phone.clone()),
            ],
            calendar_link,
        }
    }
}

pub fn render_html(
    booking: &BookingRecord,
    calendar_link: Option<&str>,
) -> Result<String, NotificationError> {
    BookingEmailTemplate::new(booking, calendar_link)
        .render()
        .map_err(|e| NotificationError::Build(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use tibenkana_common::{BookingRequest, MeetingType};

    fn booking() -> BookingRecord {
        BookingRecord::confirmed(
            "BT-654321".to_string(),
            BookingRequest {
                service: "Branding, Packaging & Labeling Design".to_string(),
                group_size: 3,
                meeting_type: MeetingType::Physical,
                location: Some("Jinja <main office>".to_string()),
                name: "Denis".to_string(),
                email: "denis@example.org".to_string(),
                phone: "0772 000 111".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 8, 9).unwrap(),
                time: "15:00".to_string(),
            },
            Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn subject_names_the_booking() {
        assert_eq!(subject(&booking()), "New Booking - BT-654321");
    }

    #[test]
    fn body_lists_every_detail_escaped() {
        let html = render_html(&booking(), None).unwrap();
        assert!(html.starts_with("<h2>New Booking Confirmation</h2>"));
        assert!(html.contains("<p><strong>Booking ID:</strong> BT-654321</p>"));
        assert!(html.contains("<strong>Service:</strong> Branding, Packaging &amp; Labeling Design"));
        assert!(html.contains("<strong>Date &amp; Time:</strong> 2024-08-09 at 15:00"));
        assert!(html.contains("<strong>Group Size:</strong> 3"));
        assert!(html.contains("In-Person at Jinja &lt;main office&gt;"));
        assert!(html.contains("<strong>Phone:</strong> 0772 000 111"));
        assert!(!html.contains("<main office>"));
        assert!(!html.contains("Google Calendar"));
    }

    #[test]
    fn body_links_the_invite_when_present() {
        let html = render_html(&booking(), Some("https://calendar.google.com/x?a=1&b=2")).unwrap();
        assert!(html.contains("Add to Google Calendar</a>"));
        assert!(html.contains("a=1&amp;b=2"));
        assert!(!html.contains("a=1&b=2"));
    }
}
