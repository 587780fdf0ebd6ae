// --- File: crates/tibenkana_mailer/src/invite.rs ---
//! Google Calendar "add event" links for stored bookings.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::Serialize;
use tibenkana_common::{BookingRecord, MeetingType};
use tibenkana_config::InviteConfig;

pub const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";

/// Location shown in the invite for online meetings.
pub const ONLINE_LOCATION: &str = "Online";

const CALENDAR_STAMP: &str = "%Y%m%dT%H%M%SZ";

#[derive(Serialize)]
struct TemplateQuery<'a> {
    action: &'a str,
    text: String,
    dates: String,
    details: String,
    location: &'a str,
}

/// Parse an offset like `+03:00`, `-0530` or `Z`.
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }
    raw.parse().ok()
}

/// Start and end of the meeting in UTC.
///
/// `time` is the booked slot (`HH:MM`) interpreted at `offset`.
pub fn event_window(
    date: NaiveDate,
    time: &str,
    offset: FixedOffset,
    duration_minutes: i64,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()?;
    let local = offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()?;
    let start = local.with_timezone(&Utc);
    let end = start.checked_add_signed(Duration::try_minutes(duration_minutes)?)?;
    Some((start, end))
}

/// Build the calendar link, or `None` when the booked date/time or the
/// configured offset cannot be interpreted.
pub fn calendar_link(booking: &BookingRecord, config: &InviteConfig) -> Option<String> {
    let offset = parse_utc_offset(&config.utc_offset)?;
    let request = &booking.request;
    let (start, end) = event_window(request.date, &request.time, offset, config.duration_minutes)?;

    let location = match request.meeting_type {
        MeetingType::Online => ONLINE_LOCATION,
        MeetingType::Physical => request.location.as_deref().unwrap_or_default(),
    };

    let query = TemplateQuery {
        action: "TEMPLATE",
        text: format!("{} - {}", request.service, request.name),
        dates: format!(
            "{}/{}",
            start.format(CALENDAR_STAMP),
            end.format(CALENDAR_STAMP)
        ),
        details: format!(
            "Booking {}\nGroup size: {}\nContact: {} ({}, {})",
            booking.id, request.group_size, request.name, request.email, request.phone
        ),
        location,
    };

    let encoded = serde_urlencoded::to_string(&query).ok()?;
    Some(format!("{}?{}", GOOGLE_CALENDAR_URL, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tibenkana_common::BookingRequest;

    fn booking(meeting_type: MeetingType, location: Option<&str>, time: &str) -> BookingRecord {
        BookingRecord::confirmed(
            "BT-123456".to_string(),
            BookingRequest {
                service: "Export Readiness & Standards Compliance".to_string(),
                group_size: 2,
                meeting_type,
                location: location.map(String::from),
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                phone: "123".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                time: time.to_string(),
            },
            Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn offsets_parse() {
        assert_eq!(parse_utc_offset("+03:00"), FixedOffset::east_opt(3 * 3600));
        assert_eq!(parse_utc_offset("-0530"), FixedOffset::east_opt(-(5 * 3600 + 1800)));
        assert_eq!(parse_utc_offset("Z"), FixedOffset::east_opt(0));
        assert_eq!(parse_utc_offset(" +00:00 "), FixedOffset::east_opt(0));
        assert_eq!(parse_utc_offset("EAT"), None);
        assert_eq!(parse_utc_offset("+3"), None);
    }

    #[test]
    fn window_is_one_hour_from_local_slot() {
        let offset = parse_utc_offset("+03:00").unwrap();
        let (start, end) =
            event_window(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), "10:00", offset, 60)
                .unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 7, 1, 7, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn online_link_uses_online_location() {
        let link = calendar_link(&booking(MeetingType::Online, None, "10:00"), &InviteConfig::default())
            .unwrap();
        assert!(link.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(link.contains("dates=20240701T070000Z%2F20240701T080000Z"));
        assert!(link.contains("location=Online"));
        assert!(link.contains("text=Export+Readiness+%26+Standards+Compliance+-+A"));
    }

    #[test]
    fn physical_link_uses_free_text_location() {
        let link = calendar_link(
            &booking(MeetingType::Physical, Some("Ntinda, Kampala"), "14:00"),
            &InviteConfig::default(),
        )
        .unwrap();
        assert!(link.contains("location=Ntinda%2C+Kampala"));
        assert!(link.contains("dates=20240701T110000Z%2F20240701T120000Z"));
    }

    #[test]
    fn unparsable_time_gives_no_link() {
        assert_eq!(
            calendar_link(&booking(MeetingType::Online, None, "ten o'clock"), &InviteConfig::default()),
            None
        );
        let bad_offset = InviteConfig {
            utc_offset: "Africa/Kampala".to_string(),
            ..InviteConfig::default()
        };
        assert_eq!(calendar_link(&booking(MeetingType::Online, None, "10:00"), &bad_offset), None);
    }
}
