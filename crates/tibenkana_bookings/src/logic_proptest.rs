#[cfg(test)]
mod tests {
    use crate::logic::{generate_booking_id, missing_fields, validate, ValidationPolicy, REQUIRED_FIELDS};
    use crate::test_support::scenario_payload;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use tibenkana_common::{BookingPayload, TibenkanaError};

    // Removes the fields whose bit is set in `mask`, following REQUIRED_FIELDS order
    fn strip(payload: &BookingPayload, mask: u8) -> BookingPayload {
        let mut p = payload.clone();
        for (bit, field) in REQUIRED_FIELDS.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                continue;
            }
            match *field {
                "service" => p.service = None,
                "groupSize" => p.group_size = None,
                "meetingType" => p.meeting_type = None,
                "name" => p.name = None,
                "email" => p.email = None,
                "phone" => p.phone = None,
                "date" => p.date = None,
                "time" => p.time = None,
                _ => unreachable!(),
            }
        }
        p
    }

    proptest! {
        #[test]
        fn test_booking_id_shape(millis in 0i64..4_102_444_800_000) {
            let at = Utc.timestamp_millis_opt(millis).unwrap();
            let id = generate_booking_id(at);
            prop_assert_eq!(id.len(), 9);
            prop_assert!(id.starts_with("BT-"));
            prop_assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
            prop_assert_eq!(id[3..].parse::<i64>().unwrap(), millis % 1_000_000);
        }

        #[test]
        fn test_distinct_millis_within_a_window_give_distinct_ids(
            base in 0i64..4_000_000_000_000,
            delta in 1i64..1_000_000,
        ) {
            let a = generate_booking_id(Utc.timestamp_millis_opt(base).unwrap());
            let b = generate_booking_id(Utc.timestamp_millis_opt(base + delta).unwrap());
            prop_assert_ne!(a, b);
        }

        #[test]
        fn test_exactly_the_removed_fields_are_reported(mask in 1u8..=255) {
            let payload = strip(&scenario_payload(), mask);
            let expected: Vec<String> = REQUIRED_FIELDS
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, f)| f.to_string())
                .collect();

            prop_assert_eq!(missing_fields(&payload), expected.clone());
            match validate(&payload, &ValidationPolicy::default()) {
                Err(TibenkanaError::MissingFields(fields)) => prop_assert_eq!(fields, expected),
                other => prop_assert!(false, "expected missing fields, got {:?}", other),
            }
        }

        #[test]
        fn test_group_size_bounds(size in -50i64..80, max in 1u32..40) {
            let payload = BookingPayload { group_size: Some(size), ..scenario_payload() };
            let policy = ValidationPolicy { max_group_size: max, require_location_for_physical: true };
            let result = validate(&payload, &policy);
            if size >= 1 && size <= i64::from(max) {
                prop_assert_eq!(result.unwrap().group_size as i64, size);
            } else {
                prop_assert!(result.is_err());
            }
        }
    }
}
