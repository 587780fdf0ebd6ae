#[cfg(test)]
mod tests {
    use crate::calendar::*;
    use chrono::{Datelike, Days, NaiveDate, Weekday};
    use proptest::prelude::*;

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (0u64..40_000).prop_map(|n| NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Days::new(n))
    }

    fn any_week_start() -> impl Strategy<Value = Weekday> {
        (0u8..7).prop_map(|n| Weekday::try_from(n).unwrap())
    }

    proptest! {
        #[test]
        fn test_grid_covers_whole_weeks(today in any_date(), month in any_date(), start in any_week_start()) {
            let cells = month_grid(today, month, None, start);
            prop_assert_eq!(cells.len() % 7, 0);
            prop_assert!(cells.len() >= 28 && cells.len() <= 42);
            prop_assert_eq!(cells[0].date.weekday(), start);
            prop_assert_eq!(
                cells.iter().filter(|c| c.in_displayed_month).count() as u32,
                last_of_month(month).day()
            );
        }

        #[test]
        fn test_selectable_means_not_before_today(today in any_date(), month in any_date()) {
            for cell in month_grid(today, month, None, Weekday::Sun) {
                prop_assert_eq!(cell.is_selectable, cell.date >= today);
            }
        }

        #[test]
        fn test_picker_selection_is_never_in_the_past(today in any_date(), picks in prop::collection::vec(any_date(), 1..10)) {
            let mut picker = DatePicker::new(today);
            for pick in picks {
                let accepted = picker.select(pick);
                prop_assert_eq!(accepted, pick >= today);
                if let Some(selected) = picker.selection() {
                    prop_assert!(selected >= today);
                }
            }
        }
    }
}
