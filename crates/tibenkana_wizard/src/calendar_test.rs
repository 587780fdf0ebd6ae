#[cfg(test)]
mod tests {
    use crate::calendar::*;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_only_today_and_later_are_selectable() {
        let today = d(2024, 6, 15);
        assert!(!is_selectable(d(2024, 6, 14), today));
        assert!(is_selectable(d(2024, 6, 15), today));
        assert!(is_selectable(d(2024, 6, 16), today));
    }

    #[test]
    fn test_june_2024_grid_starting_sunday() {
        let today = d(2024, 6, 15);
        let cells = month_grid(today, d(2024, 6, 1), None, Weekday::Sun);

        assert_eq!(cells.len(), 42);
        assert_eq!(cells.first().unwrap().date, d(2024, 5, 26));
        assert_eq!(cells.last().unwrap().date, d(2024, 7, 6));
        assert!(!cells[0].in_displayed_month);
        assert_eq!(cells.iter().filter(|c| c.in_displayed_month).count(), 30);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_june_2024_grid_starting_monday() {
        let cells = month_grid(d(2024, 6, 15), d(2024, 6, 10), None, Weekday::Mon);
        assert_eq!(cells.len(), 35);
        assert_eq!(cells.first().unwrap().date, d(2024, 5, 27));
        assert_eq!(cells.last().unwrap().date, d(2024, 6, 30));
    }

    #[test]
    fn test_selection_is_marked() {
        let cells = month_grid(d(2024, 6, 15), d(2024, 6, 1), Some(d(2024, 6, 20)), Weekday::Sun);
        let selected: Vec<_> = cells.iter().filter(|c| c.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, d(2024, 6, 20));
    }

    #[test]
    fn test_month_bounds_handle_leap_years() {
        assert_eq!(last_of_month(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(last_of_month(d(2023, 2, 10)), d(2023, 2, 28));
        assert_eq!(last_of_month(d(2024, 12, 31)), d(2024, 12, 31));
        assert_eq!(first_of_month(d(2024, 12, 31)), d(2024, 12, 1));
    }

    #[test]
    fn test_picker_ignores_past_dates() {
        let mut picker = DatePicker::new(d(2024, 6, 15));
        assert!(!picker.select(d(2024, 6, 14)));
        assert_eq!(picker.selection(), None);
        assert!(picker.select(d(2024, 6, 15)));
        assert_eq!(picker.selection(), Some(d(2024, 6, 15)));
        assert!(!picker.select(d(2024, 1, 1)));
        assert_eq!(picker.selection(), Some(d(2024, 6, 15)));
    }

    #[test]
    fn test_picker_month_navigation_across_years() {
        let mut picker = DatePicker::new(d(2024, 12, 20));
        assert_eq!(picker.month_label(), "December 2024");
        picker.next_month();
        assert_eq!(picker.month_label(), "January 2025");
        assert_eq!(picker.current_month(), d(2025, 1, 1));
        picker.prev_month();
        picker.prev_month();
        assert_eq!(picker.month_label(), "November 2024");
    }

    #[test]
    fn test_previous_months_have_nothing_selectable() {
        let mut picker = DatePicker::new(d(2024, 6, 15));
        picker.prev_month();
        assert!(picker.cells().iter().all(|c| !c.is_selectable));
    }

    #[test]
    fn test_weekday_labels_follow_week_start() {
        let picker = DatePicker::new(d(2024, 6, 15));
        assert_eq!(
            picker.weekday_labels(),
            vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        let monday = picker.with_week_start(Weekday::Mon);
        assert_eq!(monday.weekday_labels()[0], "Mon");
        assert_eq!(monday.cells()[0].date.weekday(), Weekday::Mon);
    }
}
