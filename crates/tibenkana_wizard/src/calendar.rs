// --- File: crates/tibenkana_wizard/src/calendar.rs ---
//! Month grid for the date picker.
//!
//! Everything here is a pure function of (today, displayed month, selection).

use chrono::{Datelike, Months, NaiveDate, Weekday};

/// One day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for the padding days of the adjacent months.
    pub in_displayed_month: bool,
    pub is_today: bool,
    pub is_selectable: bool,
    pub is_selected: bool,
}

/// Today and every later date can be booked.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

fn days_since_week_start(date: NaiveDate, week_start: Weekday) -> u64 {
    let day = date.weekday().num_days_from_monday();
    let start = week_start.num_days_from_monday();
    u64::from((day + 7 - start) % 7)
}

/// First and last date of the whole-week grid around `month`.
pub fn grid_bounds(month: NaiveDate, week_start: Weekday) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(month);
    let last = last_of_month(month);
    let start = first
        .checked_sub_days(chrono::Days::new(days_since_week_start(first, week_start)))
        .unwrap_or(first);
    let end = last
        .checked_add_days(chrono::Days::new(6 - days_since_week_start(last, week_start)))
        .unwrap_or(last);
    (start, end)
}

/// The full-week grid for the month containing `current_month`.
pub fn month_grid(
    today: NaiveDate,
    current_month: NaiveDate,
    selection: Option<NaiveDate>,
    week_start: Weekday,
) -> Vec<CalendarCell> {
    let (start, end) = grid_bounds(current_month, week_start);
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| CalendarCell {
            date,
            in_displayed_month: date.year() == current_month.year()
                && date.month() == current_month.month(),
            is_today: date == today,
            is_selectable: is_selectable(date, today),
            is_selected: selection == Some(date),
        })
        .collect()
}

fn short_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Date picker state: which month is shown and which date is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    today: NaiveDate,
    current_month: NaiveDate,
    selection: Option<NaiveDate>,
    week_start: Weekday,
}

impl DatePicker {
    /// A picker showing the month of `today`, weeks starting on Sunday.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            current_month: first_of_month(today),
            selection: None,
            week_start: Weekday::Sun,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn selection(&self) -> Option<NaiveDate> {
        self.selection
    }

    pub fn cells(&self) -> Vec<CalendarCell> {
        month_grid(self.today, self.current_month, self.selection, self.week_start)
    }

    /// Select `date` if it can be booked. Past dates are ignored and return false.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if !is_selectable(date, self.today) {
            return false;
        }
        self.selection = Some(date);
        true
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.current_month.checked_add_months(Months::new(1)) {
            self.current_month = next;
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(prev) = self.current_month.checked_sub_months(Months::new(1)) {
            self.current_month = prev;
        }
    }

    /// e.g. "June 2024"
    pub fn month_label(&self) -> String {
        self.current_month.format("%B %Y").to_string()
    }

    /// Column headers in grid order, e.g. "Sun".."Sat".
    pub fn weekday_labels(&self) -> Vec<String> {
        let mut day = self.week_start;
        (0..7)
            .map(|_| {
                let label = short_weekday(day).to_string();
                day = day.succ();
                label
            })
            .collect()
    }
}
