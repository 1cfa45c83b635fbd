//! Month arithmetic and the list of days shown for a month.

use chrono::{Datelike, Months};
use serde::Deserialize;

use crate::date::CalendarDate;

/// First column of a weekday-aligned month layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column headers for this week start.
    pub fn headers(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

pub fn first_day_of_month(reference: CalendarDate) -> CalendarDate {
    // Day 1 exists in every month
    reference
        .naive()
        .with_day(1)
        .map(CalendarDate::from)
        .unwrap_or(reference)
}

pub fn last_day_of_month(reference: CalendarDate) -> CalendarDate {
    let first = first_day_of_month(reference).naive();
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(CalendarDate::from)
        // Only reachable in the last representable month
        .unwrap_or_else(|| {
            first
                .iter_days()
                .take_while(|d| d.month() == first.month())
                .last()
                .map(CalendarDate::from)
                .unwrap_or(reference)
        })
}

pub fn days_in_month(reference: CalendarDate) -> u32 {
    last_day_of_month(reference).day()
}

/// Every day of `reference`'s month, day 1 through the last day, ascending.
///
/// No padding with days of the neighbouring months; use
/// [`leading_blank_cells`] for weekday alignment.
pub fn build_month_grid(reference: CalendarDate) -> Vec<CalendarDate> {
    let first = first_day_of_month(reference);
    let last = last_day_of_month(reference);

    first
        .naive()
        .iter_days()
        .take_while(|d| *d <= last.naive())
        .map(CalendarDate::from)
        .collect()
}

/// Number of empty cells before day 1 when laying the month out in weeks.
pub fn leading_blank_cells(reference: CalendarDate, week_start: WeekStart) -> usize {
    let first = first_day_of_month(reference).naive().weekday();
    match week_start {
        WeekStart::Sunday => first.num_days_from_sunday() as usize,
        WeekStart::Monday => first.num_days_from_monday() as usize,
    }
}

/// Move `months` months forward, clamping the day to the target month's length.
/// Returns `None` outside chrono's representable range.
pub fn add_months(date: CalendarDate, months: u32) -> Option<CalendarDate> {
    date.naive()
        .checked_add_months(Months::new(months))
        .map(CalendarDate::from)
}

/// Move `months` months back, clamping the day to the target month's length.
pub fn sub_months(date: CalendarDate, months: u32) -> Option<CalendarDate> {
    date.naive()
        .checked_sub_months(Months::new(months))
        .map(CalendarDate::from)
}

/// Human label for the month, e.g. "January 2024".
pub fn month_label(reference: CalendarDate) -> String {
    reference.naive().format("%B %Y").to_string()
}
