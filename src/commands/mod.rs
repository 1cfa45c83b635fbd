pub mod edit;
pub mod get;
pub mod list;
pub mod set;
pub mod show;

use anyhow::{Context, Result};
use calnote_core::CalendarDate;
use chrono::NaiveDate;

/// Parse YYYY-MM as the first day of that month.
pub fn parse_month(s: &str) -> Result<CalendarDate> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s))?;
    Ok(date.into())
}

/// Parse YYYY-MM-DD.
pub fn parse_date(s: &str) -> Result<CalendarDate> {
    Ok(s.parse::<CalendarDate>()?)
}
