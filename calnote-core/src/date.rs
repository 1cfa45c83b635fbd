//! Calendar days and their canonical storage keys.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalNoteError, CalNoteResult};

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day in the local zone. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CalNoteResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| CalNoteError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        CalendarDate(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// The canonical `YYYY-MM-DD` key used to file notes under this day.
    pub fn key(&self) -> DateKey {
        DateKey(self.0.format(KEY_FORMAT).to_string())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl FromStr for CalendarDate {
    type Err = CalNoteError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> CalNoteResult<Self> {
        NaiveDate::parse_from_str(s.trim(), KEY_FORMAT)
            .map(CalendarDate)
            .map_err(|_| CalNoteError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

/// Canonical `YYYY-MM-DD` identity of a day in the note map.
///
/// Keys read back from storage are kept verbatim, so a key is not
/// guaranteed to name a valid date; see [`DateKey::to_date`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The day this key names, only if the key is in canonical form.
    pub fn to_date(&self) -> Option<CalendarDate> {
        self.0
            .parse::<CalendarDate>()
            .ok()
            .filter(|d| d.key() == *self)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
