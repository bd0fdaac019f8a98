//! Booking date with a "not booked" sentinel
//!
//! `BookingDate` wraps an optional calendar date. The absent value is the
//! sentinel and orders before every real date, which is exactly what the
//! date sort needs.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{HotelError, Result};

/// Text used for the sentinel on display and in the data file
pub const NOT_BOOKED_LABEL: &str = "Not Booked";

/// Canonical date format (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp layouts written by earlier versions of the data file.
/// Only the date part is kept.
const LEGACY_TIMESTAMP_FORMATS: [&str; 3] = [
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// A room's booking date, or the "not booked" sentinel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingDate(Option<NaiveDate>);

impl BookingDate {
    /// The sentinel: no booking date
    pub const NOT_BOOKED: BookingDate = BookingDate(None);

    /// A booking on the given calendar date
    pub fn on(date: NaiveDate) -> Self {
        BookingDate(Some(date))
    }

    /// The calendar date, if booked
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_booked(&self) -> bool {
        self.0.is_some()
    }

    /// Parse a real calendar date (the sentinel is rejected).
    ///
    /// Accepts `YYYY-MM-DD`, plus the legacy timestamp layouts.
    pub fn parse_date(text: &str) -> Result<NaiveDate> {
        let text = text.trim();

        if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
            return Ok(date);
        }

        LEGACY_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|timestamp| timestamp.date())
            .ok_or_else(|| {
                HotelError::InvalidInput(format!(
                    "invalid date '{}', expected YYYY-MM-DD",
                    text
                ))
            })
    }
}

impl From<NaiveDate> for BookingDate {
    fn from(date: NaiveDate) -> Self {
        BookingDate::on(date)
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            None => f.write_str(NOT_BOOKED_LABEL),
        }
    }
}

impl FromStr for BookingDate {
    type Err = HotelError;

    /// Empty text and `Not Booked` (any case) read as the sentinel.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.is_empty() || text.eq_ignore_ascii_case(NOT_BOOKED_LABEL) {
            return Ok(BookingDate::NOT_BOOKED);
        }
        BookingDate::parse_date(text).map(BookingDate::on)
    }
}
