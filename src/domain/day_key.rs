//! Calendar day bucketing for journal records

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;

/// A calendar day in the consumer's local timezone, used to bucket records.
///
/// Canonical textual form is `YYYY-MM-DD`. Two timestamps map to the same
/// `DayKey` iff their local year/month/day match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date)
    }

    /// Derive the key from an ISO-8601 timestamp string, using the local
    /// timezone for the calendar-day split.
    pub fn from_timestamp(timestamp: &str) -> Option<Self> {
        Self::from_timestamp_in(timestamp, &Local)
    }

    /// Derive the key from an ISO-8601 timestamp string in an explicit
    /// timezone. Timestamps without an offset are taken as already local.
    pub fn from_timestamp_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<Self> {
        let trimmed = timestamp.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(DayKey(dt.with_timezone(tz).date_naive()));
        }

        // No offset present: the producer already rendered local time.
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(DayKey(dt.date()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
            return Some(DayKey(dt.date()));
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok().map(DayKey)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
