//! # Temporal Values
//!
//! Dates and instants that a schema may render as `date-time`, `date`, or
//! `time` strings, or as Unix epoch numbers.
//!
//! ## Offsets
//!
//! Instants keep the offset they were constructed with, so a value built
//! from `2019-01-01T09:00:00+09:00` renders back with `+09:00`. UTC values
//! and naive date-times render with `+00:00`. Calendar dates behave as
//! midnight at `+00:00` when a time component is requested.

use std::fmt;

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone,
};

/// A date or an offset-aware instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temporal {
    /// A calendar date without a time component.
    Date(NaiveDate),
    /// An instant with a fixed UTC offset.
    DateTime(DateTime<FixedOffset>),
}

impl Temporal {
    /// The instant this value denotes. Dates are midnight at `+00:00`.
    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        match self {
            Temporal::Date(date) => date.and_time(NaiveTime::MIN).and_utc().fixed_offset(),
            Temporal::DateTime(dt) => *dt,
        }
    }

    /// Render for a JSON Schema string `format`.
    ///
    /// | format      | output                      |
    /// |-------------|-----------------------------|
    /// | `date-time` | `2019-01-01T09:00:00+09:00` |
    /// | `date`      | `2019-01-01`                |
    /// | `time`      | `09:00:00+09:00`            |
    ///
    /// Any other format (or none) yields the natural string form.
    pub fn format(&self, format: Option<&str>) -> String {
        let dt = self.as_datetime();
        match format {
            Some("date-time") => dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            Some("date") => dt.format("%Y-%m-%d").to_string(),
            Some("time") => dt.format("%H:%M:%S%:z").to_string(),
            _ => self.to_string(),
        }
    }

    /// Unix epoch seconds, truncated.
    pub fn epoch_secs(&self) -> i64 {
        self.as_datetime().timestamp()
    }

    /// Unix epoch seconds including the sub-second part.
    pub fn epoch_f64(&self) -> f64 {
        let dt = self.as_datetime();
        dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temporal::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Temporal::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
        }
    }
}

impl From<NaiveDate> for Temporal {
    fn from(date: NaiveDate) -> Self {
        Temporal::Date(date)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Temporal {
    fn from(dt: DateTime<Tz>) -> Self {
        Temporal::DateTime(dt.fixed_offset())
    }
}

/// Naive date-times are assumed UTC.
impl From<NaiveDateTime> for Temporal {
    fn from(dt: NaiveDateTime) -> Self {
        Temporal::DateTime(dt.and_utc().fixed_offset())
    }
}
