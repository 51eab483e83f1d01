//! Resolves caller-supplied date and time strings into an [`Instant`].
//!
//! Inputs are naive local time; no timezone offset is ever applied. Missing or
//! unparseable input is not an error: the current local time is used instead and the
//! instant is tagged [`InstantSource::Fallback`].

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use log::{debug, warn};

use crate::error::{Result, SolarError};
use crate::types::{Instant, InstantSource};

pub const DEFAULT_TIME: &str = "12:00";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Source of "now" for the fallback branch.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// 1-based ordinal of the date within its year, or `None` for an impossible date.
pub fn day_of_year(year: i32, month: u32, day: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.ordinal())
}

const DATE_SHAPE: &[u8] = b"dddd-dd-dd";
const TIME_SHAPE: &[u8] = b"dd:dd";

/// True when `input` matches `shape` byte for byte, `d` standing for any ASCII digit.
fn has_shape(input: &str, shape: &[u8]) -> bool {
    input.len() == shape.len()
        && input.bytes().zip(shape).all(|(b, &s)| match s {
            b'd' => b.is_ascii_digit(),
            _ => b == s,
        })
}

/// Parses a zero-padded `YYYY-MM-DD` plus `HH:MM`. An absent or empty time means noon.
/// Surrounding whitespace, single-digit fields and seconds are rejected.
pub fn parse_local(date: &str, time: Option<&str>) -> Result<NaiveDateTime> {
    let time = time.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TIME);
    let input = format!("{date}T{time}");
    if !has_shape(date, DATE_SHAPE) || !has_shape(time, TIME_SHAPE) {
        return Err(SolarError::MalformedDateTime { input });
    }
    let unparseable = |source: chrono::ParseError| SolarError::UnparseableDateTime {
        input: input.clone(),
        source,
    };
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(unparseable)?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(unparseable)?;
    Ok(date.and_time(time))
}

pub fn instant_from(datetime: NaiveDateTime, source: InstantSource) -> Instant {
    let (hour, minute) = (datetime.hour(), datetime.minute());
    Instant {
        year: datetime.year(),
        month: datetime.month(),
        day: datetime.day(),
        day_of_year: datetime.ordinal(),
        hour,
        minute,
        local_hour: hour as f64 + minute as f64 / 60.0,
        source,
    }
}

/// Resolves the caller's date and time. Never fails.
pub fn normalize<C: Clock + ?Sized>(date: Option<&str>, time: Option<&str>, clock: &C) -> Instant {
    let Some(date) = date.filter(|d| !d.trim().is_empty()) else {
        debug!("no date supplied, using current local time");
        return instant_from(clock.now(), InstantSource::Fallback);
    };
    match parse_local(date, time) {
        Ok(datetime) => instant_from(datetime, InstantSource::Parsed),
        Err(err) => {
            warn!("{err}; using current local time");
            instant_from(clock.now(), InstantSource::Fallback)
        }
    }
}

impl Instant {
    pub fn is_fallback(&self) -> bool {
        self.source == InstantSource::Fallback
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
