//! Reporting period identifiers.
//!
//! Vendor data mixes plain date strings with timestamp renderings of the same
//! fiscal period end. Every period column is normalized to a [`Period`] so that
//! statements from different sources compare equal.

use crate::{RatioError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// A fiscal period end date.
///
/// Periods order chronologically and always render as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(NaiveDate);

impl Period {
    /// Create a period from a calendar date.
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Create a period from year, month and day.
    ///
    /// Returns `None` for an impossible date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a period from any of the accepted vendor renderings.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM-DD HH:MM:SS` (optionally with
    /// fractional seconds or a `T` separator) and RFC 3339 timestamps.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(Self(date));
            }
        }
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(datetime.date()));
            }
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(datetime.date_naive()));
        }

        Err(RatioError::InvalidPeriod(raw.to_string()))
    }

    /// The underlying calendar date.
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Period {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Period {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for Period {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}
