//! Frontmatter date handling.
//!
//! Dates arrive as free-form strings. Only a few shapes are recognized; any
//! other value counts as "no resolvable date" when ordering items but is kept
//! verbatim in the metadata.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Time formats accepted after a `YYYY-MM-DD` date part (space or `T` separated).
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A resolved content date, normalized to naive UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentDate(NaiveDateTime);

impl ContentDate {
    /// Parse from "YYYY-MM-DD", RFC 3339 ("YYYY-MM-DDTHH:MM:SSZ" or with an
    /// offset), or "YYYY-MM-DD HH:MM[:SS]".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(Self);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.naive_utc()));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self)
    }

    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Long US-English form, e.g. "January 15, 2024".
    pub fn format_long(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }

    /// Calendar date as "YYYY-MM-DD".
    pub fn ymd(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}
