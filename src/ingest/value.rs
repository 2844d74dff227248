// src/ingest/value.rs

//! Typed attribute values and raw-cell coercion.
//!
//! Every attribute cell is coerced according to its column's declared type
//! into an [`AttrValue`]. Empty cells become the [`NO_DATA`] sentinel, which
//! is preserved verbatim as a value (it participates in filtering like any
//! other value). A cell that fails its declared coercion is kept as text so
//! the bad value stays visible downstream instead of crashing ingestion.

use std::fmt;

use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::config::ColumnType;

/// Sentinel replacing empty / missing cells.
pub const NO_DATA: &str = "NO_DATA";

/// A typed attribute value attached to a graph node.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Value from a `NUMBER` column.
    Number(f64),
    /// Value from a text column, or a failed coercion kept verbatim.
    Text(String),
    /// Value from a `YEAR_MONTH_DAY_SECOND` column.
    Timestamp(NaiveDateTime),
    /// Empty cell sentinel.
    NoData,
}

impl AttrValue {
    /// Coerce a raw cell according to the column's declared type.
    ///
    /// Coercion failures are logged and fall back to [`AttrValue::Text`]
    /// with the raw content.
    pub fn parse(column_type: ColumnType, raw: &str) -> AttrValue {
        if raw.is_empty() {
            return AttrValue::NoData;
        }

        match column_type {
            ColumnType::Number => match raw.trim().parse::<f64>() {
                Ok(n) => AttrValue::Number(n),
                Err(_) => {
                    warn!(raw, "NUMBER cell is not numeric; keeping raw text");
                    AttrValue::Text(raw.to_string())
                }
            },
            ColumnType::YearMonthDaySecond => match parse_compact_datetime(raw) {
                Ok(ts) => AttrValue::Timestamp(ts),
                Err(err) => {
                    warn!(raw, %err, "malformed timestamp cell; keeping raw text");
                    AttrValue::Text(raw.to_string())
                }
            },
            ColumnType::Text => AttrValue::Text(raw.to_string()),
        }
    }

    /// Numeric view of the value, coercing numeric text like the status
    /// column sometimes carries.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(s) => s.trim().parse().ok(),
            AttrValue::Timestamp(_) | AttrValue::NoData => None,
        }
    }

    /// Timestamp view of the value.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            AttrValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Whether this is the empty-cell sentinel.
    pub fn is_no_data(&self) -> bool {
        matches!(self, AttrValue::NoData)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Text(s) => write!(f, "{s}"),
            AttrValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
            AttrValue::NoData => write!(f, "{NO_DATA}"),
        }
    }
}

/// Parse a compact `YYYYMMDDHHmmss` datetime string.
///
/// The month is 1-based in the input. The seconds field is the leading digit
/// run of everything past position 12; additional (fractional) digits are
/// ignored. Anything that does not form a real calendar datetime is an
/// error.
pub fn parse_compact_datetime(raw: &str) -> Result<NaiveDateTime> {
    let s = raw.trim();

    let year: i32 = parse_segment(s, 0, 4, "year")?;
    let month: u32 = parse_segment(s, 4, 6, "month")?;
    let day: u32 = parse_segment(s, 6, 8, "day")?;
    let hour: u32 = parse_segment(s, 8, 10, "hour")?;
    let minute: u32 = parse_segment(s, 10, 12, "minute")?;

    let sec_digits: String = s
        .get(12..)
        .unwrap_or("")
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if sec_digits.is_empty() {
        return Err(anyhow!("'{}' has no seconds field", raw));
    }
    // Only the first two digits are the seconds; the rest is sub-second
    // precision the display never uses.
    let second: u32 = sec_digits[..sec_digits.len().min(2)]
        .parse()
        .map_err(|_| anyhow!("'{}' has a non-numeric seconds field", raw))?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("'{}' is not a valid calendar date", raw))?;
    date.and_hms_opt(hour, minute, second)
        .ok_or_else(|| anyhow!("'{}' is not a valid time of day", raw))
}

fn parse_segment<T: std::str::FromStr>(s: &str, from: usize, to: usize, what: &str) -> Result<T> {
    s.get(from..to)
        .ok_or_else(|| anyhow!("'{}' is too short for a {} field", s, what))?
        .parse()
        .map_err(|_| anyhow!("'{}' has a non-numeric {} field", s, what))
}
