//! Axis label formatting
//!
//! Date granularity is chosen from point density, not elapsed wall-clock
//! time: a short hourly series gets clock labels even when it happens to
//! span days. Deliberate heuristic, carried over from the chart's tuning.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// How x-axis timestamps are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateGranularity {
    /// "14:30" — hourly data, short windows
    HourMinute,
    /// "03 Jan" — daily data, medium windows
    DayMonth,
    /// "Jan 24" — weekly or monthly data, long windows
    MonthYear,
}

impl DateGranularity {
    /// Pick by the original series length (not the down-sampled length)
    pub fn for_len(original_len: usize) -> Self {
        if original_len < 48 {
            DateGranularity::HourMinute
        } else if original_len < 90 {
            DateGranularity::DayMonth
        } else {
            DateGranularity::MonthYear
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            DateGranularity::HourMinute => "%H:%M",
            DateGranularity::DayMonth => "%d %b",
            DateGranularity::MonthYear => "%b %y",
        }
    }
}

/// Format a millisecond timestamp at the given granularity.
/// An out-of-range timestamp yields an empty label rather than an error.
pub fn format_timestamp(timestamp_ms: i64, granularity: DateGranularity) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(moment) => moment.format(granularity.pattern()).to_string(),
        None => String::new(),
    }
}

/// Format a y-axis value by magnitude: large values compress to a "k"
/// suffix, small values keep enough decimals to stay readable
pub fn format_axis_value(value: f64) -> String {
    if value >= 10000.0 {
        format!("{:.0}k", value / 1000.0)
    } else if value >= 100.0 {
        format!("{:.0}", value)
    } else if value >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.4}", value)
    }
}
