//! Time formatting utilities for console output.
//!
//! ClickUp reports every instant as a millisecond epoch timestamp sent as a
//! string. This module turns those into what clk prints: elapsed minutes for
//! the running timer, local start times and `HH:MM` durations for the recent
//! entries table.
//!
//! ## Formats
//!
//! - Durations follow the "HH:MM" pattern, hours and minutes zero-padded
//! - Negative durations are treated as "00:00"
//! - Timestamps are rendered in local time as "YYYY-MM-DD HH:MM"
//!
//! ## Examples
//!
//! ```rust
//! use clk::libs::formatter::{elapsed_minutes, format_duration};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(30))), "02:30");
//! assert_eq!(elapsed_minutes(0, 125_000), 2);
//! ```

use crate::api::TimeEntry;
use chrono::{DateTime, Duration, Local, Utc};

/// Shown in place of a duration for the running entry.
pub const RUNNING: &str = "running";

/// Whole minutes between two millisecond timestamps, never negative.
pub fn elapsed_minutes(start_ms: i64, now_ms: i64) -> i64 {
    now_ms.saturating_sub(start_ms).max(0) / 60_000
}

/// Current time as a millisecond epoch timestamp.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Renders a millisecond timestamp in local time, or `-` if it is out of range.
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(utc) => utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Length of a finished entry, or `None` while it is still running.
///
/// Prefers ClickUp's own `duration` field and falls back to `end - start`.
/// Running entries carry a negative duration, which is treated as running too.
/// An end before the start yields a zero duration.
pub fn entry_duration(entry: &TimeEntry) -> Option<Duration> {
    if entry.is_running() {
        return None;
    }
    let reported = entry
        .duration
        .as_deref()
        .and_then(|duration| duration.trim().parse::<i64>().ok())
        .filter(|duration| *duration >= 0);
    let millis = match reported {
        Some(duration) => duration,
        None => entry.end_millis()?.saturating_sub(entry.start_millis()?),
    };
    Some(Duration::milliseconds(millis.max(0)))
}

/// Duration cell for the recent entries table.
pub fn format_entry_duration(entry: &TimeEntry) -> String {
    match entry_duration(entry) {
        Some(duration) => format_duration(&duration),
        None => RUNNING.to_string(),
    }
}
