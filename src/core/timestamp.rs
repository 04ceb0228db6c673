//! Timestamp formatting utilities
//!
//! Formatters stamp each line with RFC 3339 time; the syslog transport
//! frames its datagrams with the classic BSD (RFC 3164) stamp.

use chrono::{DateTime, SecondsFormat, TimeZone};
use std::fmt;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use log_pipeline::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&at), "2025-01-08T10:30:45Z");
/// assert_eq!(TimestampFormat::Rfc3164.format(&at), "Jan  8 10:30:45");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2025-01-08T10:30:45Z`
    #[default]
    Rfc3339,

    /// BSD syslog stamp with a space-padded day: `Jan  8 10:30:45`
    Rfc3164,
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3164 => datetime.format("%b %e %H:%M:%S").to_string(),
        }
    }
}
