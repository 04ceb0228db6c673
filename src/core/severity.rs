//! Syslog-compatible severity levels
//!
//! Severities follow RFC 5424 numbering: `0` is the most severe
//! (`emerg`) and `7` the most verbose (`debug`). The natural ordering of
//! [`Severity`] is the numeric ordering, so `Severity::Emergency` is the
//! *smallest* value.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    #[default]
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Severity::Emergency => "emerg",
            Severity::Alert => "alert",
            Severity::Critical => "crit",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Check a raw numeric severity, as found in configuration or on the wire
    pub fn validate(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Severity::Emergency),
            1 => Ok(Severity::Alert),
            2 => Ok(Severity::Critical),
            3 => Ok(Severity::Error),
            4 => Ok(Severity::Warning),
            5 => Ok(Severity::Notice),
            6 => Ok(Severity::Info),
            7 => Ok(Severity::Debug),
            _ => Err(LoggerError::config(
                "level",
                format!("invalid log level ({})", value),
            )),
        }
    }

    /// Whether an event at `event` passes a filter configured at `self`.
    ///
    /// An event is delivered when it is at least as severe as the
    /// threshold, i.e. its number is not greater than the threshold's.
    #[inline]
    pub fn allows(self, event: Severity) -> bool {
        event.number() <= self.number()
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Debug => BrightBlack,
            Severity::Info => Blue,
            Severity::Notice | Severity::Warning => Yellow,
            Severity::Error | Severity::Critical | Severity::Alert => Red,
            Severity::Emergency => BrightRed,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| LoggerError::config("level", format!("invalid log level ({})", s)))
    }
}

impl TryFrom<i64> for Severity {
    type Error = LoggerError;

    fn try_from(value: i64) -> Result<Self> {
        Severity::validate(value)
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self> {
        Severity::validate(i64::from(value))
    }
}

impl From<Severity> for u8 {
    fn from(level: Severity) -> u8 {
        level.number()
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Levels may be written either by name or by number in configuration files.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Name(String),
    Number(i64),
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parsed = match SeverityRepr::deserialize(deserializer)? {
            SeverityRepr::Name(name) => name.parse(),
            SeverityRepr::Number(number) => Severity::validate(number),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
