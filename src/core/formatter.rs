//! Formatter trait and format selection

use super::entry::Entry;
use super::error::LoggerError;
use super::severity::Severity;
use crate::formatters::{LjsonFormatter, TextFormatter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Ad-hoc data that can be logged without building an [`Entry`].
///
/// Implemented for every `Serialize + Debug` type. The `Debug` rendering is
/// used whenever serialization fails, so a line is never dropped.
pub trait Freeform: fmt::Debug {
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T: Serialize + fmt::Debug + ?Sized> Freeform for T {
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Turns entries into output lines.
///
/// Implementations are pure: they never touch the destination and never
/// fail. Each returned buffer is exactly one line ending in `\n`.
pub trait Formatter: Send + Sync {
    fn format(&self, severity: Severity, entry: &Entry) -> Vec<u8>;

    fn format_freeform(&self, severity: Severity, data: &dyn Freeform) -> Vec<u8>;

    /// Render only the message part of an entry, without timestamp, level
    /// or trailing newline, for transports that frame lines themselves.
    fn format_body(&self, entry: &Entry) -> String;

    fn name(&self) -> &str;
}

/// Output format selected in configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Newline-delimited JSON, one object per line
    #[default]
    Ljson,
    /// Tab-delimited text
    Text,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Ljson => "ljson",
            Format::Text => "text",
        }
    }

    /// Build the formatter for this format, tagging lines with `module`
    pub fn formatter(self, module: Option<&str>) -> Arc<dyn Formatter> {
        match self {
            Format::Ljson => {
                let formatter = LjsonFormatter::new();
                match module {
                    Some(module) => Arc::new(formatter.with_module(module)),
                    None => Arc::new(formatter),
                }
            }
            Format::Text => {
                let formatter = TextFormatter::new();
                match module {
                    Some(module) => Arc::new(formatter.with_module(module)),
                    None => Arc::new(formatter),
                }
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ljson" => Ok(Format::Ljson),
            "text" => Ok(Format::Text),
            _ => Err(LoggerError::config(
                "format",
                format!("invalid log format: {}", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_parse() {
        assert_eq!("ljson".parse::<Format>().unwrap(), Format::Ljson);
        assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
        assert!("xml".parse::<Format>().unwrap_err().is_config());
        assert_eq!(Format::default(), Format::Ljson);
    }

    #[test]
    fn test_format_serde() {
        let format: Format = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, Format::Text);
        assert!(serde_json::from_str::<Format>("\"yaml\"").is_err());
    }

    #[test]
    fn test_format_builds_named_formatter() {
        assert_eq!(Format::Ljson.formatter(None).name(), "ljson");
        assert_eq!(Format::Text.formatter(Some("sshd")).name(), "text");
    }

    #[test]
    fn test_freeform_serialization_failure() {
        let mut data = HashMap::new();
        data.insert((1, 2), "tuple keys are not valid JSON object keys");
        assert!(Freeform::to_json(&data).is_err());
        assert!(Freeform::to_json(&vec![1, 2, 3]).is_ok());
    }
}
