//! Logger configuration
//!
//! `Config` can be decoded from JSON (or any other serde format) and then
//! completed with the runtime-only fields that have no textual form, such as
//! a custom output stream or a test capture context.
//!
//! # Example
//!
//! ```
//! use log_pipeline::core::{Config, Destination, Format, Severity};
//!
//! let config: Config = serde_json::from_str(r#"{"level": "debug", "format": "text"}"#).unwrap();
//! assert_eq!(config.level, Severity::Debug);
//! assert_eq!(config.format, Format::Text);
//! assert_eq!(config.destination, Destination::Stdout);
//! ```

use super::error::{LoggerError, Result};
use super::formatter::Format;
use super::severity::Severity;
use crate::writers::{Facility, OutputStream, TestContext};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Default path used by the file destination
pub const DEFAULT_LOG_FILE: &str = "/var/log/log_pipeline/log_pipeline.log";

/// Where log lines are delivered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    #[default]
    Stdout,
    File,
    Syslog,
    Test,
}

impl Destination {
    pub fn as_str(self) -> &'static str {
        match self {
            Destination::Stdout => "stdout",
            Destination::File => "file",
            Destination::Syslog => "syslog",
            Destination::Test => "test",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stdout" => Ok(Destination::Stdout),
            "file" => Ok(Destination::File),
            "syslog" => Ok(Destination::Syslog),
            "test" => Ok(Destination::Test),
            _ => Err(LoggerError::config(
                "destination",
                format!("invalid log destination: {}", s),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SyslogConfig {
    /// Absolute path of a UNIX socket, or `host:port` for UDP
    pub destination: String,
    pub facility: String,
    pub tag: String,
    /// Append `[pid]` to the tag
    pub pid: bool,
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self {
            destination: crate::writers::syslog::DEFAULT_SYSLOG_SOCKET.to_string(),
            facility: "auth".to_string(),
            tag: crate::writers::syslog::DEFAULT_TAG.to_string(),
            pid: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct Config {
    pub level: Severity,
    pub format: Format,
    pub destination: Destination,
    pub file: String,
    /// Tag added to every line by the text and LJSON formats
    pub module: Option<String>,
    pub syslog: SyslogConfig,

    /// Stream for the `stdout` destination; the process' stdout when unset
    #[serde(skip)]
    pub stdout: Option<OutputStream>,

    /// Capture context, required by the `test` destination
    #[serde(skip)]
    pub test: Option<TestContext>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Severity::default(),
            format: Format::default(),
            destination: Destination::default(),
            file: DEFAULT_LOG_FILE.to_string(),
            module: None,
            syslog: SyslogConfig::default(),
            stdout: None,
            test: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a configuration from JSON text.
    ///
    /// Out-of-range levels and unknown format or destination names are
    /// rejected here, before any logger exists.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("config", e.to_string()))
    }

    #[must_use]
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Log to the file at `path`
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.destination = Destination::File;
        self.file = path.into();
        self
    }

    /// Log to syslog with the given settings
    #[must_use]
    pub fn with_syslog(mut self, syslog: SyslogConfig) -> Self {
        self.destination = Destination::Syslog;
        self.syslog = syslog;
        self
    }

    /// Log to a caller-supplied stream
    #[must_use]
    pub fn with_stream(mut self, stream: OutputStream) -> Self {
        self.destination = Destination::Stdout;
        self.stdout = Some(stream);
        self
    }

    /// Capture lines in a test context
    #[must_use]
    pub fn with_test_context(mut self, context: TestContext) -> Self {
        self.destination = Destination::Test;
        self.test = Some(context);
        self
    }

    /// Destination-specific checks that serde cannot express
    pub fn validate(&self) -> Result<()> {
        match self.destination {
            Destination::Stdout => Ok(()),
            Destination::File => {
                if self.file.trim().is_empty() {
                    return Err(LoggerError::config("file", "log file path cannot be empty"));
                }
                Ok(())
            }
            Destination::Syslog => {
                self.syslog.facility.parse::<Facility>()?;
                Ok(())
            }
            Destination::Test => {
                if self.test.is_none() {
                    return Err(LoggerError::config(
                        "test",
                        "test destination requires a test context",
                    ));
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("level", &self.level)
            .field("format", &self.format)
            .field("destination", &self.destination)
            .field("file", &self.file)
            .field("module", &self.module)
            .field("syslog", &self.syslog)
            .field("stdout", &self.stdout.as_ref().map(|_| "<stream>"))
            .field("test", &self.test)
            .finish()
    }
}
