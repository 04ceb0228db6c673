//! # log_pipeline
//!
//! Structured, level-filtered logging. Events carry a syslog severity, a
//! stable machine-readable code, a human explanation and a set of labels.
//! They are rendered by a [`Formatter`](core::Formatter) (line-delimited JSON
//! or tab-delimited text) and delivered synchronously to a single
//! destination: a stream, a rotatable file, a syslog socket or a test
//! capture buffer.
//!
//! ## Example
//!
//! ```
//! use log_pipeline::prelude::*;
//!
//! let context = TestContext::new("quickstart");
//! let logger = Logger::from_config(
//!     Config::new()
//!         .with_level(Severity::Info)
//!         .with_test_context(context.clone()),
//! )
//! .unwrap();
//!
//! let request = logger.with_label("request_id", "r-42");
//! request.info(Entry::new("E_REQ_DONE", "request finished").with_label("status", 200));
//! request.debug("not delivered");
//!
//! let lines = context.lines();
//! assert_eq!(lines.len(), 1);
//! let line: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
//! assert_eq!(line["level"], "info");
//! assert_eq!(line["details"]["request_id"], "r-42");
//! ```

pub mod core;
pub mod formatters;
pub mod line_writer;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Config, Destination, Entry, Format, LabelValue, Logger, LoggerError, LoggerFactory,
        Payload, Result, Severity, SyslogConfig,
    };
    pub use crate::line_writer::LogLineWriter;
    pub use crate::writers::{Facility, TestContext};
}

pub use crate::core::{
    codes, Config, Destination, Entry, Format, Formatter, Freeform, LabelValue, Labels, Logger,
    LoggerError, LoggerFactory, Payload, Result, Severity, SyslogConfig, TimestampFormat, Writer,
};
pub use line_writer::LogLineWriter;
pub use writers::{FileWriter, StreamWriter, SyslogWriter, TestContext, TestWriter};
