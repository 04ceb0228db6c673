//! Core types: severities, entries, formatting and the logger itself

pub mod config;
pub mod entry;
pub mod error;
pub mod factory;
pub mod formatter;
pub mod labels;
pub mod logger;
pub mod payload;
pub mod severity;
pub mod timestamp;
pub mod writer;

pub use config::{Config, Destination, SyslogConfig};
pub use entry::{codes, Entry};
pub use error::{LoggerError, Result};
pub use factory::LoggerFactory;
pub use formatter::{Format, Formatter, Freeform};
pub use labels::{LabelValue, Labels};
pub use logger::Logger;
pub use payload::Payload;
pub use severity::Severity;
pub use timestamp::TimestampFormat;
pub use writer::Writer;
