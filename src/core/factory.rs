//! Building loggers from configuration

use super::config::{Config, Destination};
use super::error::{LoggerError, Result};
use super::logger::Logger;
use super::writer::Writer;
use crate::writers::{FileWriter, StreamWriter, SyslogWriter, TestWriter};
use std::sync::Arc;

/// Validates a [`Config`] and wires the matching writer and formatter
pub struct LoggerFactory;

impl LoggerFactory {
    /// Build a logger at the configured threshold with no labels.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unusable settings (empty file path,
    /// missing test context, unknown facility, unreachable syslog socket),
    /// or [`LoggerError::FileOpenFailed`] when the log file cannot be opened.
    pub fn make(config: Config) -> Result<Logger> {
        config.validate()?;

        let formatter = config.format.formatter(config.module.as_deref());
        let writer: Arc<dyn Writer> = match config.destination {
            Destination::Stdout => match config.stdout {
                Some(stream) => Arc::new(StreamWriter::new(stream, formatter)),
                None => Arc::new(StreamWriter::stdout(formatter)),
            },
            Destination::File => Arc::new(FileWriter::new(&config.file, formatter)?),
            Destination::Syslog => Arc::new(SyslogWriter::new(&config.syslog, formatter)?),
            Destination::Test => {
                let context = config.test.ok_or_else(|| {
                    LoggerError::config("test", "test destination requires a test context")
                })?;
                Arc::new(TestWriter::new(context, formatter))
            }
        };

        Ok(Logger::new(config.level, writer))
    }

    /// Like [`LoggerFactory::make`], for configurations known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if the logger cannot be built.
    pub fn must_make(config: Config) -> Logger {
        match Self::make(config) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("[LOGGER CRITICAL] failed to create logger ({}): {}", e.code(), e);
                panic!("failed to create logger: {}", e);
            }
        }
    }
}

impl Logger {
    /// Shortcut for [`LoggerFactory::make`]
    pub fn from_config(config: Config) -> Result<Self> {
        LoggerFactory::make(config)
    }
}
