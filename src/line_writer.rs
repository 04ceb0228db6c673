//! `io::Write` adapter that turns written text into log lines
//!
//! Useful for handing the pipeline to code that only knows how to write to
//! a stream, such as a child process' captured output.

use crate::core::{Logger, Severity};
use std::io::{self, Write};

/// Buffers bytes until a newline and logs each complete, non-blank line.
///
/// Lines are logged at `info` unless another severity is chosen with
/// [`LogLineWriter::with_severity`]. Any trailing partial line is logged on
/// [`flush`](Write::flush) and on drop.
///
/// ```
/// use log_pipeline::prelude::*;
/// use std::io::Write;
///
/// let context = TestContext::new("line_writer");
/// let logger = Logger::from_config(
///     Config::new()
///         .with_level(Severity::Info)
///         .with_test_context(context.clone()),
/// )
/// .unwrap();
///
/// let mut out = LogLineWriter::new(logger);
/// write!(out, "first\nsec").unwrap();
/// write!(out, "ond\n").unwrap();
/// assert_eq!(context.lines().len(), 2);
/// ```
pub struct LogLineWriter {
    logger: Logger,
    severity: Severity,
    pending: Vec<u8>,
}

impl LogLineWriter {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            severity: Severity::Info,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn emit_line(&self, raw: &[u8]) -> io::Result<()> {
        let text = String::from_utf8_lossy(raw);
        let line = text.trim();
        if line.is_empty() {
            return Ok(());
        }
        self.logger
            .try_emit(self.severity, line)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

impl Write for LogLineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            let (line, tail) = rest.split_at(pos);
            if self.pending.is_empty() {
                self.emit_line(line)?;
            } else {
                self.pending.extend_from_slice(line);
                let joined = std::mem::take(&mut self.pending);
                self.emit_line(&joined)?;
            }
            rest = &tail[1..];
        }
        self.pending.extend_from_slice(rest);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let remainder = std::mem::take(&mut self.pending);
        self.emit_line(&remainder)
    }
}

impl Drop for LogLineWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
