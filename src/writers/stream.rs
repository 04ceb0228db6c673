//! Stream writer for stdout or any caller-supplied `io::Write`

use super::line_sink::LineSink;
use crate::core::{Entry, Formatter, Freeform, LoggerError, Result, Severity, Writer};
use std::io::{self, Write};
use std::sync::Arc;

/// Boxed output stream accepted by [`StreamWriter`]
pub type OutputStream = Box<dyn Write + Send>;

pub struct StreamWriter {
    sink: LineSink<OutputStream>,
}

impl StreamWriter {
    pub fn new(stream: OutputStream, formatter: Arc<dyn Formatter>) -> Self {
        Self {
            sink: LineSink::new("stream", stream, formatter),
        }
    }

    /// Write to the process' standard output
    pub fn stdout(formatter: Arc<dyn Formatter>) -> Self {
        Self::new(Box::new(io::stdout()), formatter)
    }
}

impl Writer for StreamWriter {
    fn write(&self, severity: Severity, entry: &Entry) -> Result<()> {
        self.sink.write(severity, entry)
    }

    fn write_freeform(&self, severity: Severity, data: &dyn Freeform) -> Result<()> {
        self.sink.write_freeform(severity, data)
    }

    /// Streams cannot be reopened
    fn rotate(&self) -> Result<()> {
        Ok(())
    }

    fn close(&self) -> Result<()> {
        if let Some(mut stream) = self.sink.take() {
            stream.flush().map_err(|e| {
                LoggerError::write_failed("stream", "failed to flush stream on close", e)
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::TextFormatter;
    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stream_writer_and_noop_rotate() {
        let buffer = SharedBuffer::default();
        let writer = StreamWriter::new(Box::new(buffer.clone()), Arc::new(TextFormatter::new()));

        writer.write(Severity::Warning, &Entry::new("E", "before")).unwrap();
        writer.rotate().unwrap();
        writer.write(Severity::Warning, &Entry::new("E", "after")).unwrap();

        let content = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert_eq!(content, "[warning]\t[]\tbefore\n[warning]\t[]\tafter\n");
    }

    #[test]
    fn test_close_stops_writes() {
        let writer = StreamWriter::new(Box::new(io::sink()), Arc::new(TextFormatter::new()));
        writer.close().unwrap();
        assert!(writer.write(Severity::Info, &Entry::new("E", "x")).is_err());
        assert!(writer.close().is_ok());
    }
}
