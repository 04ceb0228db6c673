//! File writer with reopen-style rotation
//!
//! Rotation here means "reopen the same path": an external tool such as
//! logrotate renames the file, then asks the process to rotate, and new
//! lines land in a freshly created file at the configured path.

use super::line_sink::LineSink;
use crate::core::{Entry, Formatter, Freeform, LoggerError, Result, Severity, Writer};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct FileWriter {
    path: PathBuf,
    sink: LineSink<BufWriter<File>>,
}

impl FileWriter {
    /// Open `path` for appending, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::FileOpenFailed`] if the file cannot be opened.
    pub fn new(path: impl Into<PathBuf>, formatter: Arc<dyn Formatter>) -> Result<Self> {
        let path = path.into();
        let file = open_log_file(&path)?;

        Ok(Self {
            sink: LineSink::new("file", file, formatter),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotate_error(&self, message: &str, source: io::Error) -> LoggerError {
        LoggerError::rotate_failed(self.path.display().to_string(), message, source)
    }
}

fn open_log_file(path: &Path) -> Result<BufWriter<File>> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(BufWriter::new)
        .map_err(|e| LoggerError::file_open(path.display().to_string(), e))
}

impl Writer for FileWriter {
    fn write(&self, severity: Severity, entry: &Entry) -> Result<()> {
        self.sink.write(severity, entry)
    }

    fn write_freeform(&self, severity: Severity, data: &dyn Freeform) -> Result<()> {
        self.sink.write_freeform(severity, data)
    }

    fn rotate(&self) -> Result<()> {
        let previous = self
            .sink
            .replace_with(|| open_log_file(&self.path))
            .map_err(|e| match e {
                LoggerError::FileOpenFailed { source, .. } => {
                    self.rotate_error("failed to reopen log file", source)
                }
                LoggerError::WriterClosed { .. } => self.rotate_error(
                    "writer is closed",
                    io::Error::new(io::ErrorKind::NotConnected, "writer is closed"),
                ),
                other => other,
            })?;

        // The new handle is already live; the old one only needs draining
        if let Some(mut old) = previous {
            old.flush()
                .map_err(|e| self.rotate_error("failed to close old log file", e))?;
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        if let Some(mut handle) = self.sink.take() {
            handle.flush().map_err(|e| {
                LoggerError::write_failed("file", "failed to flush log file on close", e)
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::{LjsonFormatter, TextFormatter};
    use std::fs;
    use tempfile::tempdir;

    fn text() -> Arc<dyn Formatter> {
        Arc::new(TextFormatter::new())
    }

    #[test]
    fn test_file_writer_appends() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        fs::write(&log_path, "existing\n")?;

        let writer = FileWriter::new(&log_path, text())?;
        writer.write(Severity::Info, &Entry::new("E_TEST", "appended"))?;

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content, "existing\n[info]\t[]\tappended\n");
        Ok(())
    }

    #[test]
    fn test_open_failure() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened for appending
        let err = FileWriter::new(dir.path(), text()).err().expect("open must fail");
        assert!(matches!(err, LoggerError::FileOpenFailed { .. }));
    }

    #[test]
    fn test_rotate_after_rename() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        let rotated_path = dir.path().join("app.log.1");

        let writer = FileWriter::new(&log_path, Arc::new(LjsonFormatter::new()))?;
        writer.write(Severity::Info, &Entry::new("E_TEST", "line A"))?;

        fs::rename(&log_path, &rotated_path)?;
        writer.rotate()?;
        writer.write(Severity::Info, &Entry::new("E_TEST", "line B"))?;

        let old = fs::read_to_string(&rotated_path)?;
        let new = fs::read_to_string(&log_path)?;
        assert_eq!(old.lines().count(), 1);
        assert!(old.contains("line A"));
        assert_eq!(new.lines().count(), 1);
        assert!(new.contains("line B"));
        Ok(())
    }

    #[test]
    fn test_rotate_failure() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        let writer = FileWriter::new(&log_path, text())?;

        // Replace the file with a directory so reopening fails
        fs::remove_file(&log_path)?;
        fs::create_dir(&log_path)?;

        let err = writer.rotate().unwrap_err();
        assert!(matches!(err, LoggerError::RotateFailed { .. }));
        assert_eq!(err.code(), "E_LOG_ROTATE_FAILED");
        Ok(())
    }

    #[test]
    fn test_write_after_close() -> Result<()> {
        let dir = tempdir()?;
        let writer = FileWriter::new(dir.path().join("app.log"), text())?;
        writer.close()?;
        writer.close()?;

        let err = writer.write(Severity::Info, &Entry::new("E", "late")).unwrap_err();
        assert_eq!(err.code(), "E_LOG_WRITE_FAILED");
        assert!(writer.rotate().is_err());
        Ok(())
    }
}
