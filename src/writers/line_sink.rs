//! Shared "format under lock, write, flush" machinery
//!
//! File and stream writers differ only in how their handle is opened and
//! whether it can be reopened. Both compose a [`LineSink`] by value and
//! delegate the actual delivery to it.

use crate::core::{Entry, Formatter, Freeform, LoggerError, Result, Severity};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

pub(crate) struct LineSink<W: Write> {
    name: &'static str,
    formatter: Arc<dyn Formatter>,
    handle: Mutex<Option<W>>,
}

impl<W: Write> LineSink<W> {
    pub(crate) fn new(name: &'static str, handle: W, formatter: Arc<dyn Formatter>) -> Self {
        Self {
            name,
            formatter,
            handle: Mutex::new(Some(handle)),
        }
    }

    pub(crate) fn write(&self, severity: Severity, entry: &Entry) -> Result<()> {
        self.deliver(|formatter| formatter.format(severity, entry))
    }

    pub(crate) fn write_freeform(&self, severity: Severity, data: &dyn Freeform) -> Result<()> {
        self.deliver(|formatter| formatter.format_freeform(severity, data))
    }

    fn deliver(&self, render: impl FnOnce(&dyn Formatter) -> Vec<u8>) -> Result<()> {
        let mut guard = self.handle.lock();
        let handle = guard
            .as_mut()
            .ok_or_else(|| LoggerError::closed(self.name))?;

        let line = render(self.formatter.as_ref());
        handle
            .write_all(&line)
            .and_then(|()| handle.flush())
            .map_err(|e| LoggerError::write_failed(self.name, "failed to write log message", e))
    }

    /// Swap the handle under the write lock and hand back the previous one.
    ///
    /// `open` runs while the lock is held, so no line can start between
    /// opening the new handle and installing it.
    pub(crate) fn replace_with<F>(&self, open: F) -> Result<Option<W>>
    where
        F: FnOnce() -> Result<W>,
    {
        let mut guard = self.handle.lock();
        if guard.is_none() {
            return Err(LoggerError::closed(self.name));
        }
        let fresh = open()?;
        Ok(guard.replace(fresh))
    }

    /// Take the handle out, leaving the sink closed
    pub(crate) fn take(&self) -> Option<W> {
        self.handle.lock().take()
    }

    #[cfg(test)]
    pub(crate) fn is_closed(&self) -> bool {
        self.handle.lock().is_none()
    }
}
