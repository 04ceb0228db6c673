//! Logger façade
//!
//! A [`Logger`] is a cheap, cloneable view: a severity threshold, a set of
//! labels added to every entry, and a shared [`Writer`]. Deriving a new view
//! with [`Logger::with_level`] or [`Logger::with_label`] never changes the
//! original, while rotating or closing through any view affects every view
//! sharing the writer.

use super::error::{LoggerError, Result};
use super::formatter::Freeform;
use super::labels::{LabelValue, Labels};
use super::payload::Payload;
use super::severity::Severity;
use super::writer::Writer;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    threshold: Severity,
    labels: Arc<Labels>,
    writer: Arc<dyn Writer>,
}

impl Logger {
    /// Create a logger with no labels that delivers events at or above `threshold`
    pub fn new(threshold: Severity, writer: Arc<dyn Writer>) -> Self {
        Self {
            threshold,
            labels: Arc::new(Labels::new()),
            writer,
        }
    }

    /// Deliver `payload` if `severity` passes the threshold.
    ///
    /// # Panics
    ///
    /// A writer failure is reported on stderr and then escalated as a panic:
    /// a process that can no longer log is not allowed to carry on silently.
    /// Use [`Logger::try_emit`] to handle the error instead.
    pub fn emit<'a>(&self, severity: Severity, payload: impl Into<Payload<'a>>) {
        if let Err(e) = self.try_emit(severity, payload) {
            self.escalate(e);
        }
    }

    /// Like [`Logger::emit`], but returns the writer error to the caller
    pub fn try_emit<'a>(&self, severity: Severity, payload: impl Into<Payload<'a>>) -> Result<()> {
        if !self.threshold.allows(severity) {
            return Ok(());
        }
        let entry = payload.into().into_entry().with_default_labels(&self.labels);
        self.writer.write(severity, &entry)
    }

    /// Log ad-hoc serializable data without building an [`Entry`](crate::core::Entry)
    pub fn emit_freeform(&self, severity: Severity, data: &dyn Freeform) {
        if !self.threshold.allows(severity) {
            return;
        }
        if let Err(e) = self.writer.write_freeform(severity, data) {
            self.escalate(e);
        }
    }

    /// Report a failed write on stderr, then abort the calling thread
    fn escalate(&self, e: LoggerError) -> ! {
        eprintln!(
            "[LOGGER CRITICAL] {} writer failed ({}): {}",
            self.writer.name(),
            e.code(),
            e
        );
        panic!("log write failed: {}", e);
    }

    pub fn emergency<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.emit(Severity::Emergency, payload);
    }

    pub fn alert<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.emit(Severity::Alert, payload);
    }

    pub fn critical<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.emit(Severity::Critical, payload);
    }

    pub fn error<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.emit(Severity::Error, payload);
    }

    pub fn warning<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.emit(Severity::Warning, payload);
    }

    pub fn notice<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.emit(Severity::Notice, payload);
    }

    pub fn info<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.emit(Severity::Info, payload);
    }

    pub fn debug<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.emit(Severity::Debug, payload);
    }

    /// Log at `info`
    pub fn log<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.emit(Severity::Info, payload);
    }

    /// New view with a different threshold
    #[must_use]
    pub fn with_level(&self, threshold: Severity) -> Self {
        Self {
            threshold,
            ..self.clone()
        }
    }

    /// New view that adds `name=value` to every entry it emits.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn with_label(&self, name: impl Into<String>, value: impl Into<LabelValue>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "BUG: label name cannot be empty");
        let mut labels = Labels::clone(&self.labels);
        labels.insert(name, value.into());
        Self {
            labels: Arc::new(labels),
            ..self.clone()
        }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Check whether `severity` would be delivered by this view
    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.threshold.allows(severity)
    }

    pub fn rotate(&self) -> Result<()> {
        self.writer.rotate()
    }

    pub fn close(&self) -> Result<()> {
        self.writer.close()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("labels", &self.labels)
            .field("writer", &self.writer.name())
            .finish()
    }
}
