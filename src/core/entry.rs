//! Structured log entries
//!
//! An [`Entry`] is the unit that flows through the pipeline: a stable
//! machine-readable code, a human explanation rendered once at
//! construction, and an immutable set of labels. Entries double as the
//! application's error type, optionally wrapping the lower-level cause.

use super::error::LoggerError;
use super::labels::{LabelValue, Labels};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Well-known entry codes
pub mod codes {
    /// Writing to the log destination failed (e.g. the disk is full)
    pub const E_LOG_WRITE_FAILED: &str = "E_LOG_WRITE_FAILED";
    /// A log rotation was requested but could not be completed
    pub const E_LOG_ROTATE_FAILED: &str = "E_LOG_ROTATE_FAILED";
    /// The log file could not be opened
    pub const E_LOG_FILE_OPEN_FAILED: &str = "E_LOG_FILE_OPEN_FAILED";
    /// The logging configuration was rejected
    pub const E_LOG_CONFIG_INVALID: &str = "E_LOG_CONFIG_INVALID";
    /// A payload that carried no code of its own
    pub const E_UNKNOWN_ERROR: &str = "E_UNKNOWN_ERROR";
}

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Clone)]
pub struct Entry {
    code: Arc<str>,
    explanation: Arc<str>,
    labels: Arc<Labels>,
    cause: Option<Cause>,
}

impl Entry {
    /// Create an entry from an already rendered explanation.
    ///
    /// Use the [`entry!`](crate::entry) macro to render a template with
    /// arguments in one step.
    pub fn new(code: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            code: Arc::from(code.into()),
            explanation: Arc::from(explanation.into()),
            labels: Arc::new(Labels::new()),
            cause: None,
        }
    }

    /// Create an entry that keeps `cause` as its underlying error
    pub fn wrap<E>(cause: E, code: impl Into<String>, explanation: impl Into<String>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let mut entry = Self::new(code, explanation);
        entry.cause = Some(Arc::new(cause));
        entry
    }

    pub(crate) fn wrap_boxed(
        cause: Box<dyn StdError + Send + Sync + 'static>,
        code: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        let mut entry = Self::new(code, explanation);
        entry.cause = Some(Arc::from(cause));
        entry
    }

    /// Return a copy of this entry with one more label.
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

    /// Merge labels that are not already set on this entry
    pub(crate) fn with_default_labels(self, defaults: &Labels) -> Self {
        if defaults.is_empty() {
            return self;
        }
        let mut labels = defaults.clone();
        labels.extend(self.labels.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self {
            labels: Arc::new(labels),
            ..self
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// The lower-level error this entry was built from, if any
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.explanation)
    }
}

impl StdError for Entry {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl From<LoggerError> for Entry {
    fn from(err: LoggerError) -> Self {
        let code = err.code();
        let explanation = err.to_string();
        Entry::wrap(err, code, explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_entry_accessors() {
        let entry = Entry::new("E_TEST", "hello");
        assert_eq!(entry.code(), "E_TEST");
        assert_eq!(entry.explanation(), "hello");
        assert!(entry.labels().is_empty());
        assert!(entry.cause().is_none());
        assert_eq!(entry.to_string(), "hello");
    }

    #[test]
    fn test_with_label_is_copy_on_write() {
        let parent = Entry::new("E_TEST", "connected").with_label("ip", "10.0.0.1");
        let child = parent.with_label("user", "root");

        assert_eq!(parent.labels().len(), 1);
        assert!(!parent.labels().contains_key("user"));
        assert_eq!(child.labels().len(), 2);
        assert_eq!(child.code(), parent.code());
        assert_eq!(child.explanation(), parent.explanation());
    }

    #[test]
    #[should_panic(expected = "label name cannot be empty")]
    fn test_empty_label_name_panics() {
        let _ = Entry::new("E_TEST", "x").with_label("", 1);
    }

    #[test]
    fn test_default_labels_do_not_override() {
        let mut defaults = Labels::new();
        defaults.insert("user".into(), "logger-level".into());
        defaults.insert("module".into(), "auth".into());

        let entry = Entry::new("E_TEST", "x")
            .with_label("user", "entry-level")
            .with_default_labels(&defaults);

        assert_eq!(entry.labels()["user"], LabelValue::from("entry-level"));
        assert_eq!(entry.labels()["module"], LabelValue::from("auth"));
    }

    #[test]
    fn test_wrap_preserves_cause() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionReset, "peer reset");
        let entry = Entry::wrap(io_err, "E_CONNECTION", "backend connection lost");

        assert_eq!(entry.code(), "E_CONNECTION");
        assert_eq!(entry.explanation(), "backend connection lost");
        let source = entry.source().expect("cause is exposed as source");
        assert_eq!(source.to_string(), "peer reset");
    }

    #[test]
    fn test_from_logger_error() {
        let err = LoggerError::file_open(
            "/nonexistent/app.log",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let entry = Entry::from(err);
        assert_eq!(entry.code(), codes::E_LOG_FILE_OPEN_FAILED);
        assert!(entry.explanation().contains("/nonexistent/app.log"));
        assert!(entry.cause().is_some());
    }
}
