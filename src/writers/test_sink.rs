//! Writer for unit tests
//!
//! Lines are kept in a [`TestContext`] so assertions can inspect them, and
//! echoed through `println!` so that libtest shows them next to the failing
//! test (and swallows them for passing ones).

use crate::core::{Entry, Format, Formatter, Freeform, Logger, Result, Severity, Writer};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Per-test capture buffer.
///
/// Cloning is cheap and every clone observes the same lines, so a test keeps
/// one clone for assertions and hands another to the configuration.
#[derive(Clone)]
pub struct TestContext {
    name: Arc<str>,
    lines: Arc<Mutex<Vec<String>>>,
    colors: bool,
}

impl TestContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
            lines: Arc::new(Mutex::new(Vec::new())),
            colors: true,
        }
    }

    /// Disable ANSI colours in the echoed output
    #[must_use]
    pub fn without_colors(mut self) -> Self {
        self.colors = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the captured lines, without trailing newlines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    fn echo(&self, severity: Severity, line: &str) {
        println!("{} {}", self.level_tag(severity), line);
    }

    #[cfg(feature = "console")]
    fn level_tag(&self, severity: Severity) -> String {
        use colored::Colorize;

        let tag = format!("[{}:{}]", self.name, severity);
        if self.colors {
            tag.color(severity.color_code()).to_string()
        } else {
            tag
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_tag(&self, severity: Severity) -> String {
        format!("[{}:{}]", self.name, severity)
    }
}

impl fmt::Debug for TestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestContext")
            .field("name", &self.name)
            .field("lines", &self.lines.lock().len())
            .finish()
    }
}

pub struct TestWriter {
    context: TestContext,
    formatter: Arc<dyn Formatter>,
}

impl TestWriter {
    pub fn new(context: TestContext, formatter: Arc<dyn Formatter>) -> Self {
        Self { context, formatter }
    }

    pub fn context(&self) -> &TestContext {
        &self.context
    }

    fn record(&self, severity: Severity, bytes: Vec<u8>) {
        let line = String::from_utf8_lossy(&bytes).trim_end().to_string();
        // Holding the capture lock while echoing keeps lines ordered
        let mut lines = self.context.lines.lock();
        self.context.echo(severity, &line);
        lines.push(line);
    }
}

impl Writer for TestWriter {
    fn write(&self, severity: Severity, entry: &Entry) -> Result<()> {
        self.record(severity, self.formatter.format(severity, entry));
        Ok(())
    }

    fn write_freeform(&self, severity: Severity, data: &dyn Freeform) -> Result<()> {
        self.record(severity, self.formatter.format_freeform(severity, data));
        Ok(())
    }

    fn rotate(&self) -> Result<()> {
        Ok(())
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "test"
    }
}

impl Logger {
    /// Debug-level, text-format logger for a single test.
    ///
    /// Lines are tagged with `name` as their module, echoed through the test
    /// harness and captured in the returned context.
    ///
    /// ```
    /// use log_pipeline::Logger;
    ///
    /// let (logger, context) = Logger::for_test("handles_retry");
    /// logger.debug("retrying");
    /// assert_eq!(context.lines(), ["[debug]\t[handles_retry]\tretrying"]);
    /// ```
    pub fn for_test(name: &str) -> (Logger, TestContext) {
        let context = TestContext::new(name);
        let writer = TestWriter::new(context.clone(), Format::Text.formatter(Some(name)));
        (Logger::new(Severity::Debug, Arc::new(writer)), context)
    }
}
