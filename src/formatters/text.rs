//! Tab-delimited text formatter
//!
//! Lines have the form `[<level>]\t[<module>]\t<message>\n`. Labels are
//! appended to the message as `(key=value ...)`.

use crate::core::labels::format_labels;
use crate::core::{Entry, Formatter, Freeform, Severity};

#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    module: Option<String>,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Escape line and field separators so a message can never add a
    /// field or start a fake entry.
    fn sanitize(value: &str) -> String {
        value
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn line(&self, severity: Severity, message: &str) -> Vec<u8> {
        format!(
            "[{}]\t[{}]\t{}\n",
            severity.name(),
            Self::sanitize(self.module.as_deref().unwrap_or("")),
            Self::sanitize(message)
        )
        .into_bytes()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, severity: Severity, entry: &Entry) -> Vec<u8> {
        self.line(severity, &self.format_body(entry))
    }

    fn format_freeform(&self, severity: Severity, data: &dyn Freeform) -> Vec<u8> {
        let message = match data.to_json() {
            Ok(serde_json::Value::String(text)) => text,
            Ok(value) => value.to_string(),
            Err(_) => format!("{:?}", data),
        };
        self.line(severity, &message)
    }

    fn format_body(&self, entry: &Entry) -> String {
        if entry.labels().is_empty() {
            entry.explanation().to_string()
        } else {
            format!("{} ({})", entry.explanation(), format_labels(entry.labels()))
        }
    }

    fn name(&self) -> &str {
        "text"
    }
}
