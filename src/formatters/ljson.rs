//! Newline-delimited JSON formatter
//!
//! Writes each entry as a single-line JSON object (JSONL format),
//! compatible with log aggregation tools like ELK, Loki, etc.

use crate::core::labels::labels_to_json;
use crate::core::{Entry, Formatter, Freeform, Severity, TimestampFormat};
use chrono::Local;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct LjsonFormatter {
    module: Option<String>,
}

impl LjsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every line with a `module` field
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    fn line(
        &self,
        severity: Severity,
        code: &str,
        message: &str,
        details: Option<Value>,
    ) -> Vec<u8> {
        let mut json_obj = Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            Value::String(TimestampFormat::Rfc3339.format(&Local::now())),
        );
        json_obj.insert(
            "level".to_string(),
            Value::String(severity.name().to_string()),
        );
        if !code.is_empty() {
            json_obj.insert("code".to_string(), Value::String(code.to_string()));
        }
        if let Some(ref module) = self.module {
            json_obj.insert("module".to_string(), Value::String(module.clone()));
        }
        if !message.is_empty() {
            json_obj.insert("message".to_string(), Value::String(message.to_string()));
        }
        if let Some(details) = details.filter(|d| !is_empty_value(d)) {
            json_obj.insert("details".to_string(), details);
        }

        let mut line = serde_json::to_vec(&Value::Object(json_obj)).unwrap_or_default();
        line.push(b'\n');
        line
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

impl Formatter for LjsonFormatter {
    fn format(&self, severity: Severity, entry: &Entry) -> Vec<u8> {
        let details = Value::Object(labels_to_json(entry.labels()));
        self.line(severity, entry.code(), entry.explanation(), Some(details))
    }

    fn format_freeform(&self, severity: Severity, data: &dyn Freeform) -> Vec<u8> {
        match data.to_json() {
            Ok(details) => self.line(severity, "", "", Some(details)),
            Err(_) => self.line(severity, "", &format!("{:?}", data), None),
        }
    }

    fn format_body(&self, entry: &Entry) -> String {
        let mut json_obj = Map::new();
        if !entry.code().is_empty() {
            json_obj.insert("code".to_string(), Value::String(entry.code().to_string()));
        }
        if !entry.explanation().is_empty() {
            json_obj.insert(
                "message".to_string(),
                Value::String(entry.explanation().to_string()),
            );
        }
        if !entry.labels().is_empty() {
            json_obj.insert(
                "details".to_string(),
                Value::Object(labels_to_json(entry.labels())),
            );
        }
        serde_json::to_string(&Value::Object(json_obj)).unwrap_or_default()
    }

    fn name(&self) -> &str {
        "ljson"
    }
}
