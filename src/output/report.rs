//! Result of one CLI operation, printable as text rows or JSON.

use serde::Serialize;
use serde_json::Value;

use super::terminal::format_row;

const LABEL_WIDTH: usize = 20;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    /// Operation name, e.g. `"mask-to-cidr"`.
    pub operation: String,
    pub input: Vec<String>,
    pub result: Value,
}

impl Report {
    pub fn new<S: Into<String>>(operation: &str, input: Vec<S>, result: impl Serialize) -> Self {
        Report {
            operation: operation.to_string(),
            input: input.into_iter().map(Into::into).collect(),
            // plain data types used here always serialize
            result: serde_json::to_value(result).unwrap_or(Value::Null),
        }
    }

    /// One row per result field; a scalar result is a single `result` row.
    pub fn to_text(&self) -> String {
        match &self.result {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| format_row(key, plain(value), LABEL_WIDTH))
                .collect::<Vec<String>>()
                .join("\n"),
            value => format_row("result", plain(value), LABEL_WIDTH),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Strings without JSON quotes.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
