//! Output Validator — strict decoding of raw model text into five messages.
//!
//! The model is not guaranteed to honour the requested shape, so nothing is
//! coerced: any deviation is a `SchemaMismatch` and the caller decides whether
//! to retry.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::llm_client::strip_json_fences;
use crate::models::cheer::{GeneratedMessage, GenerationResult, EXPECTED_MESSAGE_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaMismatch {
    #[error("model returned a bare number ({0}) instead of a message list")]
    BareNumber(String),

    #[error("model returned no text")]
    EmptyOutput,

    #[error("model output is not valid JSON: {0}")]
    NotJson(String),

    #[error("expected a JSON array of messages, got {0}")]
    UnexpectedShape(&'static str),

    #[error("message {index} does not match {{id: integer, text: string}}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("expected {expected} messages, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("message {index} has empty text")]
    EmptyText { index: usize },
}

/// Parses raw model output into exactly five `{id, text}` records.
pub fn parse_generation(raw: &str) -> Result<GenerationResult, SchemaMismatch> {
    let cleaned = strip_json_fences(raw);
    if cleaned.is_empty() {
        return Err(SchemaMismatch::EmptyOutput);
    }

    let value: Value =
        serde_json::from_str(cleaned).map_err(|e| SchemaMismatch::NotJson(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => unwrap_single_array(map)?,
        Value::Number(n) => return Err(SchemaMismatch::BareNumber(n.to_string())),
        other => return Err(SchemaMismatch::UnexpectedShape(json_kind(&other))),
    };

    let messages = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<GeneratedMessage>(item).map_err(|e| {
                SchemaMismatch::InvalidRecord {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if messages.len() != EXPECTED_MESSAGE_COUNT {
        return Err(SchemaMismatch::WrongCount {
            expected: EXPECTED_MESSAGE_COUNT,
            actual: messages.len(),
        });
    }

    if let Some(index) = messages.iter().position(|m| m.text.trim().is_empty()) {
        return Err(SchemaMismatch::EmptyText { index });
    }

    Ok(messages)
}

/// Accepts `{"messages": [...]}`-style wrappers: an object whose only field is an array.
fn unwrap_single_array(map: Map<String, Value>) -> Result<Vec<Value>, SchemaMismatch> {
    let mut fields = map.into_iter();
    match (fields.next(), fields.next()) {
        (Some((_, Value::Array(items))), None) => Ok(items),
        _ => Err(SchemaMismatch::UnexpectedShape("object")),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
