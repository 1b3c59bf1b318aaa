//! # Value Formatting — Diagnostic Rendering
//!
//! Renders option values for error messages. Containers collapse to bare
//! tokens so a message stays single-line regardless of payload size, and the
//! rendering distinguishes `null` from `"null"`.

use serde_json::Value;

/// Render a value the way error messages show it.
///
/// Literal tokens for null and booleans, double-quoted strings, bare
/// `array`/`object` tokens for containers, and the plain string form for
/// numbers. Objects render as the `object` token; the JSON value model has
/// no runtime class names to report.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{s}\""),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
