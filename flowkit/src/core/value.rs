//! Shared predicates over nested values.
//!
//! Nested values are `serde_json::Value`: objects, arrays, strings, and the
//! scalar variants (`Null`, `Bool`, `Number`). Every filter in this crate
//! matches all six variants exhaustively, so an unanticipated shape cannot be
//! silently misclassified — there is no seventh variant to encounter.

use serde_json::Value;

/// Truthiness over nested values.
///
/// Empty strings, arrays, and objects are falsy, as are `null`, `false`, and
/// any number equal to zero. Everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Length in `char`s of a value's display representation.
///
/// Strings count their contents directly (no surrounding quotes); every
/// other variant counts its compact JSON form. Char-based so non-ASCII text
/// is measured by code points, not bytes.
pub fn display_len(value: &Value) -> usize {
    match value {
        Value::String(s) => s.chars().count(),
        other => other.to_string().chars().count(),
    }
}
