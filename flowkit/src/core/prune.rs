//! Single-level pruning filter (the "scalpel" pass).

use serde_json::Value;

use crate::core::value::{display_len, is_truthy};

/// Longest display representation an array element may have and survive.
pub const MAX_ELEMENT_LEN: usize = 20;

/// Prune one level of a nested value.
///
/// - Object: keep only entries with truthy values, in their original order.
/// - Array: keep only elements whose display representation is at most
///   [`MAX_ELEMENT_LEN`] chars, in their original order.
/// - String: keep the first whitespace-delimited token, or `""`.
/// - Scalars (`null`, booleans, numbers): unchanged.
///
/// Deliberately non-recursive: nested containers pass through untouched so
/// repeated application peels one layer per round.
pub fn prune(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, entry)| is_truthy(entry))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| display_len(item) <= MAX_ELEMENT_LEN)
                .collect(),
        ),
        Value::String(text) => Value::String(
            text.split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string(),
        ),
        scalar @ (Value::Null | Value::Bool(_) | Value::Number(_)) => scalar,
    }
}
