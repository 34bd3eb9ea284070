//! Test-only helpers for constructing nested values.

use serde_json::{json, Value};

use crate::core::shrink::PHI;

/// A deterministic nested value exercising every filter branch: a falsy
/// entry, prose needing truncation, an over-long array element, and scalars.
pub fn nested_fixture() -> Value {
    json!({
        "name": "flow",
        "summary": "express everything simply",
        "tags": ["short", "a".repeat(25), "tiny"],
        "empty": "",
        "phi": PHI,
    })
}

/// An array of `n` distinct short strings, for slice-length assertions.
pub fn indexed_strings(n: usize) -> Value {
    Value::Array((0..n).map(|i| json!(format!("item{i}"))).collect())
}
