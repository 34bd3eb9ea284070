//! Loading reduction input documents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Load a nested value from a JSON file.
///
/// Any well-formed JSON document is a valid input: the reduction filters are
/// total over the value domain, so no shape validation happens here.
pub fn read_value(path: &Path) -> Result<Value> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse input {}", path.display()))?;
    Ok(value)
}
