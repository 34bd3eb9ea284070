//! Fixed-iteration reduction pipeline.

use serde_json::Value;
use tracing::debug;

use crate::core::prune::prune;
use crate::core::shrink::shrink;

/// Number of shrink-then-prune rounds.
///
/// Fixed by contract: the pipeline is not a fixed-point search and must not
/// terminate early, so reduced outputs stay size-compatible across runs.
pub const ROUNDS: usize = 50;

/// Reduce a nested value: [`ROUNDS`] rounds of `prune(shrink(v))`, then one
/// final [`shrink`].
///
/// Pure and deterministic: the same input always yields the same output,
/// byte for byte once serialized.
pub fn reduce(value: Value) -> Value {
    let mut current = value;
    for round in 0..ROUNDS {
        current = prune(shrink(current));
        debug!(round, len = current.to_string().len(), "reduction round");
    }
    shrink(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::nested_fixture;
    use serde_json::json;

    #[test]
    fn reduce_is_deterministic() {
        let first = reduce(nested_fixture());
        let second = reduce(nested_fixture());
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn reduce_prunes_falsy_entries_and_long_elements() {
        let reduced = reduce(nested_fixture());
        let map = reduced.as_object().expect("object survives reduction");
        assert!(!map.contains_key("empty"));
        let tags = map["tags"].as_array().expect("tags survive");
        assert!(tags.iter().all(|t| t.as_str().unwrap().len() <= 20));
    }

    #[test]
    fn reduce_truncates_prose_to_first_token() {
        let reduced = reduce(json!({"summary": "express everything simply"}));
        assert_eq!(reduced, json!({"summary": "express"}));
    }

    #[test]
    fn reduce_of_scalar_is_identity() {
        assert_eq!(reduce(json!(7)), json!(7));
        assert_eq!(reduce(Value::Null), Value::Null);
    }

    #[test]
    fn reduce_of_empty_containers_is_stable() {
        assert_eq!(reduce(json!([])), json!([]));
        assert_eq!(reduce(json!({})), json!({}));
    }
}
