//! Shrink-and-filter pass (the "feedback" pass) and word-level truncation.

use serde_json::Value;

use crate::core::prune::prune;

/// Golden ratio; the shrink factor for arrays and word lists.
///
/// The `floor(n/φ)+1` slice length is preserved as-is for output
/// compatibility; no optimality property is assumed.
pub const PHI: f64 = 1.618033988749895;

/// Shrink one level of a nested value.
///
/// - Object: same keys, each value passed once through [`prune`].
/// - Array of length `n`: the first `floor(n/φ) + 1` elements, each passed
///   once through [`prune`]. An empty array stays empty (there is nothing to
///   take).
/// - Strings and scalars: unchanged.
pub fn shrink(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, entry)| (key, prune(entry)))
                .collect(),
        ),
        Value::Array(items) => {
            let keep = phi_slice_len(items.len());
            Value::Array(items.into_iter().take(keep).map(prune).collect())
        }
        other @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)) => other,
    }
}

/// `floor(n/φ) + 1`: always at least 1, always at most `n` for `n ≥ 2`.
fn phi_slice_len(n: usize) -> usize {
    (n as f64 / PHI) as usize + 1
}

/// Keep the first `max(floor(words/φ), 1)` whitespace-delimited words.
///
/// The plain-language counterpart of [`shrink`]: progressively trims prose
/// instead of arrays. An empty or whitespace-only input yields `""`.
pub fn simplify(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let keep = ((words.len() as f64 / PHI) as usize).max(1);
    words[..keep.min(words.len())].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_prunes_each_value_once() {
        let shrunk = shrink(json!({"text": "hello world", "phi": PHI}));
        assert_eq!(shrunk, json!({"text": "hello", "phi": PHI}));
    }

    #[test]
    fn array_of_ten_keeps_seven() {
        let items: Vec<Value> = (0..10).map(|i| json!(i)).collect();
        let shrunk = shrink(Value::Array(items));
        assert_eq!(shrunk.as_array().unwrap().len(), 7);
    }

    #[test]
    fn empty_array_stays_empty() {
        assert_eq!(shrink(json!([])), json!([]));
    }

    #[test]
    fn single_element_array_survives() {
        assert_eq!(shrink(json!(["only one"])), json!(["only"]));
    }

    #[test]
    fn strings_and_scalars_pass_through() {
        assert_eq!(shrink(json!("hello world")), json!("hello world"));
        assert_eq!(shrink(json!(42)), json!(42));
        assert_eq!(shrink(Value::Null), Value::Null);
    }

    #[test]
    fn slice_lengths_match_reference_formula() {
        let expected = [1, 1, 2, 2, 3, 4, 4, 5, 5, 6, 7];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(phi_slice_len(n), *want, "n = {n}");
        }
    }

    #[test]
    fn simplify_keeps_phi_ratio_of_words() {
        // 5 words: floor(5/φ) = 3
        assert_eq!(simplify("one two three four five"), "one two three");
    }

    #[test]
    fn simplify_keeps_at_least_one_word() {
        assert_eq!(simplify("single"), "single");
    }

    #[test]
    fn simplify_of_empty_text_is_empty() {
        assert_eq!(simplify(""), "");
        assert_eq!(simplify("   "), "");
    }
}
