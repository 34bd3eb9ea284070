//! Built-in seed document for the reduction demo.

use serde_json::{json, Value};

use crate::core::shrink::PHI;

/// The flow language self-description used when `reduce` gets no input file.
///
/// One rule string is deliberately longer than the pruning filter's 20-char
/// limit, so a reduction visibly drops it.
pub fn seed_document() -> Value {
    json!({
        "language": "flow",
        "goal": "express everything simply",
        "rules": [
            "no punctuation",
            "words carry many senses",
            "all languages",
            "all scripts",
            "emoji ok",
            "utf8 native",
        ],
        "compile": ["cpp", "rust", "go", "zig", "python", "c"],
        "phi": PHI,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prune::MAX_ELEMENT_LEN;
    use crate::core::value::display_len;

    #[test]
    fn seed_has_one_rule_over_the_pruning_limit() {
        let seed = seed_document();
        let over_limit = seed["rules"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|rule| display_len(rule) > MAX_ELEMENT_LEN)
            .count();
        assert_eq!(over_limit, 1);
    }

    #[test]
    fn seed_keys_keep_declaration_order() {
        let seed = seed_document();
        let keys: Vec<&String> = seed.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["language", "goal", "rules", "compile", "phi"]);
    }
}
