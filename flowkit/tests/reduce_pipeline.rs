//! Integration tests for the reduction pipeline over realistic documents.

use flowkit::core::pipeline::reduce;
use flowkit::seed::seed_document;
use flowkit::test_support::indexed_strings;
use serde_json::json;

#[test]
fn seed_document_reduces_to_known_value() {
    let reduced = reduce(seed_document());
    assert_eq!(
        reduced,
        json!({
            "language": "flow",
            "goal": "express",
            "rules": [
                "no punctuation",
                "all languages",
                "all scripts",
                "emoji ok",
                "utf8 native",
            ],
            "compile": ["cpp", "rust", "go", "zig", "python", "c"],
            "phi": 1.618033988749895,
        })
    );
}

#[test]
fn seed_reduction_is_byte_reproducible() {
    let first = reduce(seed_document()).to_string();
    let second = reduce(seed_document()).to_string();
    assert_eq!(first, second);
}

#[test]
fn top_level_array_converges_to_two_elements() {
    // lengths walk 10 → 7 → 5 → 4 → 3 → 2 and stay there; the final shrink
    // keeps floor(2/φ)+1 = 2
    let reduced = reduce(indexed_strings(10));
    assert_eq!(reduced, json!(["item0", "item1"]));
}

#[test]
fn arrays_nested_in_objects_are_filtered_but_never_sliced() {
    let input = json!({"compile": ["cpp", "rust", "go", "zig", "python", "c"]});
    let reduced = reduce(input.clone());
    // shrink does not recurse, so the nested array keeps all six entries
    assert_eq!(reduced, input);
}

#[test]
fn falsy_entries_never_survive_reduction() {
    let reduced = reduce(json!({
        "kept": "flow",
        "blank": "",
        "zero": 0,
        "off": false,
        "nothing": null,
    }));
    assert_eq!(reduced, json!({"kept": "flow"}));
}
