//! Tests for hash-map frequency counting.

use algonotes::prelude::*;

#[test]
fn test_counts_occurrences() {
    let counts = count_frequencies(["a", "b", "a", "c", "a", "b"]);
    assert_eq!(counts["a"], 3);
    assert_eq!(counts["b"], 2);
    assert_eq!(counts["c"], 1);
    assert_eq!(counts.len(), 3);
}

#[test]
fn test_empty_input() {
    let counts = count_frequencies(Vec::<String>::new());
    assert!(counts.is_empty());
}

#[test]
fn test_works_with_any_hashable_item() {
    let counts = count_frequencies([1, 1, 2, 3, 3, 3]);
    assert_eq!(counts[&3], 3);
    assert_eq!(counts.get(&4), None);
}

#[test]
fn test_frequency_vector_is_key_sorted() {
    let pairs = frequency_vector(["pear", "apple", "pear", "banana"]);
    assert_eq!(
        pairs,
        vec![("apple", 1), ("banana", 1), ("pear", 2)]
    );
    // Strictly ascending keys: valid inner-product input by construction.
    assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn test_frequency_vector_from_tokens() {
    let tokens = tokenize("To be, or not to be.");
    let pairs = frequency_vector(tokens);
    assert_eq!(
        pairs,
        vec![
            ("be".to_string(), 2),
            ("not".to_string(), 1),
            ("or".to_string(), 1),
            ("to".to_string(), 2),
        ]
    );
}
