//! Frequency counting with a hash map.
//!
//! ## Purpose
//!
//! This module counts item occurrences. A hash map gives O(1) amortized
//! membership tests and inserts, against O(n) for scanning a list per item,
//! so counting n items costs O(n) instead of O(n²).
//!
//! ## Design notes
//!
//! * **Entry API**: `entry(..).or_insert(0)` replaces the explicit
//!   "check membership, then insert or bump" dance with one probe.
//! * **Bridge to the sorter**: [`frequency_vector`] returns key-sorted
//!   pairs, the exact input shape the sorted-order inner product expects.
//!
//! ## Non-goals
//!
//! * This module does not tokenize text (see `text::translate`).

// External dependencies
use core::hash::Hash;
use std::collections::HashMap;
use std::vec::Vec;

// ============================================================================
// Counting
// ============================================================================

/// Count how many times each item occurs.
pub fn count_frequencies<T, I>(items: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Count item occurrences and return them as key-sorted `(item, count)`
/// pairs, ready for [`inner_product`](crate::analysis::inner_product).
///
/// Keys are unique by construction, so the result has strictly ascending
/// keys.
pub fn frequency_vector<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Ord + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut pairs: Vec<(T, usize)> = count_frequencies(items).into_iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}
