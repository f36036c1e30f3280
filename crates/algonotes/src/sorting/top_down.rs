//! Recursive (top-down) merge sort.
//!
//! ## Purpose
//!
//! This module implements the classic divide-and-conquer driver: a run of
//! length ≤ 1 is already sorted; anything longer is split at the floor of
//! half its length, each half is sorted recursively, and the two halves are
//! merged.
//!
//! ## Design notes
//!
//! * **Non-mutating**: The input slice is never modified; every level
//!   produces fresh output, so even the base case returns a copy rather
//!   than an alias.
//! * **Recursion guard**: The depth of each call is checked against a
//!   caller-supplied limit. Exceeding it fails with
//!   [`AlgoError::RecursionLimit`] before the stack does, with no partial
//!   result.
//! * **Fast path**: Strictly ascending input is returned as a copy without
//!   merging. The strictness matters: equal neighbours must take the full
//!   path so the right-precedence tie-break stays observable.
//!
//! ## Key concepts
//!
//! * **Complexity**: O(n log n) comparisons; O(n) auxiliary space (sibling
//!   allocations at the same depth are disjoint, so the per-level copies
//!   sum to O(n), not O(n log n)); O(log n) recursion depth.
//! * **Equal keys**: Right-precedence merging emits equal-keyed elements in
//!   reverse of their input order. Both halves of any split are contiguous,
//!   so the right half always holds the later input positions; induction
//!   over the merge tree gives full reversal within each equal-key group.
//!
//! ## Non-goals
//!
//! * This module does not validate comparability (handled by the engine).
//! * This module does not parallelize the sub-sorts (see `fastalgonotes`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::AlgoError;
use crate::sorting::merge::merge_by;
use crate::sorting::{strictly_ascending, SortStats};

// ============================================================================
// Top-Down Driver
// ============================================================================

/// Sort a slice into a new vector using recursive merge sort.
///
/// `depth_limit` bounds the recursion depth (the root call is depth 1); a
/// limit of 64 comfortably covers every input that fits in memory.
pub fn sort_by<T, F>(
    items: &[T],
    depth_limit: usize,
    cmp: &mut F,
) -> Result<(Vec<T>, SortStats), AlgoError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stats = SortStats::default();

    if strictly_ascending(items, cmp, &mut stats.comparisons) {
        return Ok((items.to_vec(), stats));
    }

    let values = sort_range(items, 1, depth_limit, cmp, &mut stats)?;
    Ok((values, stats))
}

/// Recursive worker: sort one contiguous span at the given depth.
fn sort_range<T, F>(
    items: &[T],
    depth: usize,
    depth_limit: usize,
    cmp: &mut F,
    stats: &mut SortStats,
) -> Result<Vec<T>, AlgoError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if depth > depth_limit {
        return Err(AlgoError::RecursionLimit {
            depth,
            limit: depth_limit,
        });
    }
    if depth > stats.levels {
        stats.levels = depth;
    }

    // Base case: a span of length <= 1 is already sorted. Copy, never alias.
    if items.len() <= 1 {
        return Ok(items.to_vec());
    }

    let mid = items.len() / 2;
    let left = sort_range(&items[..mid], depth + 1, depth_limit, cmp, stats)?;
    let right = sort_range(&items[mid..], depth + 1, depth_limit, cmp, stats)?;

    Ok(merge_by(&left, &right, cmp, &mut stats.comparisons))
}
