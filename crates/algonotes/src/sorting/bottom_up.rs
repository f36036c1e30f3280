//! Iterative (bottom-up) merge sort.
//!
//! ## Purpose
//!
//! This module implements the recursion-free driver: start from runs of
//! width 1 (trivially sorted) and repeatedly merge adjacent run pairs,
//! doubling the width each pass until a single run covers the input.
//!
//! ## Design notes
//!
//! * **No recursion**: Control state is two indices and a width, so the
//!   driver is immune to stack exhaustion and needs no depth guard. This is
//!   the variant to use when n approaches the platform's recursion ceiling.
//! * **Identical output**: Each pass merges contiguous spans with the later
//!   input positions on the right, the same property the top-down split
//!   has. Right-precedence merging therefore emits equal-keyed elements in
//!   reverse input order under either driver, and the two outputs match
//!   element for element.
//! * **Fast path**: Shared with the top-down driver; strictly ascending
//!   input returns a copy after n - 1 comparisons.
//!
//! ## Invariants
//!
//! * After the pass at width w, every aligned span of 2w elements is sorted.
//! * ceil(log2 n) passes complete the sort.
//!
//! ## Non-goals
//!
//! * This module does not validate comparability (handled by the engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::sorting::merge::merge_by;
use crate::sorting::{strictly_ascending, SortStats};

// ============================================================================
// Bottom-Up Driver
// ============================================================================

/// Sort a slice into a new vector using iterative merge sort.
///
/// Infallible: with no recursion there is no depth limit to exceed.
pub fn sort_by<T, F>(items: &[T], cmp: &mut F) -> (Vec<T>, SortStats)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stats = SortStats::default();

    if strictly_ascending(items, cmp, &mut stats.comparisons) {
        return (items.to_vec(), stats);
    }

    let n = items.len();
    let mut current = items.to_vec();
    let mut width = 1;

    while width < n {
        let mut next = Vec::with_capacity(n);
        let mut start = 0;

        while start < n {
            let mid = usize::min(start + width, n);
            let end = usize::min(start + 2 * width, n);
            // The tail run past `mid` may be empty; merge_by appends the
            // left run unchanged in that case.
            let merged = merge_by(
                &current[start..mid],
                &current[mid..end],
                cmp,
                &mut stats.comparisons,
            );
            next.extend(merged);
            start = end;
        }

        current = next;
        width *= 2;
        stats.levels += 1;
    }

    (current, stats)
}
