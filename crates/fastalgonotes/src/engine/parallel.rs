//! Work-splitting parallel merge sort.
//!
//! ## Purpose
//!
//! This module runs the two recursive sub-sorts of top-down merge sort on
//! separate cores via `rayon::join`. The halves are disjoint and their
//! outputs feed only the subsequent merge, so distributing them cannot
//! change the result.
//!
//! ## Design notes
//!
//! * **Sequential cutoff**: Below the cutoff, task-spawn overhead dominates
//!   and the span is handed to the core crate's iterative driver.
//! * **Identical output**: Both the parallel splits and the sequential
//!   driver merge contiguous spans with later input positions on the right,
//!   so the right-precedence tie-break yields the same order (equal keys in
//!   reverse input order) no matter where the cutoff falls.
//! * **No depth guard**: Splitting stops at the cutoff, so recursion depth
//!   is bounded by log2(n / cutoff) and cannot approach the stack ceiling.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by the API layer).
//! * This module does not pick the cutoff (builder's responsibility).

// External dependencies
use core::cmp::Ordering;

// Export dependencies from the core crate
use algonotes::internals::sorting::{bottom_up, merge::merge_by};

// ============================================================================
// Parallel Driver
// ============================================================================

/// Sort a slice into a new vector, evaluating sub-sorts in parallel.
pub fn par_sort_by<T, F>(items: &[T], cutoff: usize, cmp: &F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    if items.len() <= cutoff {
        let (values, _) = bottom_up::sort_by(items, &mut |a: &T, b: &T| cmp(a, b));
        return values;
    }

    let mid = items.len() / 2;
    let (left, right) = rayon::join(
        || par_sort_by(&items[..mid], cutoff, cmp),
        || par_sort_by(&items[mid..], cutoff, cmp),
    );

    let mut comparisons = 0;
    merge_by(&left, &right, &mut |a: &T, b: &T| cmp(a, b), &mut comparisons)
}
