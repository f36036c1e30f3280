//! Linear merge of two individually sorted runs.
//!
//! ## Purpose
//!
//! This module provides the merge step shared by both merge sort drivers:
//! given two runs that are each sorted, produce one sorted run containing
//! all elements of both in O(len(left) + len(right)) comparisons.
//!
//! ## Design notes
//!
//! * **Tie-break**: When two elements compare equal, the **right** run's
//!   element is emitted first. This matches the textbook loop
//!   `if L[i] < R[j]: take L else take R`, whose `else` branch claims ties
//!   for the right side.
//! * **Exhaustion**: Once one run is exhausted, the remainder of the other
//!   is appended without further comparison; it is already internally
//!   sorted.
//! * **Non-mutating**: Inputs are borrowed; the merged run is a fresh
//!   allocation sized up front.
//!
//! ## Invariants
//!
//! * Both inputs are individually sorted under the supplied comparator.
//! * The output length equals the sum of the input lengths.
//! * Elements that compare equal appear right-run-first in the output.
//!
//! ## Non-goals
//!
//! * This module does not split or sort; the drivers own that.
//! * This module does not validate comparability (handled by the engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Merge
// ============================================================================

/// Merge two sorted runs into one sorted run.
///
/// `comparisons` is incremented once per comparator invocation so callers
/// can report comparison counts without threading a separate accumulator.
pub fn merge_by<T, F>(left: &[T], right: &[T], cmp: &mut F, comparisons: &mut usize) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        *comparisons += 1;
        if cmp(&left[i], &right[j]) == Ordering::Less {
            merged.push(left[i].clone());
            i += 1;
        } else {
            // Ties land here: the right run takes precedence on equality.
            merged.push(right[j].clone());
            j += 1;
        }
    }

    // At most one of these extends; the leftover run is already sorted.
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}
