//! Sorted-order inner product of key-weighted vectors.
//!
//! ## Purpose
//!
//! This module computes the inner product of two sparse vectors represented
//! as key-sorted `(key, weight)` pairs: the sum over shared keys of the
//! product of their weights. Sorted order turns what would be a quadratic
//! key lookup into a single linear two-pointer walk.
//!
//! ## Design notes
//!
//! * **Exploiting sorted order**: Both cursors only ever move forward; each
//!   comparison discards at least one element, so the walk is
//!   O(len(a) + len(b)) key comparisons.
//! * **Generics**: Keys need only `Ord`; weights use `num_traits::NumAssign`
//!   so integer counts and float weights share one implementation.
//!
//! ## Invariants
//!
//! * Inputs have strictly ascending keys (each key appears at most once).
//! * A key missing from either vector contributes nothing to the sum.
//!
//! ## Non-goals
//!
//! * This module does not validate key order (handled by the validator).
//! * This module does not build the vectors (see `analysis::frequency`).

// External dependencies
use core::cmp::Ordering;
use num_traits::NumAssign;

// ============================================================================
// Inner Product
// ============================================================================

/// Compute the inner product of two key-sorted weight vectors.
///
/// ```text
/// inner_product([("and", 3), ("of", 2), ("the", 5)],
///               [("and", 4), ("in", 1), ("of", 1), ("this", 2)]) = 14
/// ```
///
/// Callers must ensure both inputs have strictly ascending keys; the public
/// API validates this before delegating here.
pub fn inner_product<K, W>(a: &[(K, W)], b: &[(K, W)]) -> W
where
    K: Ord,
    W: NumAssign + Copy,
{
    let mut sum = W::zero();
    let mut i = 0;
    let mut j = 0;

    // a[i..] and b[j..] remain to be processed.
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Equal => {
                // Both vectors carry this key.
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                // Key present in a but not in b.
                i += 1;
            }
            Ordering::Greater => {
                // Key present in b but not in a.
                j += 1;
            }
        }
    }

    sum
}
