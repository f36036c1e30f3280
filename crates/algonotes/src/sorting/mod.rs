//! Layer 2: Sorting
//!
//! # Purpose
//!
//! This layer implements the merge sort component: a linear merge of two
//! sorted runs, a recursive top-down driver with a recursion guard, and an
//! iterative bottom-up driver. Both drivers produce identical output for
//! every input.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Analysis / Text
//!   ↓
//! Layer 2: Sorting ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use core::cmp::Ordering;

/// Linear merge of two sorted runs.
pub mod merge;

/// Recursive (top-down) merge sort.
pub mod top_down;

/// Iterative (bottom-up) merge sort.
pub mod bottom_up;

// ============================================================================
// Shared Types
// ============================================================================

/// Execution strategy for the merge sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Recursive divide-and-conquer: split at the midpoint, sort each half,
    /// merge. O(log n) recursion depth, guarded by a configurable limit.
    #[default]
    TopDown,

    /// Iterative width-doubling passes over runs of 1, 2, 4, ... elements.
    /// No recursion; the variant to reach for when n approaches the
    /// platform's stack ceiling.
    BottomUp,
}

impl Strategy {
    /// Human-readable strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TopDown => "top-down",
            Self::BottomUp => "bottom-up",
        }
    }
}

/// Diagnostics collected while sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStats {
    /// Number of comparator invocations.
    pub comparisons: usize,

    /// Merge levels used: maximum recursion depth for top-down, number of
    /// width-doubling passes for bottom-up. Zero when the fast path for
    /// already-sorted input is taken.
    pub levels: usize,
}

// ============================================================================
// Fast Path
// ============================================================================

/// Check whether adjacent elements are *strictly* ascending.
///
/// Used as the already-sorted fast path by both drivers. The check is
/// deliberately strict: an input with equal neighbours must run through the
/// full merge so the documented right-precedence tie-break is not bypassed.
pub(crate) fn strictly_ascending<T, F>(items: &[T], cmp: &mut F, comparisons: &mut usize) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    for pair in items.windows(2) {
        *comparisons += 1;
        if cmp(&pair[0], &pair[1]) != Ordering::Less {
            return false;
        }
    }
    true
}
