//! Sort result reporting.
//!
//! ## Purpose
//!
//! This module defines [`SortReport`], the output of a configured sort: the
//! sorted values plus optional diagnostics about the work performed.
//!
//! ## Design notes
//!
//! * **Optional outputs**: Diagnostics use `Option` and are only populated
//!   when `return_stats()` was requested on the builder.
//! * **Ergonomics**: Implements `Display` for a human-readable summary
//!   (counts only; elements stay generic).
//!
//! ## Invariants
//!
//! * `values` is a permutation of the sorted input, in non-decreasing
//!   order under the comparator used.
//! * `comparisons` and `levels` are either both present or both absent.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::sorting::Strategy;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a configured sort: values plus optional diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport<T> {
    /// The elements in non-decreasing order.
    pub values: Vec<T>,

    /// Strategy that produced the result.
    pub strategy: Strategy,

    /// Comparator invocations, when stats were requested.
    pub comparisons: Option<usize>,

    /// Merge levels used (recursion depth for top-down, passes for
    /// bottom-up; zero on the already-sorted fast path), when stats were
    /// requested.
    pub levels: Option<usize>,
}

impl<T> SortReport<T> {
    /// Number of sorted elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the input was empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the report, keeping only the sorted values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T> Display for SortReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Merge sort summary:")?;
        writeln!(f, "  Elements: {}", self.values.len())?;
        writeln!(f, "  Strategy: {}", self.strategy.name())?;
        if let Some(comparisons) = self.comparisons {
            writeln!(f, "  Comparisons: {comparisons}")?;
        }
        if let Some(levels) = self.levels {
            writeln!(f, "  Levels: {levels}")?;
        }
        Ok(())
    }
}
