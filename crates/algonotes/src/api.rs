//! High-level API for the algonotes study library.
//!
//! ## Purpose
//!
//! This module is the primary user-facing entry point. It implements a
//! fluent builder for configuring the merge sorter and re-exports the
//! independent utilities (inner product, frequency counting, memoization,
//! and the string helpers) as free functions validated at the boundary.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters; one-shot free functions for the common cases.
//! * **Validated**: Parameters are checked when `build()` is called; data
//!   is checked before any algorithm runs, so no partial result ever
//!   escapes.
//! * **Non-mutating**: Every sort borrows its input and returns fresh
//!   output.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MergeSortBuilder`] via `MergeSort::new()`.
//! 2. Chain configuration methods (`.strategy()`, `.depth_limit()`,
//!    `.return_stats()`).
//! 3. Call `.build()` to obtain a [`Sorter`], then `.sort()` / `.sort_by()`
//!    / `.sort_partial()` as needed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::NumAssign;

// Internal dependencies
use crate::analysis::inner_product;
use crate::engine::validator::Validator;
use crate::sorting::{bottom_up, top_down};

// Publicly re-exported types
pub use crate::engine::output::SortReport;
pub use crate::primitives::errors::AlgoError;
pub use crate::sorting::{SortStats, Strategy};
pub use crate::text::concat::{concat_all, join_mapped};
pub use crate::text::translate::{tokenize, TranslationTable, ASCII_PUNCTUATION};

#[cfg(feature = "std")]
pub use crate::analysis::frequency::{count_frequencies, frequency_vector};
#[cfg(feature = "std")]
pub use crate::analysis::memo::{Memo, MAX_FIBONACCI_ARGUMENT};

/// Default recursion-depth ceiling for the top-down strategy.
///
/// Depth 64 covers any input that fits in an address space; hitting it
/// means runaway recursion, not a big slice.
pub const DEFAULT_DEPTH_LIMIT: usize = 64;

// ============================================================================
// Merge Sort Builder
// ============================================================================

/// Fluent builder for configuring a merge [`Sorter`].
///
/// ```rust
/// use algonotes::prelude::*;
///
/// let sorter = MergeSort::new()
///     .strategy(BottomUp)
///     .return_stats()
///     .build()?;
///
/// let report = sorter.sort(&[2, 1, 2, 1])?;
/// assert_eq!(report.values, vec![1, 1, 2, 2]);
/// # Result::<(), AlgoError>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MergeSortBuilder {
    /// Execution strategy (default: top-down).
    pub strategy: Option<Strategy>,

    /// Recursion-depth ceiling for the top-down strategy.
    pub depth_limit: Option<usize>,

    /// Whether to report comparison/level diagnostics.
    pub return_stats: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MergeSortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the execution strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        if self.strategy.is_some() && self.duplicate_param.is_none() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Set the recursion-depth ceiling (top-down only, must be at least 1).
    pub fn depth_limit(mut self, limit: usize) -> Self {
        if self.depth_limit.is_some() && self.duplicate_param.is_none() {
            self.duplicate_param = Some("depth_limit");
        }
        self.depth_limit = Some(limit);
        self
    }

    /// Request comparison and level diagnostics in the report.
    pub fn return_stats(mut self) -> Self {
        if self.return_stats.is_some() && self.duplicate_param.is_none() {
            self.duplicate_param = Some("return_stats");
        }
        self.return_stats = Some(true);
        self
    }

    /// Validate the configuration and produce a [`Sorter`].
    pub fn build(self) -> Result<Sorter, AlgoError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let depth_limit = self.depth_limit.unwrap_or(DEFAULT_DEPTH_LIMIT);
        Validator::validate_depth_limit(depth_limit)?;

        Ok(Sorter {
            strategy: self.strategy.unwrap_or_default(),
            depth_limit,
            return_stats: self.return_stats.unwrap_or(false),
        })
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// A configured merge sorter.
///
/// The input slice is never mutated; each call returns a freshly allocated
/// [`SortReport`] whose `values` hold the same multiset of elements in
/// non-decreasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sorter {
    /// Execution strategy.
    pub strategy: Strategy,

    /// Recursion-depth ceiling (top-down only).
    pub depth_limit: usize,

    /// Whether diagnostics are reported.
    pub return_stats: bool,
}

impl Sorter {
    /// Sort a slice of totally ordered elements.
    pub fn sort<T>(&self, items: &[T]) -> Result<SortReport<T>, AlgoError>
    where
        T: Ord + Clone,
    {
        self.run(items, &mut |a: &T, b: &T| a.cmp(b))
    }

    /// Sort with a caller-supplied total comparator.
    ///
    /// Tie-break: when the comparator returns `Equal`, the element from the
    /// right half is emitted first, so equal elements come out in *reverse*
    /// of their input order:
    ///
    /// ```rust
    /// use algonotes::prelude::*;
    ///
    /// let records = [(1, "a"), (1, "b")];
    /// let report = MergeSort::new()
    ///     .build()?
    ///     .sort_by(&records, |l, r| l.0.cmp(&r.0))?;
    /// assert_eq!(report.values, vec![(1, "b"), (1, "a")]);
    /// # Result::<(), AlgoError>::Ok(())
    /// ```
    pub fn sort_by<T, F>(&self, items: &[T], mut cmp: F) -> Result<SortReport<T>, AlgoError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.run(items, &mut cmp)
    }

    /// Sort a slice of partially ordered elements (e.g. floats).
    ///
    /// Fails with [`AlgoError::Incomparable`] if any element carries no
    /// ordering (NaN); no partial result is returned.
    pub fn sort_partial<T>(&self, items: &[T]) -> Result<SortReport<T>, AlgoError>
    where
        T: PartialOrd + Clone,
    {
        Validator::validate_comparable(items)?;
        self.run(items, &mut |a: &T, b: &T| {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        })
    }

    fn run<T, F>(&self, items: &[T], cmp: &mut F) -> Result<SortReport<T>, AlgoError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let (values, stats) = match self.strategy {
            Strategy::TopDown => top_down::sort_by(items, self.depth_limit, cmp)?,
            Strategy::BottomUp => bottom_up::sort_by(items, cmp),
        };

        Ok(SortReport {
            values,
            strategy: self.strategy,
            comparisons: self.return_stats.then_some(stats.comparisons),
            levels: self.return_stats.then_some(stats.levels),
        })
    }
}

// ============================================================================
// One-Shot Sorting
// ============================================================================

/// Sort a slice of totally ordered elements with default settings.
///
/// Uses the bottom-up driver, so it is infallible: no recursion limit, and
/// `Ord` comparisons cannot fail.
pub fn sort<T>(items: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let (values, _) = bottom_up::sort_by(items, &mut |a: &T, b: &T| a.cmp(b));
    values
}

/// Sort a slice of partially ordered elements with default settings.
///
/// Rejects inputs containing unordered elements (NaN) with
/// [`AlgoError::Incomparable`].
pub fn sort_partial<T>(items: &[T]) -> Result<Vec<T>, AlgoError>
where
    T: PartialOrd + Clone,
{
    Validator::validate_comparable(items)?;
    let (values, _) = bottom_up::sort_by(items, &mut |a: &T, b: &T| {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    });
    Ok(values)
}

// ============================================================================
// Analysis Free Functions
// ============================================================================

/// Inner product of two key-sorted weight vectors.
///
/// Both inputs must have strictly ascending keys (each key at most once);
/// otherwise [`AlgoError::UnsortedKeys`] is returned.
///
/// ```rust
/// use algonotes::prelude::*;
///
/// let a = [("and", 3.0), ("of", 2.0), ("the", 5.0)];
/// let b = [("and", 4.0), ("in", 1.0), ("of", 1.0), ("this", 2.0)];
/// assert_eq!(sorted_inner_product(&a, &b)?, 14.0);
/// # Result::<(), AlgoError>::Ok(())
/// ```
pub fn sorted_inner_product<K, W>(a: &[(K, W)], b: &[(K, W)]) -> Result<W, AlgoError>
where
    K: Ord,
    W: NumAssign + Copy,
{
    Validator::validate_ascending_keys(a)?;
    Validator::validate_ascending_keys(b)?;
    Ok(inner_product::inner_product(a, b))
}

/// Compute the n-th Fibonacci number with memoized recursion.
///
/// The memo table is local to the call; nothing is cached across calls.
/// Arguments above [`MAX_FIBONACCI_ARGUMENT`] would overflow `u128` and
/// fail with [`AlgoError::ArgumentTooLarge`].
#[cfg(feature = "std")]
pub fn fibonacci(n: u64) -> Result<u128, AlgoError> {
    Validator::validate_fibonacci_argument(n)?;
    Ok(crate::analysis::memo::fibonacci(n))
}
