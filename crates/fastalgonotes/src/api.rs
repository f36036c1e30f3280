//! High-level API for parallel sorting.
//!
//! ## Purpose
//!
//! This module mirrors the core crate's fluent builder for the parallel
//! sorter: configure a sequential cutoff, build, and sort any
//! [`SortInput`](crate::input::SortInput) container.
//!
//! ## Design notes
//!
//! * **Same semantics**: Output is element-for-element identical to the
//!   sequential `algonotes` sorter, including the right-precedence
//!   tie-break; only the execution changes.
//! * **Validated**: The cutoff is checked at `build()`; data comparability
//!   is checked before any parallel work is spawned.
//! * **Feature fallback**: Without the `cpu` feature the same API runs the
//!   core crate's iterative driver.

// External dependencies
use core::cmp::Ordering;

// Export dependencies from the core crate
use algonotes::internals::engine::validator::Validator;
use algonotes::prelude::AlgoError;

#[cfg(not(feature = "cpu"))]
use algonotes::internals::sorting::bottom_up;

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::engine::parallel::par_sort_by;
use crate::input::SortInput;

/// Default span length below which sub-sorts run sequentially.
///
/// Spawn overhead swamps the work for short spans; 1024 elements is a
/// conservative floor for the crossover.
pub const DEFAULT_SEQUENTIAL_CUTOFF: usize = 1024;

// ============================================================================
// Parallel Merge Sort Builder
// ============================================================================

/// Fluent builder for configuring a [`ParSorter`].
#[derive(Debug, Clone, Default)]
pub struct ParMergeSortBuilder {
    /// Span length below which sorting is sequential.
    pub sequential_cutoff: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ParMergeSortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sequential cutoff (must be at least 1).
    pub fn sequential_cutoff(mut self, cutoff: usize) -> Self {
        if self.sequential_cutoff.is_some() && self.duplicate_param.is_none() {
            self.duplicate_param = Some("sequential_cutoff");
        }
        self.sequential_cutoff = Some(cutoff);
        self
    }

    /// Validate the configuration and produce a [`ParSorter`].
    pub fn build(self) -> Result<ParSorter, AlgoError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let sequential_cutoff = self.sequential_cutoff.unwrap_or(DEFAULT_SEQUENTIAL_CUTOFF);
        Validator::validate_cutoff(sequential_cutoff)?;

        Ok(ParSorter { sequential_cutoff })
    }
}

// ============================================================================
// Parallel Sorter
// ============================================================================

/// A configured parallel merge sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParSorter {
    /// Span length below which sorting is sequential.
    pub sequential_cutoff: usize,
}

impl ParSorter {
    /// Sort any supported container of totally ordered elements.
    pub fn sort<T, I>(&self, input: &I) -> Result<Vec<T>, AlgoError>
    where
        T: Ord + Clone + Send + Sync,
        I: SortInput<T> + ?Sized,
    {
        let items = input.as_sort_slice()?;
        Ok(self.run(items, &|a: &T, b: &T| a.cmp(b)))
    }

    /// Sort with a caller-supplied total comparator.
    ///
    /// Equal elements come out in reverse input order, exactly as with the
    /// sequential sorter.
    pub fn sort_by<T, I, F>(&self, input: &I, cmp: F) -> Result<Vec<T>, AlgoError>
    where
        T: Clone + Send + Sync,
        I: SortInput<T> + ?Sized,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        let items = input.as_sort_slice()?;
        Ok(self.run(items, &cmp))
    }

    /// Sort partially ordered elements (e.g. floats), rejecting NaN.
    pub fn sort_partial<T, I>(&self, input: &I) -> Result<Vec<T>, AlgoError>
    where
        T: PartialOrd + Clone + Send + Sync,
        I: SortInput<T> + ?Sized,
    {
        let items = input.as_sort_slice()?;
        Validator::validate_comparable(items)?;
        Ok(self.run(items, &|a: &T, b: &T| {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }))
    }

    #[cfg(feature = "cpu")]
    fn run<T, F>(&self, items: &[T], cmp: &F) -> Vec<T>
    where
        T: Clone + Send + Sync,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        par_sort_by(items, self.sequential_cutoff, cmp)
    }

    #[cfg(not(feature = "cpu"))]
    fn run<T, F>(&self, items: &[T], cmp: &F) -> Vec<T>
    where
        T: Clone + Send + Sync,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        let (values, _) = bottom_up::sort_by(items, &mut |a: &T, b: &T| cmp(a, b));
        values
    }
}
