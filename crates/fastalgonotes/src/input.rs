//! Input abstractions for sorting.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over sortable inputs,
//! allowing the sorter to accept multiple container formats (slices,
//! vectors, ndarray arrays) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Inputs expose a borrowed slice view; the sorter never
//!   copies the container, only the elements into its output.
//! * **Fail-fast**: Non-contiguous ndarray views are rejected before any
//!   sorting work happens.
//!
//! ## Invariants
//!
//! * A returned slice represents every element of the input container, in
//!   container order.
//!
//! ## Non-goals
//!
//! * This module does not reshape or clean data.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};

// Export dependencies from the core crate
use algonotes::prelude::AlgoError;

/// Trait for containers that can be sorted.
pub trait SortInput<T> {
    /// View the input as a contiguous slice.
    fn as_sort_slice(&self) -> Result<&[T], AlgoError>;
}

impl<T> SortInput<T> for [T] {
    fn as_sort_slice(&self) -> Result<&[T], AlgoError> {
        Ok(self)
    }
}

impl<T> SortInput<T> for Vec<T> {
    fn as_sort_slice(&self) -> Result<&[T], AlgoError> {
        Ok(self.as_slice())
    }
}

impl<T, S> SortInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_sort_slice(&self) -> Result<&[T], AlgoError> {
        self.as_slice().ok_or_else(|| {
            AlgoError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
