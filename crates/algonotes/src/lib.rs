//! # algonotes — Annotated Textbook Algorithms for Rust
//!
//! A small study library collecting classic algorithm snippets as reusable,
//! stateless functions. The centerpiece is a non-mutating divide-and-conquer
//! merge sort; around it sit a handful of independent utilities that show up
//! in every introductory algorithms course:
//!
//! - **Merge sort** — recursive (top-down) and iterative (bottom-up)
//!   variants with identical output semantics, a configurable recursion
//!   guard, and optional comparison/level diagnostics.
//! - **Sorted-order inner product** — a two-pointer walk over two key-sorted
//!   weight vectors, the core of document-distance computations.
//! - **Frequency counting** — item occurrence counts via a hash map.
//! - **Memoization** — an explicit argument-keyed cache in front of a pure
//!   function, plus the classic memoized Fibonacci.
//! - **String utilities** — a tokenizer driven by an explicit translation
//!   table, and allocation-conscious concatenation helpers.
//!
//! ## Quick Start
//!
//! ```rust
//! use algonotes::prelude::*;
//!
//! // One-shot sorting of any totally ordered type.
//! let sorted = sort(&[3, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//!
//! // Configured sorting with diagnostics.
//! let sorter = MergeSort::new()
//!     .strategy(TopDown)
//!     .return_stats()
//!     .build()?;
//! let report = sorter.sort(&[5, 4, 3, 2, 1])?;
//! assert_eq!(report.values, vec![1, 2, 3, 4, 5]);
//! assert!(report.comparisons.unwrap() <= 12);
//! # Result::<(), AlgoError>::Ok(())
//! ```
//!
//! ## Tie-breaking
//!
//! The merge step takes the **right**-hand element when two elements compare
//! equal, exactly as the textbook loop `if L[i] < R[j]` does. The observable
//! consequence is that elements with equal keys come out in *reverse* of
//! their input order; see [`prelude::Sorter::sort_by`] for details and a
//! worked example.
//!
//! ## `no_std` support
//!
//! The crate is `no_std`-compatible with `alloc` when the default `std`
//! feature is disabled. The hash-map-backed modules (frequency counting and
//! memoization) require `std` and disappear from the API without it.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Sorting - the merge sort component.
mod sorting;

// Layer 3: Analysis - independent study utilities.
mod analysis;

// Layer 3: Text - string micro-optimization helpers.
mod text;

// Layer 4: Engine - validation and result reporting.
mod engine;

// High-level fluent API.
mod api;

// Standard algonotes prelude.
pub mod prelude {
    pub use crate::api::{
        AlgoError, MergeSortBuilder as MergeSort, SortReport, Sorter, Strategy,
        Strategy::{BottomUp, TopDown},
        concat_all, join_mapped, sort, sort_partial, sorted_inner_product, tokenize,
        TranslationTable, ASCII_PUNCTUATION,
    };

    #[cfg(feature = "std")]
    pub use crate::api::{
        count_frequencies, fibonacci, frequency_vector, Memo, MAX_FIBONACCI_ARGUMENT,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for white-box tests and for
// extension crates (such as `fastalgonotes`). It is only available with
// the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod sorting {
        pub use crate::sorting::*;
    }
    pub mod analysis {
        pub use crate::analysis::*;
    }
    pub mod text {
        pub use crate::text::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
