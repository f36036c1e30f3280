//! # fastalgonotes — Accelerated Companion to `algonotes`
//!
//! Everything in [`algonotes`], plus a parallel merge sorter and input
//! support for `ndarray` containers. The two recursive sub-sorts of merge
//! sort operate on disjoint halves and produce independent outputs, so they
//! can be evaluated on separate cores; the merge that consumes them is
//! unchanged, and the result is identical to the sequential sorter for
//! every input.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastalgonotes::prelude::*;
//! use ndarray::Array1;
//!
//! let data = Array1::from_vec(vec![3, 1, 2, 5, 4]);
//!
//! let sorter = ParMergeSort::new()
//!     .sequential_cutoff(2) // below this length, sort sequentially
//!     .build()?;
//!
//! let sorted = sorter.sort(&data)?;
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! # Result::<(), AlgoError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default) — multi-threaded sorting via `rayon`. Without it the
//!   API stays identical and falls back to the sequential driver.
//!
//! ## When to use this crate
//!
//! Parallelism is an optimization, never a semantic change: tie-breaking,
//! element order, and error behavior match `algonotes` exactly. Reach for
//! this crate for large inputs; stay on `algonotes` for `no_std` targets or
//! when the dependency footprint matters.

// Input abstractions (slices, Vec, ndarray).
mod input;

// Parallel execution engine.
mod engine;

// High-level fluent API.
mod api;

// Standard fastalgonotes prelude.
pub mod prelude {
    pub use algonotes::prelude::*;

    pub use crate::api::{
        ParMergeSortBuilder as ParMergeSort, ParSorter, DEFAULT_SEQUENTIAL_CUTOFF,
    };
    pub use crate::input::SortInput;
}
