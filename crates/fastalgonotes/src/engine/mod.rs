//! Parallel execution engine.
//!
//! The core crate owns the algorithm; this layer only decides *where* the
//! two independent sub-sorts run.

/// Work-splitting parallel merge sort.
#[cfg(feature = "cpu")]
pub mod parallel;
