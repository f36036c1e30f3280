//! Layer 3: Analysis
//!
//! # Purpose
//!
//! This layer collects the independent study utilities that sit alongside
//! the sorter: a sorted-order inner product, hash-map frequency counting,
//! and argument-keyed memoization. Each is a stateless function (or a small
//! explicit-state struct) with no coupling to the others.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Analysis ← You are here
//!   ↓
//! Layer 2: Sorting
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sorted-order inner product of key-weighted vectors.
pub mod inner_product;

/// Frequency counting with a hash map.
#[cfg(feature = "std")]
pub mod frequency;

/// Argument-keyed memoization and the memoized Fibonacci.
#[cfg(feature = "std")]
pub mod memo;
