//! Layer 3: Text
//!
//! # Purpose
//!
//! This layer holds the string micro-optimization helpers: tokenization
//! driven by an explicit translation table, and allocation-conscious
//! concatenation.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Text ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Character translation and tokenization.
pub mod translate;

/// Single-allocation string concatenation.
pub mod concat;
