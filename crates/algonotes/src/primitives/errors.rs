//! Error types for algonotes operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur across the
//! library: comparison failures, resource ceilings, and builder
//! misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   index or the configured limit).
//! * **No-std**: Supports `no_std` environments by using `alloc` for
//!   dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Comparison failures**: Elements that carry no ordering (NaN and
//!    friends) are rejected before any partial result is produced.
//! 2. **Resource ceilings**: Recursion depth and argument magnitude limits
//!    fail loudly instead of overflowing the stack or the result type.
//! 3. **Builder validation**: Invalid or duplicated parameters surface when
//!    `build()` is called.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for algonotes operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// An element carries no ordering with respect to itself (e.g. NaN).
    Incomparable {
        /// Index of the offending element in the input slice.
        index: usize,
    },

    /// The configured recursion-depth ceiling was exceeded.
    RecursionLimit {
        /// Depth the sort attempted to reach.
        depth: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// A key-sorted input has keys out of ascending order.
    UnsortedKeys {
        /// Index of the first key that breaks ascending order.
        index: usize,
    },

    /// The argument is too large for the result type to represent.
    ArgumentTooLarge {
        /// Argument provided.
        got: u64,
        /// Largest supported argument.
        max: u64,
    },

    /// Recursion-depth limit must be at least 1.
    InvalidDepthLimit(usize),

    /// Sequential cutoff must be at least 1.
    InvalidCutoff(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AlgoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::Incomparable { index } => {
                write!(
                    f,
                    "Element at index {index} has no ordering (NaN or similar)"
                )
            }
            Self::RecursionLimit { depth, limit } => {
                write!(
                    f,
                    "Recursion depth {depth} exceeds the configured limit {limit}"
                )
            }
            Self::UnsortedKeys { index } => {
                write!(f, "Keys must be in strictly ascending order (index {index})")
            }
            Self::ArgumentTooLarge { got, max } => {
                write!(f, "Argument too large: {got} (maximum supported is {max})")
            }
            Self::InvalidDepthLimit(limit) => {
                write!(f, "Invalid depth limit: {limit} (must be at least 1)")
            }
            Self::InvalidCutoff(cutoff) => {
                write!(f, "Invalid sequential cutoff: {cutoff} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for AlgoError {}
