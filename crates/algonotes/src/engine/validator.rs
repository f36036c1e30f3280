//! Input validation for algonotes configuration and data.
//!
//! ## Purpose
//!
//! This module provides the fail-fast validation functions backing the
//! public API: builder parameter bounds, comparability of sort inputs, and
//! key ordering for the sorted-order inner product.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation, before any
//!   partial result is produced.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Indexed errors**: Data checks report the offending index so callers
//!   can point at the bad element.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * A slice that passes `validate_comparable` contains no element that is
//!   unordered with respect to itself (no NaN for float types).
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or repair input data.
//! * This module does not detect incomparability between *distinct*
//!   elements of exotic partial orders; it checks the self-comparison that
//!   IEEE NaN fails.

// Internal dependencies
#[cfg(feature = "std")]
use crate::analysis::memo::MAX_FIBONACCI_ARGUMENT;
use crate::primitives::errors::AlgoError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for algonotes configuration and input data.
///
/// Provides static methods returning `Result<(), AlgoError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate that every element carries an ordering.
    ///
    /// For IEEE floats this rejects NaN: it is the only value that is not
    /// equal to itself under `partial_cmp`.
    pub fn validate_comparable<T: PartialOrd>(items: &[T]) -> Result<(), AlgoError> {
        for (index, item) in items.iter().enumerate() {
            if item.partial_cmp(item).is_none() {
                return Err(AlgoError::Incomparable { index });
            }
        }
        Ok(())
    }

    /// Validate that pair keys are strictly ascending.
    ///
    /// The sorted-order inner product requires each key to appear at most
    /// once per vector, in ascending order.
    pub fn validate_ascending_keys<K: Ord, W>(pairs: &[(K, W)]) -> Result<(), AlgoError> {
        for (index, window) in pairs.windows(2).enumerate() {
            if window[0].0 >= window[1].0 {
                return Err(AlgoError::UnsortedKeys { index: index + 1 });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the recursion-depth limit for the top-down sorter.
    pub fn validate_depth_limit(limit: usize) -> Result<(), AlgoError> {
        if limit == 0 {
            return Err(AlgoError::InvalidDepthLimit(limit));
        }
        Ok(())
    }

    /// Validate the sequential cutoff used by parallel extension crates.
    pub fn validate_cutoff(cutoff: usize) -> Result<(), AlgoError> {
        if cutoff == 0 {
            return Err(AlgoError::InvalidCutoff(cutoff));
        }
        Ok(())
    }

    /// Validate a Fibonacci argument against the `u128` result range.
    #[cfg(feature = "std")]
    pub fn validate_fibonacci_argument(n: u64) -> Result<(), AlgoError> {
        if n > MAX_FIBONACCI_ARGUMENT {
            return Err(AlgoError::ArgumentTooLarge {
                got: n,
                max: MAX_FIBONACCI_ARGUMENT,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), AlgoError> {
        if let Some(parameter) = duplicate_param {
            return Err(AlgoError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
