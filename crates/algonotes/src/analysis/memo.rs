//! Argument-keyed memoization.
//!
//! ## Purpose
//!
//! This module provides an explicit cache in front of a pure unary
//! function: results are computed on first use and replayed from a hash map
//! afterwards. It also carries the canonical demonstration, a memoized
//! recursive Fibonacci whose cache lives in the call rather than in
//! process-global state.
//!
//! ## Design notes
//!
//! * **Explicit state**: The cache is an ordinary struct field, not a
//!   global; two `Memo` values never share entries.
//! * **No eviction**: Entries are kept forever, matching the textbook
//!   wrapper. The cache grows with the number of distinct arguments, so
//!   only use this when the argument domain is known to be small; `len()`
//!   lets callers watch the growth.
//! * **Guard check**: Lookup before compute, exactly the
//!   `if x not in memo` pattern.
//!
//! ## Non-goals
//!
//! * This module does not bound or evict cache entries.
//! * This module does not deduplicate concurrent computation; `Memo` is a
//!   single-threaded value.

// External dependencies
use core::hash::Hash;
use std::collections::HashMap;

// ============================================================================
// Memo
// ============================================================================

/// A pure unary function fronted by an argument-keyed cache.
///
/// ```rust
/// # use algonotes::prelude::*;
/// let mut squares = Memo::new(|x: &u32| x * x);
/// assert_eq!(squares.value(9), 81);
/// assert_eq!(squares.value(9), 81); // replayed, not recomputed
/// assert_eq!(squares.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Memo<A, R, F> {
    cache: HashMap<A, R>,
    func: F,
}

impl<A, R, F> Memo<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(&A) -> R,
{
    /// Wrap a pure function with an empty cache.
    pub fn new(func: F) -> Self {
        Self {
            cache: HashMap::new(),
            func,
        }
    }

    /// Return the cached result for `arg`, computing it on first use.
    pub fn value(&mut self, arg: A) -> R {
        if let Some(cached) = self.cache.get(&arg) {
            return cached.clone();
        }
        let computed = (self.func)(&arg);
        self.cache.insert(arg, computed.clone());
        computed
    }

    /// Whether a result for `arg` is already cached.
    pub fn contains(&self, arg: &A) -> bool {
        self.cache.contains_key(arg)
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

// ============================================================================
// Memoized Fibonacci
// ============================================================================

/// Largest argument whose Fibonacci number fits in `u128`.
///
/// F(186) ≈ 3.33 × 10³⁸ still fits; F(187) does not.
pub const MAX_FIBONACCI_ARGUMENT: u64 = 186;

/// Compute F(n) with a function-local memo table.
///
/// Callers must ensure `n <= MAX_FIBONACCI_ARGUMENT`; the public API
/// validates this before delegating here. Without the memo table the
/// recursion is exponential; with it each value is computed once, O(n)
/// additions.
pub fn fibonacci(n: u64) -> u128 {
    let mut cache: HashMap<u64, u128> = HashMap::new();
    fib_memo(n, &mut cache)
}

fn fib_memo(n: u64, cache: &mut HashMap<u64, u128>) -> u128 {
    if n <= 1 {
        return u128::from(n);
    }
    if let Some(&cached) = cache.get(&n) {
        return cached;
    }
    let value = fib_memo(n - 1, cache) + fib_memo(n - 2, cache);
    cache.insert(n, value);
    value
}
