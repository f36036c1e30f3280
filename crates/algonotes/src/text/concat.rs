//! Single-allocation string concatenation.
//!
//! ## Purpose
//!
//! This module builds strings the cheap way. Appending to a `String` in a
//! loop without reserving capacity reallocates repeatedly, and naive
//! `a + b + c` chains allocate a fresh string per `+`. Collecting the parts
//! first and writing them into one pre-sized buffer costs a single
//! allocation.
//!
//! ## Key concepts
//!
//! * **Size first, write second**: Both helpers measure total length before
//!   touching the output buffer.
//! * **Map then join**: [`join_mapped`] is the "build the list, then join
//!   it" pattern for when each piece is derived from an element.
//!
//! ## Non-goals
//!
//! * This module does not format values (`format!` already does that with
//!   one allocation).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Concatenation
// ============================================================================

/// Concatenate string parts into one pre-sized buffer.
pub fn concat_all<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let parts: Vec<&str> = parts.into_iter().collect();
    let total: usize = parts.iter().map(|p| p.len()).sum();

    let mut out = String::with_capacity(total);
    for part in parts {
        out.push_str(part);
    }
    out
}

/// Map each element to a string, then concatenate the results with a
/// separator in one pass.
pub fn join_mapped<I, T, F>(items: I, sep: &str, mut f: F) -> String
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> String,
{
    let pieces: Vec<String> = items.into_iter().map(|item| f(item)).collect();
    pieces.join(sep)
}
