//! Character translation and tokenization.
//!
//! ## Purpose
//!
//! This module splits a line of text into normalized word tokens: characters
//! from a configured class are replaced with spaces, case is optionally
//! folded, and the result is split on whitespace.
//!
//! ## Design notes
//!
//! * **Explicit configuration**: The character-class mapping is a value
//!   ([`TranslationTable`]) passed by the caller, not a module-level global
//!   or a locale-dependent table. Two callers with different tables never
//!   interfere.
//! * **Pure**: `&str` in, fresh `String`/`Vec<String>` out; no state
//!   survives the call.
//! * **ASCII folding**: [`TranslationTable::ascii_words`] folds ASCII
//!   uppercase only, mirroring the classic punctuation-and-case table.
//!   Non-ASCII characters pass through untouched.
//!
//! ## Non-goals
//!
//! * This module does not implement Unicode-aware case folding or
//!   normalization.
//! * This module does not count or rank the produced tokens (see
//!   `analysis::frequency`).

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
// Translation Table
// ============================================================================

/// The ASCII punctuation characters, as blanked by [`TranslationTable::ascii_words`].
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// An explicit character-class mapping applied before splitting.
///
/// Characters in `blanked` become spaces; everything else is optionally
/// ASCII-case-folded and kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    blanked: String,
    fold_case: bool,
}

impl TranslationTable {
    /// Build a table from the set of characters to blank and a case-folding
    /// flag.
    pub fn new(blanked: &str, fold_case: bool) -> Self {
        Self {
            blanked: String::from(blanked),
            fold_case,
        }
    }

    /// The classic word-extraction table: ASCII punctuation becomes spaces,
    /// ASCII uppercase becomes lowercase.
    pub fn ascii_words() -> Self {
        Self::new(ASCII_PUNCTUATION, true)
    }

    /// Apply the mapping to one line, character by character.
    pub fn translate(&self, line: &str) -> String {
        line.chars()
            .map(|c| {
                if self.blanked.contains(c) {
                    ' '
                } else if self.fold_case {
                    c.to_ascii_lowercase()
                } else {
                    c
                }
            })
            .collect()
    }

    /// Translate a line and split it into word tokens.
    ///
    /// Empty tokens never appear: consecutive blanked characters collapse
    /// into a single split point.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        self.translate(line)
            .split_whitespace()
            .map(String::from)
            .collect()
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::ascii_words()
    }
}

// ============================================================================
// Convenience
// ============================================================================

/// Tokenize a line with the default [`TranslationTable::ascii_words`] table.
pub fn tokenize(line: &str) -> Vec<String> {
    TranslationTable::ascii_words().tokenize(line)
}
