//! Error types for base conversion.
//!
//! Every failed `convert` call returns exactly one of these variants and
//! leaves no partial result behind. Callers match on the variant to decide
//! whether to abort, report and continue, or re-prompt.

use thiserror::Error;

/// Errors that can occur when building a converter or converting a numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The digit alphabet has fewer than two characters.
    #[error("Digit set must contain at least 2 characters")]
    InvalidAlphabet {
        /// Number of characters in the rejected alphabet
        length: usize,
    },

    /// A source or target base is outside `[2, max]`.
    #[error("Base must be between 2 and {max}")]
    InvalidBase {
        /// The rejected base, as requested
        base: i64,
        /// Largest base the alphabet supports (its length)
        max: usize,
    },

    /// A character of the magnitude is not a digit of the source base.
    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit {
        /// First offending character
        digit: char,
        /// Source base the numeral was parsed in
        base: u32,
    },

    /// Nothing left to parse after stripping the sign.
    #[error("Numeral must contain at least one digit")]
    EmptyNumeral,
}
