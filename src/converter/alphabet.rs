//! Digit alphabets - the ordered symbol set that defines digit values

use std::fmt;

use super::error::ConversionError;

/// Default digits: `0-9`, then `a-z`, then `A-Z` (62 symbols).
pub const DEFAULT_DIGITS: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An ordered, immutable digit alphabet where index = digit value.
///
/// Characters are not checked for uniqueness. With duplicates, reverse
/// lookups return the first matching index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitAlphabet {
    symbols: Vec<char>,
}

impl DigitAlphabet {
    /// Build an alphabet from the characters of `digits`.
    ///
    /// Fails with [`ConversionError::InvalidAlphabet`] when fewer than two
    /// characters are supplied.
    pub fn new(digits: &str) -> Result<Self, ConversionError> {
        let symbols: Vec<char> = digits.chars().collect();
        if symbols.len() < 2 {
            return Err(ConversionError::InvalidAlphabet {
                length: symbols.len(),
            });
        }
        Ok(Self { symbols })
    }

    /// Number of digits, which is also the largest supported base.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction guarantees at least two digits.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Character for a digit value.
    pub fn digit(&self, value: usize) -> Option<char> {
        self.symbols.get(value).copied()
    }

    /// The digit-zero character.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Character for a digit value already known to be below `len()`.
    pub(crate) fn symbol(&self, value: usize) -> char {
        self.symbols[value]
    }

    /// Digit value of `c` (first match).
    pub fn value_of(&self, c: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == c)
    }

    /// Whether `c` is among the first `base` characters.
    pub fn is_digit_for(&self, c: char, base: u32) -> bool {
        self.symbols.iter().take(base as usize).any(|&s| s == c)
    }
}

impl fmt::Display for DigitAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl Default for DigitAlphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_DIGITS.chars().collect(),
        }
    }
}
