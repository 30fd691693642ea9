//! Converter module - arbitrary-precision conversion between positional bases
//!
//! A conversion runs in two phases around an unbounded [`BigUint`] pivot:
//! numeral -> decimal value (positional expansion), then decimal value ->
//! numeral (repeated division). Each phase produces its own trace segment
//! when steps are requested; [`Converter::convert`] joins them.

mod alphabet;
mod error;

pub use alphabet::{DigitAlphabet, DEFAULT_DIGITS};
pub use error::ConversionError;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::Serialize;

/// Per-call conversion settings.
///
/// Bases are taken as any integer, as typed by the user; the converter
/// range-checks them against its alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    pub from_base: i64,
    pub to_base: i64,
    /// Record a human-readable derivation trace
    pub show_steps: bool,
    /// Upper-case the output digits after conversion (cosmetic only)
    pub uppercase: bool,
}

impl ConversionOptions {
    pub fn new(from_base: i64, to_base: i64) -> Self {
        Self {
            from_base,
            to_base,
            show_steps: false,
            uppercase: false,
        }
    }

    pub fn with_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// The numeral exactly as supplied, sign included
    pub input: String,
    pub output: String,
    pub from_base: i64,
    pub to_base: i64,
    /// `None` when steps were not requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

/// Converts numerals between bases using a fixed digit alphabet.
///
/// Holds no per-call state, so one instance can be shared freely across
/// threads.
///
/// # Example
/// ```
/// use base_convert::converter::{ConversionOptions, Converter};
///
/// let converter = Converter::new();
/// let result = converter
///     .convert("255", &ConversionOptions::new(10, 16).with_uppercase(true))
///     .unwrap();
/// assert_eq!(result.output, "FF");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    alphabet: DigitAlphabet,
}

impl Converter {
    /// Converter over the default 62-digit alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converter over a custom digit set.
    pub fn with_digits(digits: &str) -> Result<Self, ConversionError> {
        Ok(Self::from_alphabet(DigitAlphabet::new(digits)?))
    }

    /// Converter over an optional custom digit set, falling back to the default.
    pub fn from_optional_digits(digits: Option<&str>) -> Result<Self, ConversionError> {
        match digits {
            Some(d) => Self::with_digits(d),
            None => Ok(Self::new()),
        }
    }

    pub fn from_alphabet(alphabet: DigitAlphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &DigitAlphabet {
        &self.alphabet
    }

    /// Largest base this converter accepts.
    pub fn max_base(&self) -> usize {
        self.alphabet.len()
    }

    /// Convert `input` from `options.from_base` to `options.to_base`.
    ///
    /// Validation order is fixed: source base, target base, empty magnitude,
    /// then digits left to right.
    ///
    /// A leading `-` is carried through literally, so `"-0"` converts to
    /// `"-0"`. The `uppercase` flag is applied to the finished digits with
    /// [`str::to_uppercase`]; with the default alphabet above base 36 this
    /// can yield a string whose digits would re-parse to different values
    /// (`a` and `A` are distinct digits).
    pub fn convert(
        &self,
        input: &str,
        options: &ConversionOptions,
    ) -> Result<ConversionResult, ConversionError> {
        let from_base = self.validate_base(options.from_base)?;
        let to_base = self.validate_base(options.to_base)?;

        let (negative, magnitude) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        self.validate_magnitude(magnitude, from_base)?;

        let trace = options.show_steps;
        let (value, mut steps) = self.to_decimal(magnitude, from_base, trace);
        let (digits, division_steps) = self.from_decimal(value, to_base, trace);
        steps.extend(division_steps);
        if trace {
            steps.push(format!("Result: {}", digits));
        }

        let rendered = if options.uppercase {
            digits.to_uppercase()
        } else {
            digits
        };
        let output = if negative {
            format!("-{}", rendered)
        } else {
            rendered
        };

        Ok(ConversionResult {
            input: input.to_string(),
            output,
            from_base: options.from_base,
            to_base: options.to_base,
            steps: trace.then_some(steps),
        })
    }

    /// Range-check a requested base, narrowing it for the arithmetic phases.
    fn validate_base(&self, base: i64) -> Result<u32, ConversionError> {
        let max = self.alphabet.len();
        match u32::try_from(base) {
            Ok(valid) if valid >= 2 && valid as usize <= max => Ok(valid),
            _ => Err(ConversionError::InvalidBase { base, max }),
        }
    }

    fn validate_magnitude(&self, magnitude: &str, base: u32) -> Result<(), ConversionError> {
        if magnitude.is_empty() {
            return Err(ConversionError::EmptyNumeral);
        }
        match magnitude.chars().find(|&c| !self.alphabet.is_digit_for(c, base)) {
            Some(digit) => Err(ConversionError::InvalidDigit { digit, base }),
            None => Ok(()),
        }
    }

    /// Phase 1: positional expansion. Expects a validated magnitude.
    fn to_decimal(&self, magnitude: &str, base: u32, trace: bool) -> (BigUint, Vec<String>) {
        let radix = BigUint::from(base);
        let mut place = BigUint::from(1u32);
        let mut value = BigUint::zero();
        let mut steps = Vec::new();

        // Right to left so each place value is one multiplication away from the last.
        for (power, c) in magnitude.chars().rev().enumerate() {
            let digit = self.alphabet.value_of(c).unwrap_or(0);
            let contribution = &place * BigUint::from(digit);
            if trace {
                steps.push(format!("{} * {}^{} = {}", c, base, power, contribution));
            }
            value += contribution;
            place *= &radix;
        }

        if trace {
            steps.reverse();
            steps.push(format!("Decimal value: {}", value));
        }
        (value, steps)
    }

    /// Phase 2: repeated division by the target base.
    fn from_decimal(&self, value: BigUint, base: u32, trace: bool) -> (String, Vec<String>) {
        let mut steps = Vec::new();
        if value.is_zero() {
            return (self.alphabet.zero().to_string(), steps);
        }

        let radix = BigUint::from(base);
        let mut reversed = Vec::new();
        let mut remaining = value;

        while !remaining.is_zero() {
            let quotient = &remaining / &radix;
            // Below the base, so it always fits.
            let digit = (&remaining % &radix).to_usize().unwrap_or(0);
            let symbol = self.alphabet.symbol(digit);
            if trace {
                steps.push(format!(
                    "{} / {} = {} remainder {} ({})",
                    remaining, base, quotient, digit, symbol
                ));
            }
            reversed.push(symbol);
            remaining = quotient;
        }

        (reversed.into_iter().rev().collect(), steps)
    }
}
