//! Strict parsing of the canonical textual form `^[+-]?\d+(\.\d+)?$`.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use quanta_shared::AppError;
use thiserror::Error;

use super::Decimal;

/// Malformed decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was the empty string.
    #[error("Decimal text is empty")]
    Empty,

    /// A character outside the grammar (whitespace, a second sign, a letter, a non-ASCII digit).
    #[error("Unexpected character {found:?} at position {position}")]
    UnexpectedCharacter {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// No digit before the decimal point (`"."`, `".5"`, `"-"`).
    #[error("Decimal text must start with at least one digit")]
    MissingIntegerDigits,

    /// Decimal point not followed by a digit (`"1."`).
    #[error("Decimal point must be followed by at least one digit")]
    MissingFractionDigits,

    /// More than one decimal point (`"1.2.3"`).
    #[error("Decimal text contains more than one decimal point")]
    MultipleDecimalPoints,

    /// More fraction digits than a scale can hold.
    #[error("Decimal text has too many fraction digits")]
    ScaleOverflow,
}

impl ParseError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        "INVALID_DECIMAL"
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        Self::validation(err.error_code(), err.to_string())
    }
}

impl Decimal {
    /// Parses the canonical textual form.
    ///
    /// Accepts an optional sign, one or more ASCII digits, then optionally a
    /// single `.` followed by one or more ASCII digits. The scale is the number
    /// of fraction digits, so `"2.50"` keeps scale 2.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let (sign, body) = if let Some(rest) = text.strip_prefix('-') {
            (Sign::Minus, rest)
        } else if let Some(rest) = text.strip_prefix('+') {
            (Sign::Plus, rest)
        } else {
            (Sign::Plus, text)
        };
        let offset = text.len() - body.len();

        let mut digits = String::with_capacity(body.len());
        let mut integer_digits = 0usize;
        let mut fraction_digits = 0usize;
        let mut seen_point = false;

        for (index, ch) in body.char_indices() {
            match ch {
                '0'..='9' => {
                    digits.push(ch);
                    if seen_point {
                        fraction_digits += 1;
                    } else {
                        integer_digits += 1;
                    }
                }
                '.' if seen_point => return Err(ParseError::MultipleDecimalPoints),
                '.' if integer_digits == 0 => return Err(ParseError::MissingIntegerDigits),
                '.' => seen_point = true,
                _ => {
                    return Err(ParseError::UnexpectedCharacter {
                        position: offset + index,
                        found: ch,
                    });
                }
            }
        }

        if integer_digits == 0 {
            return Err(ParseError::MissingIntegerDigits);
        }
        if seen_point && fraction_digits == 0 {
            return Err(ParseError::MissingFractionDigits);
        }

        let scale = u32::try_from(fraction_digits).map_err(|_| ParseError::ScaleOverflow)?;
        let magnitude =
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(ParseError::MissingIntegerDigits)?;

        Ok(Self::from_parts(BigInt::from_biguint(sign, magnitude), scale))
    }
}

impl FromStr for Decimal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
