use std::{fmt, num::IntErrorKind};

use crate::error::ParseError;

/// The numeric base an integer literal is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    /// `0b` / `0B` prefix.
    Binary,
    /// Leading `0` followed by at least one more character.
    Octal,
    /// No prefix.
    Decimal,
    /// `0x` / `0X` prefix.
    Hexadecimal,
}

impl Radix {
    /// Returns the base as the number `from_str_radix` expects.
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}

/// Splits a literal into its radix and the digits to interpret in that radix.
///
/// The prefix checks run in a fixed order: `0x`/`0X` and `0b`/`0B` need at
/// least three characters and are tested before the generic leading-zero
/// octal rule. Octal literals keep their leading zero in the digit string.
///
/// ## Example
/// ```
/// use radixcalc::util::radix::{Radix, resolve_radix};
///
/// assert_eq!(resolve_radix("0x1A"), (Radix::Hexadecimal, "1A"));
/// assert_eq!(resolve_radix("0b101"), (Radix::Binary, "101"));
/// assert_eq!(resolve_radix("017"), (Radix::Octal, "017"));
/// assert_eq!(resolve_radix("17"), (Radix::Decimal, "17"));
///
/// // A bare prefix is too short for the prefix rules and falls through to octal.
/// assert_eq!(resolve_radix("0x"), (Radix::Octal, "0x"));
/// ```
#[must_use]
pub fn resolve_radix(text: &str) -> (Radix, &str) {
    let bytes = text.as_bytes();
    match bytes {
        [b'0', b'x' | b'X', _, ..] => (Radix::Hexadecimal, &text[2..]),
        [b'0', b'b' | b'B', _, ..] => (Radix::Binary, &text[2..]),
        [b'0', _, ..] => (Radix::Octal, text),
        _ => (Radix::Decimal, text),
    }
}

/// Converts the text of an integer literal into its value.
///
/// Every character after the prefix must be a digit of the resolved radix;
/// sign characters are not accepted. Values outside the `i64` range are
/// reported separately from malformed digits.
///
/// ## Errors
/// - `ParseError::MalformedLiteral` if the digits are empty or invalid for the
///   radix.
/// - `ParseError::LiteralTooLarge` if the value does not fit into an `i64`.
///
/// ## Example
/// ```
/// use radixcalc::{error::ParseError, util::radix::parse_int_literal};
///
/// assert_eq!(parse_int_literal("0x1A", 1).unwrap(), 26);
/// assert_eq!(parse_int_literal("010", 1).unwrap(), 8);
///
/// let err = parse_int_literal("09", 4).unwrap_err();
/// assert!(matches!(err, ParseError::MalformedLiteral { radix: 8, position: 4, .. }));
/// ```
pub fn parse_int_literal(text: &str, position: usize) -> Result<i64, ParseError> {
    let (radix, digits) = resolve_radix(text);
    let base = radix.base();

    let malformed = || ParseError::MalformedLiteral { literal: text.to_string(),
                                                      radix: base,
                                                      position };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(base)) {
        return Err(malformed());
    }

    i64::from_str_radix(digits, base).map_err(|e| match e.kind() {
                                         IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                                             ParseError::LiteralTooLarge { literal: text.to_string(),
                                                                           position }
                                         },
                                         _ => malformed(),
                                     })
}
