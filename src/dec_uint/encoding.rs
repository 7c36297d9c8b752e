//! Decimal string parsing and formatting for [`DecUint`].

use crate::{DecUint, Digit};
use alloc::vec::Vec;
use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// The failure result for decimal parsing operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseDecimalError {
    /// The input contained a byte that is not an ASCII decimal digit.
    InvalidDigit,
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit => write!(f, "invalid decimal digit"),
        }
    }
}

impl DecUint {
    /// Parse a decimal digit string.
    ///
    /// Leading zeros are stripped; an empty or all-zero input is zero. Any
    /// byte outside `'0'..='9'` fails the parse before a value is built,
    /// so a malformed string can never reach the arithmetic.
    pub fn from_decimal(value: &str) -> Result<Self, ParseDecimalError> {
        Self::from_decimal_bytes(value.as_bytes())
    }

    /// Parse a decimal digit string of UTF-8 bytes.
    pub fn from_decimal_bytes(value: &[u8]) -> Result<Self, ParseDecimalError> {
        let mut digits = Vec::with_capacity(value.len().max(1));
        for &byte in value.iter().rev() {
            match Digit::from_ascii(byte) {
                Some(digit) => digits.push(digit),
                None => return Err(ParseDecimalError::InvalidDigit),
            }
        }
        Ok(digits.into())
    }
}

impl FromStr for DecUint {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl fmt::Display for DecUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.as_digits().iter().rev() {
            fmt::Display::fmt(digit, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DecUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecUint({self})")
    }
}

#[cfg(feature = "serde")]
impl Serialize for DecUint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
struct DecimalVisitor;

#[cfg(feature = "serde")]
impl de::Visitor<'_> for DecimalVisitor {
    type Value = DecUint;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        DecUint::from_decimal(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DecUint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DecimalVisitor)
    }
}
