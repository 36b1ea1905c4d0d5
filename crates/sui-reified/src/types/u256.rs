//! 256-bit unsigned integer.
//!
//! Move's widest integer type has no native Rust counterpart; this wrapper
//! stores 32 little-endian bytes and converts to and from decimal strings,
//! which is how values of this width travel through JSON.

use crate::error::{ReifiedError, ReifiedResult};
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 256-bit unsigned integer stored as 32 little-endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256([u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The maximum representable value, 2^256 - 1.
    pub const MAX: Self = Self([0xff; 32]);

    /// Creates a value from 32 little-endian bytes.
    pub const fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the value as 32 little-endian bytes.
    pub const fn to_le_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Creates a value from a u64.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Creates a value from a u128.
    pub fn from_u128(value: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Parses a decimal string.
    ///
    /// # Errors
    ///
    /// Negative or oversized values fail with `ValueOutOfRange`; text that is
    /// not a decimal integer fails with `MalformedInput`.
    pub fn from_decimal_str(s: &str) -> ReifiedResult<Self> {
        if s.starts_with('-') {
            return Err(ReifiedError::out_of_range("u256", s));
        }
        let value: BigUint = s
            .parse()
            .map_err(|e| ReifiedError::malformed(format!("invalid decimal integer {s:?}: {e}")))?;
        let le = value.to_bytes_le();
        if le.len() > 32 {
            return Err(ReifiedError::out_of_range("u256", s));
        }
        let mut bytes = [0u8; 32];
        bytes[..le.len()].copy_from_slice(&le);
        Ok(Self(bytes))
    }

    /// Renders the value as a decimal string.
    pub fn to_decimal_string(&self) -> String {
        BigUint::from_bytes_le(&self.0).to_string()
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({})", self.to_decimal_string())
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

impl FromStr for U256 {
    type Err = ReifiedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl Serialize for U256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_decimal_str(&s).map_err(serde::de::Error::custom)
    }
}
