//! Account and object address type.
//!
//! Sui addresses are 32-byte values, typically displayed as 64 hexadecimal
//! characters with a `0x` prefix. Object ids share the same representation.

use crate::error::{ReifiedError, ReifiedResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of an address in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// A 32-byte Sui address.
///
/// # Display Format
///
/// Inside type strings, addresses use the short canonical form with leading
/// zeros trimmed (`0x2` for the Sui framework). Standalone values are often
/// written with all 64 hexadecimal digits; both spellings parse to the same
/// address and compare equal.
///
/// # Example
///
/// ```rust
/// use sui_reified::Address;
///
/// let addr = Address::from_hex("0x2").unwrap();
/// assert_eq!(
///     addr.to_hex(),
///     "0x0000000000000000000000000000000000000000000000000000000000000002"
/// );
/// assert_eq!(addr.to_short_string(), "0x2");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The "zero" address (all zeros).
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// The Move standard library address (0x1).
    pub const ONE: Self = Self::from_u64(1);

    /// The Sui framework address (0x2).
    pub const TWO: Self = Self::from_u64(2);

    /// Creates an address from a byte array.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a u64 value (for small addresses like 0x2).
    const fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        let value_bytes = value.to_be_bytes();
        bytes[ADDRESS_LENGTH - 8] = value_bytes[0];
        bytes[ADDRESS_LENGTH - 7] = value_bytes[1];
        bytes[ADDRESS_LENGTH - 6] = value_bytes[2];
        bytes[ADDRESS_LENGTH - 5] = value_bytes[3];
        bytes[ADDRESS_LENGTH - 4] = value_bytes[4];
        bytes[ADDRESS_LENGTH - 3] = value_bytes[5];
        bytes[ADDRESS_LENGTH - 2] = value_bytes[6];
        bytes[ADDRESS_LENGTH - 1] = value_bytes[7];
        Self(bytes)
    }

    /// Creates an address from a hex string (with or without `0x` prefix).
    ///
    /// Short spellings are zero-padded on the left. Empty strings and bare
    /// `0x` prefixes are rejected.
    pub fn from_hex<T: AsRef<[u8]>>(hex_str: T) -> ReifiedResult<Self> {
        let hex_str = hex_str.as_ref();

        if hex_str.is_empty() {
            return Err(ReifiedError::InvalidAddress(
                "address cannot be empty".to_string(),
            ));
        }

        let hex_str = if hex_str.starts_with(b"0x") || hex_str.starts_with(b"0X") {
            &hex_str[2..]
        } else {
            hex_str
        };

        let hex_string = std::str::from_utf8(hex_str)
            .map_err(|e| ReifiedError::InvalidAddress(e.to_string()))?;

        if hex_string.is_empty() {
            return Err(ReifiedError::InvalidAddress(
                "address must contain at least one hex digit".to_string(),
            ));
        }

        if hex_string.len() > ADDRESS_LENGTH * 2 {
            return Err(ReifiedError::InvalidAddress(format!(
                "address too long: {} characters (max {})",
                hex_string.len(),
                ADDRESS_LENGTH * 2
            )));
        }

        // Zero-pad to full length
        let padded = format!("{:0>64}", hex_string);
        let bytes = hex::decode(&padded)?;

        let mut address = [0u8; ADDRESS_LENGTH];
        address.copy_from_slice(&bytes);
        Ok(Self(address))
    }

    /// Creates an address from a byte slice.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> ReifiedResult<Self> {
        let bytes = bytes.as_ref();
        if bytes.len() != ADDRESS_LENGTH {
            return Err(ReifiedError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ADDRESS_LENGTH,
                bytes.len()
            )));
        }
        let mut address = [0u8; ADDRESS_LENGTH];
        address.copy_from_slice(bytes);
        Ok(Self(address))
    }

    /// Returns the address as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the address as a byte array.
    pub fn to_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Returns the address as a full-length hex string with `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns the short canonical hex string, trimming leading zeros.
    ///
    /// For example, `0x0000...0002` becomes `0x2`. This is the spelling used
    /// inside canonical type strings.
    pub fn to_short_string(&self) -> String {
        let hex = hex::encode(self.0);
        let trimmed = hex.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }

    /// Returns true if this is the zero address.
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_short_string())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_short_string())
    }
}

impl FromStr for Address {
    type Err = ReifiedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LENGTH] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
