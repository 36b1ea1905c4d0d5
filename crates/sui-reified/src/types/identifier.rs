//! Move identifier type.

use crate::error::{ReifiedError, ReifiedResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated Move identifier: module, struct, and field names.
///
/// Identifiers start with a letter or underscore and continue with letters,
/// digits, or underscores.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Creates a new identifier, validating its character set.
    pub fn new(name: impl Into<String>) -> ReifiedResult<Self> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ReifiedError::InvalidIdentifier(name));
        }
        Ok(Self(name))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identifier {
    type Err = ReifiedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(Identifier::new("coin").is_ok());
        assert!(Identifier::new("Coin").is_ok());
        assert!(Identifier::new("_private").is_ok());
        assert!(Identifier::new("balance_v2").is_ok());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(Identifier::new("").is_err());
        assert!(Identifier::new("2fast").is_err());
        assert!(Identifier::new("has-dash").is_err());
        assert!(Identifier::new("has space").is_err());
        assert!(Identifier::new("ünïcode").is_err());
    }

    #[test]
    fn test_display() {
        let id = Identifier::new("coin").unwrap();
        assert_eq!(id.to_string(), "coin");
        assert_eq!(id, "coin");
    }

    #[test]
    fn test_serde() {
        let id = Identifier::new("balance").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"balance\"");

        let parsed: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);

        assert!(serde_json::from_str::<Identifier>("\"not valid\"").is_err());
    }
}
