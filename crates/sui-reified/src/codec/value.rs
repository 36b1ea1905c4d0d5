//! Decoded dynamic values.

use crate::error::{ReifiedError, ReifiedResult};
use crate::types::{Address, U256};

/// A decoded Move value.
///
/// This is the intermediate representation between the wire format and a
/// typed instance: the layout codec decodes bytes into a `MoveValue`, and a
/// reified factory turns the value into the generated Rust type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveValue {
    /// A boolean.
    Bool(bool),
    /// An 8-bit unsigned integer.
    U8(u8),
    /// A 16-bit unsigned integer.
    U16(u16),
    /// A 32-bit unsigned integer.
    U32(u32),
    /// A 64-bit unsigned integer.
    U64(u64),
    /// A 128-bit unsigned integer.
    U128(u128),
    /// A 256-bit unsigned integer.
    U256(U256),
    /// A 32-byte address.
    Address(Address),
    /// A UTF-8 string.
    Str(String),
    /// A homogeneous sequence.
    Vector(Vec<MoveValue>),
    /// An optional value.
    Option(Option<Box<MoveValue>>),
    /// A struct as an ordered field record.
    Struct(FieldRecord),
}

impl MoveValue {
    /// Returns a short name for this value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveValue::Bool(_) => "bool",
            MoveValue::U8(_) => "u8",
            MoveValue::U16(_) => "u16",
            MoveValue::U32(_) => "u32",
            MoveValue::U64(_) => "u64",
            MoveValue::U128(_) => "u128",
            MoveValue::U256(_) => "u256",
            MoveValue::Address(_) => "address",
            MoveValue::Str(_) => "string",
            MoveValue::Vector(_) => "vector",
            MoveValue::Option(_) => "option",
            MoveValue::Struct(_) => "struct",
        }
    }

    fn expected(&self, want: &'static str) -> ReifiedError {
        ReifiedError::schema(format!("expected {}, found {}", want, self.kind()))
    }

    /// Returns the boolean payload.
    pub fn as_bool(&self) -> ReifiedResult<bool> {
        match self {
            MoveValue::Bool(v) => Ok(*v),
            other => Err(other.expected("bool")),
        }
    }

    /// Returns the u8 payload.
    pub fn as_u8(&self) -> ReifiedResult<u8> {
        match self {
            MoveValue::U8(v) => Ok(*v),
            other => Err(other.expected("u8")),
        }
    }

    /// Returns the u16 payload.
    pub fn as_u16(&self) -> ReifiedResult<u16> {
        match self {
            MoveValue::U16(v) => Ok(*v),
            other => Err(other.expected("u16")),
        }
    }

    /// Returns the u32 payload.
    pub fn as_u32(&self) -> ReifiedResult<u32> {
        match self {
            MoveValue::U32(v) => Ok(*v),
            other => Err(other.expected("u32")),
        }
    }

    /// Returns the u64 payload.
    pub fn as_u64(&self) -> ReifiedResult<u64> {
        match self {
            MoveValue::U64(v) => Ok(*v),
            other => Err(other.expected("u64")),
        }
    }

    /// Returns the u128 payload.
    pub fn as_u128(&self) -> ReifiedResult<u128> {
        match self {
            MoveValue::U128(v) => Ok(*v),
            other => Err(other.expected("u128")),
        }
    }

    /// Returns the u256 payload.
    pub fn as_u256(&self) -> ReifiedResult<U256> {
        match self {
            MoveValue::U256(v) => Ok(*v),
            other => Err(other.expected("u256")),
        }
    }

    /// Returns the address payload.
    pub fn as_address(&self) -> ReifiedResult<Address> {
        match self {
            MoveValue::Address(v) => Ok(*v),
            other => Err(other.expected("address")),
        }
    }

    /// Returns the string payload.
    pub fn as_str(&self) -> ReifiedResult<&str> {
        match self {
            MoveValue::Str(v) => Ok(v),
            other => Err(other.expected("string")),
        }
    }

    /// Returns the vector elements.
    pub fn as_vector(&self) -> ReifiedResult<&[MoveValue]> {
        match self {
            MoveValue::Vector(v) => Ok(v),
            other => Err(other.expected("vector")),
        }
    }

    /// Returns the optional payload.
    pub fn as_option(&self) -> ReifiedResult<Option<&MoveValue>> {
        match self {
            MoveValue::Option(v) => Ok(v.as_deref()),
            other => Err(other.expected("option")),
        }
    }

    /// Returns the struct field record.
    pub fn as_struct(&self) -> ReifiedResult<&FieldRecord> {
        match self {
            MoveValue::Struct(v) => Ok(v),
            other => Err(other.expected("struct")),
        }
    }
}

/// An ordered mapping from declared wire field names to decoded values.
///
/// Field order matches the declared struct layout; it is load-bearing for
/// encoding and never reordered.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FieldRecord {
    fields: Vec<(String, MoveValue)>,
}

impl FieldRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: MoveValue) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a field.
    pub fn push(&mut self, name: impl Into<String>, value: MoveValue) {
        self.fields.push((name.into(), value));
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&MoveValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Looks up a field by name, failing with `SchemaMismatch` when absent.
    pub fn expect_field(&self, name: &str) -> ReifiedResult<&MoveValue> {
        self.get(name)
            .ok_or_else(|| ReifiedError::schema(format!("missing field `{name}`")))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MoveValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, MoveValue)> for FieldRecord {
    fn from_iter<I: IntoIterator<Item = (String, MoveValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(MoveValue::Bool(true).as_bool().unwrap());
        assert_eq!(MoveValue::U64(7).as_u64().unwrap(), 7);
        assert_eq!(MoveValue::Str("hi".into()).as_str().unwrap(), "hi");

        let err = MoveValue::U64(7).as_bool().unwrap_err();
        assert!(matches!(err, ReifiedError::SchemaMismatch(_)));
        assert!(err.to_string().contains("u64"));
    }

    #[test]
    fn test_option_accessor() {
        let none = MoveValue::Option(None);
        assert!(none.as_option().unwrap().is_none());

        let some = MoveValue::Option(Some(Box::new(MoveValue::U8(1))));
        assert_eq!(some.as_option().unwrap().unwrap().as_u8().unwrap(), 1);
    }

    #[test]
    fn test_field_record() {
        let record = FieldRecord::new()
            .with_field("id", MoveValue::U64(1))
            .with_field("frozen", MoveValue::Bool(false));

        assert_eq!(record.len(), 2);
        assert_eq!(record.expect_field("id").unwrap().as_u64().unwrap(), 1);
        assert!(record.get("missing").is_none());

        let err = record.expect_field("missing").unwrap_err();
        assert!(matches!(err, ReifiedError::SchemaMismatch(_)));

        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "frozen"]);
    }
}
