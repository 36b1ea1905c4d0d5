//! Composite codec builder.
//!
//! A [`MoveTypeLayout`] describes the wire shape of one Move type; the
//! layout drives both directions of the codec. Struct fields are encoded as
//! plain concatenation in declared order, vectors carry a ULEB128 count, and
//! options carry a one-byte presence flag.

use crate::codec::primitives;
use crate::codec::{Cursor, FieldRecord, MoveValue};
use crate::error::{ReifiedError, ReifiedResult};

/// The wire layout of a Move type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveTypeLayout {
    /// `bool`
    Bool,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `u256`
    U256,
    /// 32-byte address
    Address,
    /// UTF-8 string (length-prefixed bytes on the wire)
    Str,
    /// `vector<T>`: ULEB128 count then repeated element encoding
    Vector(Box<MoveTypeLayout>),
    /// `Option<T>`: one presence byte then the payload when present
    Option(Box<MoveTypeLayout>),
    /// A struct: ordered named sub-fields
    Struct(MoveStructLayout),
}

impl MoveTypeLayout {
    /// Builds a vector layout.
    pub fn vector(element: MoveTypeLayout) -> Self {
        Self::Vector(Box::new(element))
    }

    /// Builds an option layout.
    pub fn option(payload: MoveTypeLayout) -> Self {
        Self::Option(Box::new(payload))
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::U256 => "u256",
            Self::Address => "address",
            Self::Str => "string",
            Self::Vector(_) => "vector",
            Self::Option(_) => "option",
            Self::Struct(_) => "struct",
        }
    }

    /// Decodes one value, advancing the cursor.
    pub fn decode(&self, cursor: &mut Cursor<'_>) -> ReifiedResult<MoveValue> {
        match self {
            Self::Bool => Ok(MoveValue::Bool(primitives::decode_bool(cursor)?)),
            Self::U8 => Ok(MoveValue::U8(primitives::decode_u8(cursor)?)),
            Self::U16 => Ok(MoveValue::U16(primitives::decode_u16(cursor)?)),
            Self::U32 => Ok(MoveValue::U32(primitives::decode_u32(cursor)?)),
            Self::U64 => Ok(MoveValue::U64(primitives::decode_u64(cursor)?)),
            Self::U128 => Ok(MoveValue::U128(primitives::decode_u128(cursor)?)),
            Self::U256 => Ok(MoveValue::U256(primitives::decode_u256(cursor)?)),
            Self::Address => Ok(MoveValue::Address(primitives::decode_address(cursor)?)),
            Self::Str => Ok(MoveValue::Str(primitives::decode_string(cursor)?)),
            Self::Vector(element) => {
                let len = primitives::read_length_prefix(cursor)?;
                // Every element consumes at least one byte, so a count beyond
                // the remaining buffer can never decode.
                if len > cursor.remaining() {
                    return Err(ReifiedError::malformed(format!(
                        "vector count {} exceeds {} remaining bytes",
                        len,
                        cursor.remaining()
                    )));
                }
                let mut items = Vec::with_capacity(len);
                for _ in 0..len {
                    items.push(element.decode(cursor)?);
                }
                Ok(MoveValue::Vector(items))
            }
            Self::Option(payload) => match cursor.read_byte()? {
                0 => Ok(MoveValue::Option(None)),
                1 => Ok(MoveValue::Option(Some(Box::new(payload.decode(cursor)?)))),
                other => Err(ReifiedError::malformed(format!(
                    "invalid option flag: {other:#04x}"
                ))),
            },
            Self::Struct(layout) => Ok(MoveValue::Struct(layout.decode(cursor)?)),
        }
    }

    /// Decodes a value from an entire buffer, rejecting trailing bytes.
    pub fn decode_all(&self, bytes: &[u8]) -> ReifiedResult<MoveValue> {
        let mut cursor = Cursor::new(bytes);
        let value = self.decode(&mut cursor)?;
        if !cursor.is_at_end() {
            return Err(ReifiedError::malformed(format!(
                "{} trailing bytes after value",
                cursor.remaining()
            )));
        }
        Ok(value)
    }

    /// Encodes `value`, validating it against this layout.
    ///
    /// # Errors
    ///
    /// `SchemaMismatch` when the value's shape does not match the layout;
    /// `ValueOutOfRange` for unrepresentable sequence lengths.
    pub fn encode(&self, value: &MoveValue, out: &mut Vec<u8>) -> ReifiedResult<()> {
        match (self, value) {
            (Self::Bool, MoveValue::Bool(v)) => {
                primitives::encode_bool(out, *v);
                Ok(())
            }
            (Self::U8, MoveValue::U8(v)) => {
                primitives::encode_u8(out, *v);
                Ok(())
            }
            (Self::U16, MoveValue::U16(v)) => {
                primitives::encode_u16(out, *v);
                Ok(())
            }
            (Self::U32, MoveValue::U32(v)) => {
                primitives::encode_u32(out, *v);
                Ok(())
            }
            (Self::U64, MoveValue::U64(v)) => {
                primitives::encode_u64(out, *v);
                Ok(())
            }
            (Self::U128, MoveValue::U128(v)) => {
                primitives::encode_u128(out, *v);
                Ok(())
            }
            (Self::U256, MoveValue::U256(v)) => {
                primitives::encode_u256(out, v);
                Ok(())
            }
            (Self::Address, MoveValue::Address(v)) => {
                primitives::encode_address(out, v);
                Ok(())
            }
            (Self::Str, MoveValue::Str(v)) => primitives::encode_string(out, v),
            (Self::Vector(element), MoveValue::Vector(items)) => {
                primitives::write_length_prefix(out, items.len())?;
                for item in items {
                    element.encode(item, out)?;
                }
                Ok(())
            }
            (Self::Option(payload), MoveValue::Option(inner)) => match inner {
                None => {
                    out.push(0);
                    Ok(())
                }
                Some(v) => {
                    out.push(1);
                    payload.encode(v, out)
                }
            },
            (Self::Struct(layout), MoveValue::Struct(record)) => layout.encode(record, out),
            (layout, value) => Err(ReifiedError::schema(format!(
                "expected {} value, found {}",
                layout.kind(),
                value.kind()
            ))),
        }
    }

    /// Encodes `value` into a fresh buffer.
    pub fn encode_to_vec(&self, value: &MoveValue) -> ReifiedResult<Vec<u8>> {
        let mut out = Vec::new();
        self.encode(value, &mut out)?;
        Ok(out)
    }
}

/// The wire layout of one struct: its name and ordered named fields.
///
/// Field order must exactly match the remote system's declared order; there
/// is no reordering and no by-name sparse encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveStructLayout {
    name: String,
    fields: Vec<(String, MoveTypeLayout)>,
}

impl MoveStructLayout {
    /// Builds a struct layout from ordered named field layouts.
    pub fn new<N, I, F>(name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (F, MoveTypeLayout)>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(field, layout)| (field.into(), layout))
                .collect(),
        }
    }

    /// Returns the struct name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered named field layouts.
    pub fn fields(&self) -> &[(String, MoveTypeLayout)] {
        &self.fields
    }

    /// Decodes each field in declared order, advancing a shared cursor.
    pub fn decode(&self, cursor: &mut Cursor<'_>) -> ReifiedResult<FieldRecord> {
        let mut record = FieldRecord::new();
        for (name, layout) in &self.fields {
            record.push(name.clone(), layout.decode(cursor)?);
        }
        Ok(record)
    }

    /// Decodes a struct from an entire buffer, rejecting trailing bytes.
    pub fn decode_all(&self, bytes: &[u8]) -> ReifiedResult<FieldRecord> {
        let mut cursor = Cursor::new(bytes);
        let record = self.decode(&mut cursor)?;
        if !cursor.is_at_end() {
            return Err(ReifiedError::malformed(format!(
                "{} trailing bytes after {}",
                cursor.remaining(),
                self.name
            )));
        }
        Ok(record)
    }

    /// Encodes a field record, validating names and order against the layout.
    pub fn encode(&self, record: &FieldRecord, out: &mut Vec<u8>) -> ReifiedResult<()> {
        if record.len() != self.fields.len() {
            return Err(ReifiedError::schema(format!(
                "{} expects {} field(s), record has {}",
                self.name,
                self.fields.len(),
                record.len()
            )));
        }
        for ((declared, layout), (actual, value)) in self.fields.iter().zip(record.iter()) {
            if declared != actual {
                return Err(ReifiedError::schema(format!(
                    "{} expects field `{declared}`, record has `{actual}`",
                    self.name
                )));
            }
            layout.encode(value, out)?;
        }
        Ok(())
    }

    /// Encodes a field record into a fresh buffer.
    pub fn encode_to_vec(&self, record: &FieldRecord) -> ReifiedResult<Vec<u8>> {
        let mut out = Vec::new();
        self.encode(record, &mut out)?;
        Ok(out)
    }
}
