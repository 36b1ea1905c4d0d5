//! Layout-guided JSON conversion.
//!
//! Two JSON dialects reach this runtime: the node's parsed-object form
//! (large integers as decimal strings, options as null-or-value, single-field
//! wrappers flattened) and the plain application form produced by `to_json`
//! (options present-or-absent, `$typeName`/`$typeArgs` envelope). Both are
//! decoded against a [`MoveTypeLayout`], never by guessing from the JSON
//! shape alone.

use crate::codec::{FieldRecord, MoveStructLayout, MoveTypeLayout, MoveValue};
use crate::error::{ReifiedError, ReifiedResult};
use crate::types::{Address, U256};
use serde_json::{Map, Value};

/// Which JSON dialect is being decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum JsonForm {
    /// The node's parsed-object field representation.
    Node,
    /// The plain application JSON representation.
    Plain,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expect_schema(want: &str, found: &Value) -> ReifiedError {
    ReifiedError::schema(format!("expected {want}, found JSON {}", json_kind(found)))
}

fn parse_decimal(width: &'static str, s: &str) -> ReifiedResult<u128> {
    if s.starts_with('-') {
        return Err(ReifiedError::out_of_range(width, s));
    }
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReifiedError::malformed(format!(
            "invalid decimal integer {s:?}"
        )));
    }
    s.parse::<u128>()
        .map_err(|_| ReifiedError::out_of_range(width, s))
}

fn json_u128(width: &'static str, value: &Value) -> ReifiedResult<u128> {
    match value {
        // With arbitrary_precision enabled the number keeps its full text
        Value::Number(n) => parse_decimal(width, &n.to_string()),
        Value::String(s) => parse_decimal(width, s),
        other => Err(expect_schema(width, other)),
    }
}

fn json_u64(width: &'static str, value: &Value) -> ReifiedResult<u64> {
    let wide = json_u128(width, value)?;
    u64::try_from(wide).map_err(|_| ReifiedError::out_of_range(width, wide))
}

fn json_u256(value: &Value) -> ReifiedResult<U256> {
    match value {
        Value::Number(n) => U256::from_decimal_str(&n.to_string()),
        Value::String(s) => U256::from_decimal_str(s),
        other => Err(expect_schema("u256", other)),
    }
}

fn json_address(value: &Value) -> ReifiedResult<Address> {
    match value {
        Value::String(s) => Address::from_hex(s),
        other => Err(expect_schema("address", other)),
    }
}

/// Decodes one JSON value against a layout.
pub(crate) fn decode_value(
    form: JsonForm,
    layout: &MoveTypeLayout,
    value: &Value,
) -> ReifiedResult<MoveValue> {
    match layout {
        MoveTypeLayout::Bool => value
            .as_bool()
            .map(MoveValue::Bool)
            .ok_or_else(|| expect_schema("bool", value)),
        MoveTypeLayout::U8 => {
            let v = json_u64("u8", value)?;
            u8::try_from(v)
                .map(MoveValue::U8)
                .map_err(|_| ReifiedError::out_of_range("u8", v))
        }
        MoveTypeLayout::U16 => {
            let v = json_u64("u16", value)?;
            u16::try_from(v)
                .map(MoveValue::U16)
                .map_err(|_| ReifiedError::out_of_range("u16", v))
        }
        MoveTypeLayout::U32 => {
            let v = json_u64("u32", value)?;
            u32::try_from(v)
                .map(MoveValue::U32)
                .map_err(|_| ReifiedError::out_of_range("u32", v))
        }
        MoveTypeLayout::U64 => Ok(MoveValue::U64(json_u64("u64", value)?)),
        MoveTypeLayout::U128 => Ok(MoveValue::U128(json_u128("u128", value)?)),
        MoveTypeLayout::U256 => Ok(MoveValue::U256(json_u256(value)?)),
        MoveTypeLayout::Address => Ok(MoveValue::Address(json_address(value)?)),
        MoveTypeLayout::Str => value
            .as_str()
            .map(|s| MoveValue::Str(s.to_string()))
            .ok_or_else(|| expect_schema("string", value)),
        MoveTypeLayout::Vector(element) => {
            let items = value
                .as_array()
                .ok_or_else(|| expect_schema("vector", value))?;
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(decode_value(form, element, item)?);
            }
            Ok(MoveValue::Vector(out))
        }
        MoveTypeLayout::Option(payload) => {
            if value.is_null() {
                Ok(MoveValue::Option(None))
            } else {
                Ok(MoveValue::Option(Some(Box::new(decode_value(
                    form, payload, value,
                )?))))
            }
        }
        MoveTypeLayout::Struct(inner) => {
            Ok(MoveValue::Struct(decode_struct(form, inner, value)?))
        }
    }
}

/// Decodes a JSON representation of a struct into a field record.
pub(crate) fn decode_struct(
    form: JsonForm,
    layout: &MoveStructLayout,
    value: &Value,
) -> ReifiedResult<FieldRecord> {
    match value {
        Value::Object(map) => {
            // The node nests some struct values as {type, fields}
            let map = match (form, map.get("type"), map.get("fields")) {
                (JsonForm::Node, Some(Value::String(_)), Some(Value::Object(inner))) => inner,
                _ => map,
            };
            decode_struct_fields(form, layout, map)
        }
        other if form == JsonForm::Node && layout.fields().len() == 1 => {
            // The node flattens single-field wrappers (Balance as a bare
            // string, UID's inner ID as its address)
            let (name, field_layout) = &layout.fields()[0];
            Ok(FieldRecord::new().with_field(name.clone(), decode_value(form, field_layout, other)?))
        }
        other => Err(ReifiedError::schema(format!(
            "expected JSON object for {}, found {}",
            layout.name(),
            json_kind(other)
        ))),
    }
}

/// Decodes the declared fields of `layout` out of a JSON object.
pub(crate) fn decode_struct_fields(
    form: JsonForm,
    layout: &MoveStructLayout,
    map: &Map<String, Value>,
) -> ReifiedResult<FieldRecord> {
    let mut record = FieldRecord::new();
    for (name, field_layout) in layout.fields() {
        match map.get(name) {
            Some(field_value) => {
                record.push(name.clone(), decode_value(form, field_layout, field_value)?);
            }
            // An absent key is a None option; anything else is a hard error
            None if matches!(field_layout, MoveTypeLayout::Option(_)) => {
                record.push(name.clone(), MoveValue::Option(None));
            }
            None => {
                return Err(ReifiedError::schema(format!(
                    "missing field `{name}` in {}",
                    layout.name()
                )));
            }
        }
    }
    Ok(record)
}

/// Encodes one value as plain JSON.
///
/// Integers of 64 bits and above render as decimal strings; addresses render
/// full-length; `None` options render as null (struct encoding omits them).
pub(crate) fn encode_value(layout: &MoveTypeLayout, value: &MoveValue) -> ReifiedResult<Value> {
    match (layout, value) {
        (MoveTypeLayout::Bool, MoveValue::Bool(v)) => Ok(Value::Bool(*v)),
        (MoveTypeLayout::U8, MoveValue::U8(v)) => Ok(Value::from(*v)),
        (MoveTypeLayout::U16, MoveValue::U16(v)) => Ok(Value::from(*v)),
        (MoveTypeLayout::U32, MoveValue::U32(v)) => Ok(Value::from(*v)),
        (MoveTypeLayout::U64, MoveValue::U64(v)) => Ok(Value::String(v.to_string())),
        (MoveTypeLayout::U128, MoveValue::U128(v)) => Ok(Value::String(v.to_string())),
        (MoveTypeLayout::U256, MoveValue::U256(v)) => {
            Ok(Value::String(v.to_decimal_string()))
        }
        (MoveTypeLayout::Address, MoveValue::Address(v)) => Ok(Value::String(v.to_hex())),
        (MoveTypeLayout::Str, MoveValue::Str(v)) => Ok(Value::String(v.clone())),
        (MoveTypeLayout::Vector(element), MoveValue::Vector(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(encode_value(element, item)?);
            }
            Ok(Value::Array(out))
        }
        (MoveTypeLayout::Option(payload), MoveValue::Option(inner)) => match inner {
            None => Ok(Value::Null),
            Some(v) => encode_value(payload, v),
        },
        (MoveTypeLayout::Struct(inner), MoveValue::Struct(record)) => {
            Ok(Value::Object(encode_struct_fields(inner, record)?))
        }
        (layout, value) => Err(ReifiedError::schema(format!(
            "cannot render {} value as {} JSON",
            value.kind(),
            layout.kind()
        ))),
    }
}

/// Encodes a field record as a plain JSON object, omitting `None` options.
pub(crate) fn encode_struct_fields(
    layout: &MoveStructLayout,
    record: &FieldRecord,
) -> ReifiedResult<Map<String, Value>> {
    if record.len() != layout.fields().len() {
        return Err(ReifiedError::schema(format!(
            "{} expects {} field(s), record has {}",
            layout.name(),
            layout.fields().len(),
            record.len()
        )));
    }
    let mut out = Map::new();
    for ((declared, field_layout), (actual, value)) in layout.fields().iter().zip(record.iter()) {
        if declared != actual {
            return Err(ReifiedError::schema(format!(
                "{} expects field `{declared}`, record has `{actual}`",
                layout.name()
            )));
        }
        if let MoveValue::Option(None) = value {
            continue;
        }
        out.insert(declared.clone(), encode_value(field_layout, value)?);
    }
    Ok(out)
}
