//! Type reification.
//!
//! A [`Reified`] descriptor bundles everything generic code needs to operate
//! on one concrete struct instantiation: its fully-applied type tag, its wire
//! layout, and a factory producing the typed instance. One descriptor exists
//! per instantiation (one per generic-argument binding) and is immutable
//! after construction; typed instances are only ever produced through the
//! factory, so every instance observed by callers came out of a validated
//! decode path.

mod json;
mod object;

pub use object::{MoveObjectContent, PackageContent, ParsedData};

use crate::codec::{FieldRecord, MoveStructLayout, MoveValue};
use crate::error::{ReifiedError, ReifiedResult};
use crate::types::{StructTag, TypeTag};
use json::JsonForm;
use serde_json::Value;
use std::fmt;

/// A generated Move struct binding.
///
/// Implementations are mechanical: a generator emits one `impl` per struct,
/// wiring the declared type name, arity, layout, and field factory into a
/// [`Reified`] descriptor.
pub trait MoveStruct: Sized {
    /// The unparametrized qualified type name, e.g. `0x2::coin::Coin`.
    const TYPE_NAME: &'static str;

    /// The declared number of generic parameters.
    const TYPE_PARAMS: usize;

    /// Builds the descriptor for a concrete instantiation.
    ///
    /// # Errors
    ///
    /// `GenericArityMismatch` when `type_args` does not carry exactly
    /// [`Self::TYPE_PARAMS`] arguments.
    fn reified(type_args: Vec<TypeTag>) -> ReifiedResult<Reified<Self>>;

    /// The fully-applied type of this instance, including resolved generic
    /// arguments.
    fn struct_tag(&self) -> ReifiedResult<StructTag>;

    /// The wire-shaped field record of this instance.
    fn to_field_record(&self) -> FieldRecord;

    /// Renders this instance as plain JSON:
    /// `{"$typeName", "$typeArgs"?, ...fields}` with large integers as
    /// decimal strings and absent `None` options.
    fn to_json(&self) -> ReifiedResult<Value> {
        let tag = self.struct_tag()?;
        Self::reified(tag.type_params.clone())?.to_json_value(self)
    }
}

/// One of the four external representations a descriptor can decode.
#[derive(Debug)]
pub enum DecodeSource<'a> {
    /// Raw wire bytes.
    Bcs(&'a [u8]),
    /// An already-decoded field record.
    Fields(&'a FieldRecord),
    /// Parsed-object content from a node query.
    Object(&'a ParsedData),
    /// Plain application JSON.
    Json(&'a Value),
}

/// The reification descriptor for one fully-applied struct type.
pub struct Reified<T> {
    tag: StructTag,
    layout: MoveStructLayout,
    new_fn: fn(&StructTag, FieldRecord) -> ReifiedResult<T>,
}

impl<T> Reified<T> {
    /// Builds a descriptor.
    ///
    /// `type_name` is the unparametrized qualified name and `declared_arity`
    /// the struct's generic parameter count; `type_args` must match it
    /// exactly. The factory receives the fully-applied tag together with a
    /// field record and is the only way instances of `T` come into being.
    pub fn new(
        type_name: &str,
        declared_arity: usize,
        type_args: Vec<TypeTag>,
        layout: MoveStructLayout,
        new_fn: fn(&StructTag, FieldRecord) -> ReifiedResult<T>,
    ) -> ReifiedResult<Self> {
        let base: StructTag = type_name.parse()?;
        if !base.type_params.is_empty() {
            return Err(ReifiedError::InvalidTypeString(format!(
                "type name must be unparametrized: {type_name}"
            )));
        }
        if type_args.len() != declared_arity {
            return Err(ReifiedError::GenericArityMismatch {
                expected: declared_arity,
                actual: type_args.len(),
            });
        }
        Ok(Self {
            tag: base.with_type_params(type_args),
            layout,
            new_fn,
        })
    }

    /// Returns the fully-applied struct tag.
    pub fn struct_tag(&self) -> &StructTag {
        &self.tag
    }

    /// Returns the applied generic arguments.
    pub fn type_args(&self) -> &[TypeTag] {
        &self.tag.type_params
    }

    /// Returns the wire layout.
    pub fn layout(&self) -> &MoveStructLayout {
        &self.layout
    }

    /// Renders the fully-applied canonical type string.
    pub fn full_type_name(&self) -> String {
        self.tag.to_string()
    }

    /// Produces a typed instance from a field record.
    ///
    /// The factory validates the record against the codec shape; a record
    /// that does not match fails with `SchemaMismatch` and no instance is
    /// observable.
    pub fn from_fields(&self, fields: FieldRecord) -> ReifiedResult<T> {
        (self.new_fn)(&self.tag, fields)
    }

    /// Decodes a typed instance from raw wire bytes.
    pub fn from_bcs(&self, bytes: &[u8]) -> ReifiedResult<T> {
        let record = self.layout.decode_all(bytes)?;
        self.from_fields(record)
    }

    /// Produces a typed instance from a decoded [`MoveValue`], which must be
    /// a struct.
    pub fn from_value(&self, value: &MoveValue) -> ReifiedResult<T> {
        self.from_fields(value.as_struct()?.clone())
    }

    /// Decodes a typed instance from parsed-object content.
    ///
    /// The reported on-chain type string is canonicalized and checked
    /// against this descriptor before any field is touched: a value tagged
    /// with a different struct fails with `TypeMismatch`, and mismatched
    /// generic arguments fail with `GenericArityMismatch` or
    /// `GenericArgumentMismatch`.
    pub fn from_object(&self, content: &ParsedData) -> ReifiedResult<T> {
        let object = match content {
            ParsedData::MoveObject(object) => object,
            ParsedData::Package(_) => {
                return Err(ReifiedError::type_mismatch(&self.tag, "package content"));
            }
        };
        let actual: StructTag = object.object_type.parse()?;
        self.tag.check_matches(&actual)?;
        let record = json::decode_struct(JsonForm::Node, &self.layout, &object.fields)?;
        self.from_fields(record)
    }

    /// Decodes a typed instance from plain application JSON.
    pub fn from_json(&self, value: &Value) -> ReifiedResult<T> {
        let map = value
            .as_object()
            .ok_or_else(|| ReifiedError::schema("expected a JSON object"))?;

        let type_name = map
            .get("$typeName")
            .and_then(Value::as_str)
            .ok_or_else(|| ReifiedError::schema("missing $typeName"))?;
        let base: StructTag = type_name.parse()?;
        if !base.type_params.is_empty() {
            return Err(ReifiedError::schema(
                "$typeName must not carry type arguments",
            ));
        }
        if !self.tag.same_struct(&base) {
            return Err(ReifiedError::type_mismatch(self.tag.base_name(), type_name));
        }

        let mut args = Vec::new();
        match map.get("$typeArgs") {
            None => {}
            Some(Value::Array(items)) => {
                for item in items {
                    let text = item
                        .as_str()
                        .ok_or_else(|| ReifiedError::schema("$typeArgs entries must be strings"))?;
                    args.push(text.parse::<TypeTag>()?);
                }
            }
            Some(_) => return Err(ReifiedError::schema("$typeArgs must be an array")),
        }
        if args.len() != self.tag.type_params.len() {
            return Err(ReifiedError::GenericArityMismatch {
                expected: self.tag.type_params.len(),
                actual: args.len(),
            });
        }
        for (expected, found) in self.tag.type_params.iter().zip(args.iter()) {
            if expected != found {
                return Err(ReifiedError::generic_argument_mismatch(expected, found));
            }
        }

        let record = json::decode_struct_fields(JsonForm::Plain, &self.layout, map)?;
        self.from_fields(record)
    }

    /// Decodes a typed instance from any of the four external
    /// representations.
    pub fn decode(&self, source: DecodeSource<'_>) -> ReifiedResult<T> {
        match source {
            DecodeSource::Bcs(bytes) => self.from_bcs(bytes),
            DecodeSource::Fields(record) => self.from_fields(record.clone()),
            DecodeSource::Object(content) => self.from_object(content),
            DecodeSource::Json(value) => self.from_json(value),
        }
    }
}

impl<T: MoveStruct> Reified<T> {
    /// Encodes an instance to wire bytes, validating its field record
    /// against the layout.
    pub fn to_bcs(&self, value: &T) -> ReifiedResult<Vec<u8>> {
        self.layout.encode_to_vec(&value.to_field_record())
    }

    /// Renders an instance as plain JSON with the
    /// `$typeName`/`$typeArgs` envelope.
    pub fn to_json_value(&self, value: &T) -> ReifiedResult<Value> {
        let mut out = serde_json::Map::new();
        out.insert(
            "$typeName".to_string(),
            Value::String(self.tag.base_name()),
        );
        if !self.tag.type_params.is_empty() {
            out.insert(
                "$typeArgs".to_string(),
                Value::Array(
                    self.tag
                        .type_params
                        .iter()
                        .map(|arg| Value::String(arg.to_string()))
                        .collect(),
                ),
            );
        }
        let fields = json::encode_struct_fields(&self.layout, &value.to_field_record())?;
        out.extend(fields);
        Ok(Value::Object(out))
    }
}

impl<T> Clone for Reified<T> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            layout: self.layout.clone(),
            new_fn: self.new_fn,
        }
    }
}

impl<T> fmt::Debug for Reified<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reified")
            .field("type", &self.full_type_name())
            .finish_non_exhaustive()
    }
}
