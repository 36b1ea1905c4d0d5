//! # sui-reified
//!
//! The runtime codec layer for machine-generated Move struct bindings.
//!
//! Generated binding code defines one Rust type per on-chain struct and wires
//! it into this runtime through the [`MoveStruct`] trait; everything else
//! (the binary wire codec, type-string handling, the four decode paths, the
//! plain-JSON encode path) lives here, so the generated output stays
//! mechanical.
//!
//! ## Representations
//!
//! A [`Reified`] descriptor decodes a struct from any of four external
//! representations:
//!
//! | Representation | Entry point |
//! |----------------|-------------|
//! | Raw wire bytes | [`Reified::from_bcs`] |
//! | Decoded field record | [`Reified::from_fields`] |
//! | Parsed-object content from a node | [`Reified::from_object`] |
//! | Plain application JSON | [`Reified::from_json`] |
//!
//! Every external entry point validates the declared type string against the
//! expected one before accepting data: a value decoded as `Coin<X>` can
//! never silently become a `Coin<Y>` instance.
//!
//! ## Example
//!
//! ```rust
//! use sui_reified::{
//!     FieldRecord, MoveStruct, MoveStructLayout, MoveTypeLayout, MoveValue, Reified,
//!     ReifiedResult, StructTag, TypeTag,
//! };
//!
//! // What a generator emits for a two-field struct:
//! #[derive(Clone, Debug, PartialEq, Eq)]
//! struct Counter {
//!     value: u64,
//! }
//!
//! impl MoveStruct for Counter {
//!     const TYPE_NAME: &'static str = "0x7::counter::Counter";
//!     const TYPE_PARAMS: usize = 0;
//!
//!     fn reified(type_args: Vec<TypeTag>) -> ReifiedResult<Reified<Self>> {
//!         Reified::new(
//!             Self::TYPE_NAME,
//!             Self::TYPE_PARAMS,
//!             type_args,
//!             MoveStructLayout::new("Counter", [("value", MoveTypeLayout::U64)]),
//!             |_, fields| {
//!                 Ok(Self {
//!                     value: fields.expect_field("value")?.as_u64()?,
//!                 })
//!             },
//!         )
//!     }
//!
//!     fn struct_tag(&self) -> ReifiedResult<StructTag> {
//!         Self::TYPE_NAME.parse()
//!     }
//!
//!     fn to_field_record(&self) -> FieldRecord {
//!         FieldRecord::new().with_field("value", MoveValue::U64(self.value))
//!     }
//! }
//!
//! let reified = Counter::reified(vec![]).unwrap();
//! let counter = reified
//!     .from_fields(FieldRecord::new().with_field("value", MoveValue::U64(7)))
//!     .unwrap();
//! let bytes = reified.to_bcs(&counter).unwrap();
//! assert_eq!(reified.from_bcs(&bytes).unwrap(), counter);
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod codec;
pub mod error;
pub mod reified;
pub mod types;

pub use codec::{Cursor, FieldRecord, MoveStructLayout, MoveTypeLayout, MoveValue};
pub use error::{ReifiedError, ReifiedResult};
pub use reified::{DecodeSource, MoveObjectContent, MoveStruct, PackageContent, ParsedData, Reified};
pub use types::{Address, Identifier, StructTag, TypeTag, U256, compose_type, compress_type};
