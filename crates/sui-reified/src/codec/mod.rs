//! Binary wire codec.
//!
//! The wire format is the canonical binary serialization used by Move
//! chains: little-endian fixed-width integers, ULEB128 length prefixes for
//! variable-length values, one-byte presence flags for options, and structs
//! as the plain concatenation of their fields in declared order.
//!
//! Decoding is driven by a runtime [`MoveTypeLayout`] rather than a static
//! Rust type, which is what lets one engine serve every generated struct
//! shape.

mod cursor;
mod layout;
pub mod primitives;
mod value;

pub use cursor::Cursor;
pub use layout::{MoveStructLayout, MoveTypeLayout};
pub use value::{FieldRecord, MoveValue};
