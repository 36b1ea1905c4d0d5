//! Core on-chain types.
//!
//! This module contains the fundamental types used throughout the runtime:
//! addresses, identifiers, the 256-bit integer, and type tags.

mod address;
mod identifier;
mod type_tag;
mod u256;

pub use address::{ADDRESS_LENGTH, Address};
pub use identifier::Identifier;
pub use type_tag::{StructTag, TypeTag, compose_type, compress_type};
pub use u256::U256;
