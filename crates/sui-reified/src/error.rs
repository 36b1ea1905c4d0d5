//! Error types for the reified codec runtime.
//!
//! This module provides a unified error type [`ReifiedError`] covering every
//! failure a decode or encode path can surface. Errors are reported to the
//! immediate caller; nothing in this crate retries or falls back to a
//! best-effort value, and a failed struct decode never leaves a partially
//! constructed instance behind.

use thiserror::Error;

/// A specialized Result type for codec and reification operations.
pub type ReifiedResult<T> = Result<T, ReifiedError>;

/// The error type for the reified codec runtime.
#[derive(Error, Debug)]
pub enum ReifiedError {
    /// The wire buffer is truncated, carries a non-minimal length prefix, or
    /// otherwise cannot be interpreted as the declared shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A numeric value cannot be represented in the declared width.
    #[error("value out of range for {width}: {value}")]
    ValueOutOfRange {
        /// The declared width (e.g. `u8`, `u64`, `sequence length`).
        width: &'static str,
        /// The offending value, rendered for diagnostics.
        value: String,
    },

    /// A field record does not match the declared struct field order, names,
    /// or value kinds.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A tagged type string, after canonicalization, is not the expected type.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        /// The fully-applied type that was expected.
        expected: String,
        /// The type actually reported by the input.
        actual: String,
    },

    /// The number of supplied generic arguments does not equal the declared
    /// arity.
    #[error("generic arity mismatch: expected {expected} type argument(s), found {actual}")]
    GenericArityMismatch {
        /// The declared number of generic parameters.
        expected: usize,
        /// The number of arguments actually supplied.
        actual: usize,
    },

    /// A supplied generic argument names a different type than the expected
    /// one at the same position.
    #[error("generic argument mismatch: expected {expected}, found {actual}")]
    GenericArgumentMismatch {
        /// The expected argument at this position.
        expected: String,
        /// The argument actually found.
        actual: String,
    },

    /// Invalid account or object address text.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid Move identifier.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A type string failed to parse.
    #[error("invalid type string: {0}")]
    InvalidTypeString(String),

    /// Error occurred during JSON serialization/deserialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during hex encoding/decoding.
    #[error("hex error: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl ReifiedError {
    /// Creates a new malformed-input error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Creates a new schema-mismatch error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    /// Creates a new out-of-range error for the given width.
    pub fn out_of_range(width: &'static str, value: impl ToString) -> Self {
        Self::ValueOutOfRange {
            width,
            value: value.to_string(),
        }
    }

    /// Creates a new type-mismatch error.
    pub fn type_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Creates a new generic-argument-mismatch error.
    pub fn generic_argument_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        Self::GenericArgumentMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Returns true if this error rejects a value on type-identity grounds
    /// (wrong type string or wrong generic arguments).
    pub fn is_type_rejection(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. }
                | Self::GenericArityMismatch { .. }
                | Self::GenericArgumentMismatch { .. }
        )
    }

    /// Returns true if this error indicates unusable wire input.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}
