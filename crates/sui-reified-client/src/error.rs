//! Error types for the node client.

use sui_reified::ReifiedError;
use thiserror::Error;

/// A specialized Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// The error type for node-client operations.
///
/// Failures surface immediately to the caller; the client performs no
/// retries and no backoff.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Error occurred during HTTP communication.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error occurred during JSON serialization/deserialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during URL parsing.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The node reported a JSON-RPC error.
    #[error("RPC error ({code}): {message}")]
    Rpc {
        /// The JSON-RPC error code.
        code: i64,
        /// The error message from the node.
        message: String,
    },

    /// The queried object id does not resolve.
    #[error("object not found: {0}")]
    NotFound(String),

    /// The node reported an object-level error other than absence.
    #[error("object error ({code}): {object_id}")]
    Object {
        /// The object error code reported by the node.
        code: String,
        /// The object the error refers to.
        object_id: String,
    },

    /// The fetched content failed to decode as the expected type.
    #[error("decode error: {0}")]
    Decode(#[from] ReifiedError),
}

impl ClientError {
    /// Returns true if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_display() {
        let err = ClientError::Rpc {
            code: -32602,
            message: "invalid params".to_string(),
        };
        assert!(err.to_string().contains("-32602"));
        assert!(err.to_string().contains("invalid params"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(ClientError::NotFound("0x1".to_string()).is_not_found());
        assert!(
            !ClientError::Rpc {
                code: 0,
                message: String::new()
            }
            .is_not_found()
        );
    }

    #[test]
    fn test_decode_error_conversion() {
        let err: ClientError = ReifiedError::malformed("truncated").into();
        assert!(matches!(err, ClientError::Decode(_)));
        assert!(err.to_string().contains("truncated"));
    }
}
