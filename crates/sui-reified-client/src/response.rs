//! Serde models for the node's JSON-RPC responses.

use serde::Deserialize;
use sui_reified::ParsedData;

/// The JSON-RPC envelope around every response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    /// The successful result, when present.
    pub result: Option<T>,
    /// The RPC-level error, when present.
    pub error: Option<RpcErrorBody>,
}

/// A JSON-RPC error body.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorBody {
    /// The JSON-RPC error code.
    pub code: i64,
    /// The error message.
    pub message: String,
}

/// The result of an object query: either the object's data or an
/// object-level error such as `notExists`.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectResponse {
    /// The object data, when the object resolves.
    #[serde(default)]
    pub data: Option<ObjectData>,
    /// The object-level error, when it does not.
    #[serde(default)]
    pub error: Option<ObjectResponseError>,
}

/// A resolved on-chain object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    /// The object id.
    pub object_id: String,
    /// The object version.
    #[serde(default)]
    pub version: Option<String>,
    /// The object digest.
    #[serde(default)]
    pub digest: Option<String>,
    /// The parsed content, when the query asked for it.
    #[serde(default)]
    pub content: Option<ParsedData>,
}

/// An object-level error reported by the node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectResponseError {
    /// The error code (`notExists`, `deleted`, ...).
    pub code: String,
    /// The object the error refers to, when reported.
    #[serde(default)]
    pub object_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_found_object_response() {
        let envelope: RpcResponse<ObjectResponse> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "data": {
                    "objectId": "0x5fc2c234b9d67de07d6709cbd72a37a0fa5cd56a856b5c9a11eaf6f1b3fbc63a",
                    "version": "13488",
                    "digest": "FzbVbsrY7jZ77kN6nH9UhE9DBXPhKjVqDgM61xcCfeNS",
                    "content": {
                        "dataType": "moveObject",
                        "type": "0x2::coin::Coin<0x2::sui::SUI>",
                        "hasPublicTransfer": true,
                        "fields": {
                            "balance": "779387",
                            "id": { "id": "0x5fc2c234b9d67de07d6709cbd72a37a0fa5cd56a856b5c9a11eaf6f1b3fbc63a" }
                        }
                    }
                }
            }
        }))
        .unwrap();

        assert!(envelope.error.is_none());
        let data = envelope.result.unwrap().data.unwrap();
        assert_eq!(data.version.as_deref(), Some("13488"));
        assert!(matches!(data.content, Some(ParsedData::MoveObject(_))));
    }

    #[test]
    fn test_not_exists_response() {
        let envelope: RpcResponse<ObjectResponse> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "error": { "code": "notExists", "objectId": "0x9" }
            }
        }))
        .unwrap();

        let result = envelope.result.unwrap();
        assert!(result.data.is_none());
        let error = result.error.unwrap();
        assert_eq!(error.code, "notExists");
        assert_eq!(error.object_id.as_deref(), Some("0x9"));
    }

    #[test]
    fn test_rpc_error_response() {
        let envelope: RpcResponse<ObjectResponse> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "Invalid params" }
        }))
        .unwrap();

        assert!(envelope.result.is_none());
        let error = envelope.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Invalid params");
    }

    #[test]
    fn test_package_content_response() {
        let envelope: RpcResponse<ObjectResponse> = serde_json::from_value(json!({
            "result": {
                "data": {
                    "objectId": "0x2",
                    "content": { "dataType": "package", "disassembled": {} }
                }
            }
        }))
        .unwrap();

        let data = envelope.result.unwrap().data.unwrap();
        assert!(matches!(data.content, Some(ParsedData::Package(_))));
    }
}
