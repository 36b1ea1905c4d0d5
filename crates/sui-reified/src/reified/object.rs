//! Parsed-object content from a node query.

use serde::{Deserialize, Serialize};

/// Parsed content of an on-chain object, as reported by a node query.
///
/// The `dataType` discriminator distinguishes Move objects, which can be
/// decoded against a reified descriptor, from other content kinds.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "dataType")]
pub enum ParsedData {
    /// A Move object: a tagged type string plus its field values.
    #[serde(rename = "moveObject")]
    MoveObject(MoveObjectContent),
    /// A published package.
    #[serde(rename = "package")]
    Package(PackageContent),
}

/// The content of a Move object.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveObjectContent {
    /// The fully-applied on-chain type string.
    #[serde(rename = "type")]
    pub object_type: String,
    /// Whether the object can be transferred outside its module.
    #[serde(default)]
    pub has_public_transfer: bool,
    /// The object's field values, in the node's JSON rendering.
    pub fields: serde_json::Value,
}

/// The content of a published package.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageContent {
    /// Disassembled module listing, when the node provides one.
    #[serde(default)]
    pub disassembled: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_object_deserialization() {
        let content: ParsedData = serde_json::from_value(json!({
            "dataType": "moveObject",
            "type": "0x2::coin::Coin<0x2::sui::SUI>",
            "hasPublicTransfer": true,
            "fields": {
                "balance": "779387",
                "id": { "id": "0x2" }
            }
        }))
        .unwrap();

        match content {
            ParsedData::MoveObject(obj) => {
                assert_eq!(obj.object_type, "0x2::coin::Coin<0x2::sui::SUI>");
                assert!(obj.has_public_transfer);
                assert_eq!(obj.fields["balance"], json!("779387"));
            }
            ParsedData::Package(_) => panic!("expected a Move object"),
        }
    }

    #[test]
    fn test_package_deserialization() {
        let content: ParsedData = serde_json::from_value(json!({
            "dataType": "package",
            "disassembled": { "coin": "module coin { ... }" }
        }))
        .unwrap();
        assert!(matches!(content, ParsedData::Package(_)));
    }

    #[test]
    fn test_unknown_data_type_rejected() {
        let result: Result<ParsedData, _> = serde_json::from_value(json!({
            "dataType": "somethingElse"
        }));
        assert!(result.is_err());
    }
}
