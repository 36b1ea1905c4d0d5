//! End-to-end scenarios over generated-style bindings.
//!
//! These fixtures mirror what a binding generator emits for the Sui
//! framework's `Coin`/`Balance`/`UID` structs, then exercise every decode
//! path against them.

use serde_json::json;
use sui_reified::{
    Address, FieldRecord, MoveStruct, MoveStructLayout, MoveTypeLayout, MoveValue, ParsedData,
    Reified, ReifiedError, ReifiedResult, StructTag, TypeTag,
};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Id {
    pub bytes: Address,
}

impl MoveStruct for Id {
    const TYPE_NAME: &'static str = "0x2::object::ID";
    const TYPE_PARAMS: usize = 0;

    fn reified(type_args: Vec<TypeTag>) -> ReifiedResult<Reified<Self>> {
        Reified::new(
            Self::TYPE_NAME,
            Self::TYPE_PARAMS,
            type_args,
            MoveStructLayout::new("ID", [("bytes", MoveTypeLayout::Address)]),
            |_, fields| {
                Ok(Self {
                    bytes: fields.expect_field("bytes")?.as_address()?,
                })
            },
        )
    }

    fn struct_tag(&self) -> ReifiedResult<StructTag> {
        Self::TYPE_NAME.parse()
    }

    fn to_field_record(&self) -> FieldRecord {
        FieldRecord::new().with_field("bytes", MoveValue::Address(self.bytes))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Uid {
    pub id: Id,
}

impl MoveStruct for Uid {
    const TYPE_NAME: &'static str = "0x2::object::UID";
    const TYPE_PARAMS: usize = 0;

    fn reified(type_args: Vec<TypeTag>) -> ReifiedResult<Reified<Self>> {
        let id = Id::reified(vec![])?;
        Reified::new(
            Self::TYPE_NAME,
            Self::TYPE_PARAMS,
            type_args,
            MoveStructLayout::new(
                "UID",
                [("id", MoveTypeLayout::Struct(id.layout().clone()))],
            ),
            |_, fields| {
                Ok(Self {
                    id: Id::reified(vec![])?.from_value(fields.expect_field("id")?)?,
                })
            },
        )
    }

    fn struct_tag(&self) -> ReifiedResult<StructTag> {
        Self::TYPE_NAME.parse()
    }

    fn to_field_record(&self) -> FieldRecord {
        FieldRecord::new().with_field("id", MoveValue::Struct(self.id.to_field_record()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Balance {
    pub type_arg: TypeTag,
    pub value: u64,
}

impl MoveStruct for Balance {
    const TYPE_NAME: &'static str = "0x2::balance::Balance";
    const TYPE_PARAMS: usize = 1;

    fn reified(type_args: Vec<TypeTag>) -> ReifiedResult<Reified<Self>> {
        Reified::new(
            Self::TYPE_NAME,
            Self::TYPE_PARAMS,
            type_args,
            MoveStructLayout::new("Balance", [("value", MoveTypeLayout::U64)]),
            |tag, fields| {
                let type_arg = tag.type_params.first().cloned().ok_or(
                    ReifiedError::GenericArityMismatch {
                        expected: 1,
                        actual: 0,
                    },
                )?;
                Ok(Self {
                    type_arg,
                    value: fields.expect_field("value")?.as_u64()?,
                })
            },
        )
    }

    fn struct_tag(&self) -> ReifiedResult<StructTag> {
        let base: StructTag = Self::TYPE_NAME.parse()?;
        Ok(base.with_type_params(vec![self.type_arg.clone()]))
    }

    fn to_field_record(&self) -> FieldRecord {
        FieldRecord::new().with_field("value", MoveValue::U64(self.value))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Coin {
    pub type_arg: TypeTag,
    pub id: Uid,
    pub balance: Balance,
}

impl MoveStruct for Coin {
    const TYPE_NAME: &'static str = "0x2::coin::Coin";
    const TYPE_PARAMS: usize = 1;

    fn reified(type_args: Vec<TypeTag>) -> ReifiedResult<Reified<Self>> {
        let uid = Uid::reified(vec![])?;
        let balance = Balance::reified(type_args.clone())?;
        Reified::new(
            Self::TYPE_NAME,
            Self::TYPE_PARAMS,
            type_args,
            MoveStructLayout::new(
                "Coin",
                [
                    ("id", MoveTypeLayout::Struct(uid.layout().clone())),
                    ("balance", MoveTypeLayout::Struct(balance.layout().clone())),
                ],
            ),
            |tag, fields| {
                let type_arg = tag.type_params.first().cloned().ok_or(
                    ReifiedError::GenericArityMismatch {
                        expected: 1,
                        actual: 0,
                    },
                )?;
                Ok(Self {
                    id: Uid::reified(vec![])?.from_value(fields.expect_field("id")?)?,
                    balance: Balance::reified(vec![type_arg.clone()])?
                        .from_value(fields.expect_field("balance")?)?,
                    type_arg,
                })
            },
        )
    }

    fn struct_tag(&self) -> ReifiedResult<StructTag> {
        let base: StructTag = Self::TYPE_NAME.parse()?;
        Ok(base.with_type_params(vec![self.type_arg.clone()]))
    }

    fn to_field_record(&self) -> FieldRecord {
        FieldRecord::new()
            .with_field("id", MoveValue::Struct(self.id.to_field_record()))
            .with_field("balance", MoveValue::Struct(self.balance.to_field_record()))
    }
}

fn sui() -> TypeTag {
    "0x2::sui::SUI".parse().unwrap()
}

fn object_id() -> Address {
    Address::from_hex("0x5fc2c234b9d67de07d6709cbd72a37a0fa5cd56a856b5c9a11eaf6f1b3fbc63a")
        .unwrap()
}

fn sample_coin() -> Coin {
    Coin::reified(vec![sui()])
        .unwrap()
        .from_fields(
            FieldRecord::new()
                .with_field(
                    "id",
                    MoveValue::Struct(FieldRecord::new().with_field(
                        "id",
                        MoveValue::Struct(
                            FieldRecord::new()
                                .with_field("bytes", MoveValue::Address(object_id())),
                        ),
                    )),
                )
                .with_field(
                    "balance",
                    MoveValue::Struct(FieldRecord::new().with_field("value", MoveValue::U64(1000))),
                ),
        )
        .unwrap()
}

#[test]
fn full_type_name_renders_nested_generics() {
    let balance_of_sui: TypeTag = "0x2::balance::Balance<0x2::sui::SUI>".parse().unwrap();
    let reified = Coin::reified(vec![balance_of_sui]).unwrap();
    assert_eq!(
        reified.full_type_name(),
        "0x2::coin::Coin<0x2::balance::Balance<0x2::sui::SUI>>"
    );
}

#[test]
fn reified_requires_exactly_one_argument() {
    let err = Coin::reified(vec![]).unwrap_err();
    assert!(matches!(err, ReifiedError::GenericArityMismatch { .. }));

    let err = Coin::reified(vec![sui(), sui()]).unwrap_err();
    assert!(matches!(err, ReifiedError::GenericArityMismatch { .. }));
}

#[test]
fn bcs_bytes_are_id_then_little_endian_balance() {
    let reified = Coin::reified(vec![sui()]).unwrap();
    let coin = sample_coin();

    let bytes = reified.to_bcs(&coin).unwrap();
    assert_eq!(bytes.len(), 40);
    assert_eq!(&bytes[..32], object_id().as_bytes());
    assert_eq!(&bytes[32..], &[0xe8, 0x03, 0, 0, 0, 0, 0, 0]);

    // decode(encode(v)) == v
    assert_eq!(reified.from_bcs(&bytes).unwrap(), coin);
    // encode(decode(bytes)) == bytes
    let again = reified.to_bcs(&reified.from_bcs(&bytes).unwrap()).unwrap();
    assert_eq!(again, bytes);
}

fn coin_object_json() -> serde_json::Value {
    json!({
        "dataType": "moveObject",
        "type": "0x2::coin::Coin<0x2::sui::SUI>",
        "hasPublicTransfer": true,
        "fields": {
            "balance": "1000",
            "id": { "id": object_id().to_hex() }
        }
    })
}

#[test]
fn node_object_decodes_against_matching_descriptor() {
    let content: ParsedData = serde_json::from_value(coin_object_json()).unwrap();
    let coin = Coin::reified(vec![sui()])
        .unwrap()
        .from_object(&content)
        .unwrap();
    assert_eq!(coin, sample_coin());
    assert_eq!(coin.balance.value, 1000);
    assert_eq!(coin.id.id.bytes, object_id());
}

#[test]
fn node_object_long_address_spelling_still_matches() {
    let mut payload = coin_object_json();
    payload["type"] = json!(
        "0x0000000000000000000000000000000000000000000000000000000000000002::coin::Coin<0x2::sui::SUI>"
    );
    let content: ParsedData = serde_json::from_value(payload).unwrap();
    assert!(
        Coin::reified(vec![sui()])
            .unwrap()
            .from_object(&content)
            .is_ok()
    );
}

#[test]
fn node_object_rejects_other_type_argument() {
    let other: TypeTag = "0x9::token::TOKEN".parse().unwrap();
    let content: ParsedData = serde_json::from_value(coin_object_json()).unwrap();
    let err = Coin::reified(vec![other])
        .unwrap()
        .from_object(&content)
        .unwrap_err();
    assert!(err.is_type_rejection());
}

#[test]
fn node_object_rejects_other_struct_with_same_layout() {
    let mut payload = coin_object_json();
    payload["type"] = json!("0x9::wrapped::Wrapped<0x2::sui::SUI>");
    let content: ParsedData = serde_json::from_value(payload).unwrap();
    let err = Coin::reified(vec![sui()])
        .unwrap()
        .from_object(&content)
        .unwrap_err();
    assert!(matches!(err, ReifiedError::TypeMismatch { .. }));
}

#[test]
fn node_object_rejects_missing_generic_argument() {
    let mut payload = coin_object_json();
    payload["type"] = json!("0x2::coin::Coin");
    let content: ParsedData = serde_json::from_value(payload).unwrap();
    let err = Coin::reified(vec![sui()])
        .unwrap()
        .from_object(&content)
        .unwrap_err();
    assert!(matches!(err, ReifiedError::GenericArityMismatch { .. }));
}

#[test]
fn plain_json_round_trip() {
    let coin = sample_coin();
    let rendered = coin.to_json().unwrap();

    assert_eq!(rendered["$typeName"], json!("0x2::coin::Coin"));
    assert_eq!(rendered["$typeArgs"], json!(["0x2::sui::SUI"]));
    assert_eq!(rendered["balance"]["value"], json!("1000"));
    assert_eq!(rendered["id"]["id"]["bytes"], json!(object_id().to_hex()));

    let decoded = Coin::reified(vec![sui()])
        .unwrap()
        .from_json(&rendered)
        .unwrap();
    assert_eq!(decoded, coin);
}

#[test]
fn plain_json_rejects_wrong_type_argument() {
    let rendered = sample_coin().to_json().unwrap();
    let other: TypeTag = "0x9::token::TOKEN".parse().unwrap();
    let err = Coin::reified(vec![other])
        .unwrap()
        .from_json(&rendered)
        .unwrap_err();
    assert!(matches!(err, ReifiedError::GenericArgumentMismatch { .. }));
}

#[test]
fn truncated_bcs_fails_atomically() {
    let reified = Coin::reified(vec![sui()]).unwrap();
    let bytes = reified.to_bcs(&sample_coin()).unwrap();
    let err = reified.from_bcs(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(err.is_malformed());
}
