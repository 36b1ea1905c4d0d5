//! Bindings for `0x2::coin` and the framework structs it depends on,
//! written the way a binding generator emits them.
//!
//! Instances only come into being through the reified factory, so a value of
//! one of these types always went through a validated decode path.

use sui_reified::{
    Address, FieldRecord, MoveStruct, MoveStructLayout, MoveTypeLayout, MoveValue, Reified,
    ReifiedError, ReifiedResult, StructTag, TypeTag, compress_type,
};

/// The canonical type string of the SUI coin marker.
pub const SUI: &str = "0x2::sui::SUI";

/// Returns true if `type_str` names a `Coin` instantiation.
pub fn is_coin(type_str: &str) -> ReifiedResult<bool> {
    Ok(compress_type(type_str)?.starts_with("0x2::coin::Coin<"))
}

/// `0x2::object::ID`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Id {
    bytes: Address,
}

impl Id {
    /// The wrapped address.
    pub fn bytes(&self) -> Address {
        self.bytes
    }
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

/// `0x2::object::UID`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uid {
    id: Id,
}

impl Uid {
    /// The inner id.
    pub fn id(&self) -> &Id {
        &self.id
    }
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

/// `0x2::balance::Balance<phantom T>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Balance {
    type_arg: TypeTag,
    value: u64,
}

impl Balance {
    /// The resolved phantom type argument.
    pub fn type_arg(&self) -> &TypeTag {
        &self.type_arg
    }

    /// The balance value.
    pub fn value(&self) -> u64 {
        self.value
    }
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
                let type_arg =
                    tag.type_params
                        .first()
                        .cloned()
                        .ok_or(ReifiedError::GenericArityMismatch {
                            expected: 1,
                            actual: 0,
                        })?;
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

/// `0x2::coin::Coin<phantom T>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coin {
    type_arg: TypeTag,
    id: Uid,
    balance: Balance,
}

impl Coin {
    /// The resolved phantom type argument.
    pub fn type_arg(&self) -> &TypeTag {
        &self.type_arg
    }

    /// The object id.
    pub fn id(&self) -> &Uid {
        &self.id
    }

    /// The wrapped balance.
    pub fn balance(&self) -> &Balance {
        &self.balance
    }
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
                let type_arg =
                    tag.type_params
                        .first()
                        .cloned()
                        .ok_or(ReifiedError::GenericArityMismatch {
                            expected: 1,
                            actual: 0,
                        })?;
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
