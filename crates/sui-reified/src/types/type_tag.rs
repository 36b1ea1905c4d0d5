//! Move type tags.
//!
//! [`TypeTag`] and [`StructTag`] are structural descriptors of on-chain
//! types. Equality is structural, so alternate hex spellings of the same
//! address compare equal; the canonical textual form (short-form addresses,
//! `Base<A1, A2>` generic application) is produced only at the boundary by
//! the `Display` implementations.

use crate::error::{ReifiedError, ReifiedResult};
use crate::types::{Address, Identifier};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{char, multispace0, satisfy};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A Move type: a primitive, a vector, or a struct instantiation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `bool`
    Bool,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `u256`
    U256,
    /// `address`
    Address,
    /// `signer` (never stored on chain; accepted for completeness)
    Signer,
    /// `vector<T>`
    Vector(Box<TypeTag>),
    /// A struct type, possibly with generic arguments applied.
    Struct(Box<StructTag>),
}

/// A fully-qualified struct type with applied generic arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructTag {
    /// The address of the defining package.
    pub address: Address,
    /// The module name.
    pub module: Identifier,
    /// The struct name.
    pub name: Identifier,
    /// The applied generic arguments, in declaration order.
    pub type_params: Vec<TypeTag>,
}

impl StructTag {
    /// Returns true if `other` names the same struct, ignoring generic
    /// arguments.
    pub fn same_struct(&self, other: &StructTag) -> bool {
        self.address == other.address && self.module == other.module && self.name == other.name
    }

    /// Returns a copy of this tag with the given generic arguments applied.
    pub fn with_type_params(mut self, type_params: Vec<TypeTag>) -> Self {
        self.type_params = type_params;
        self
    }

    /// Renders the unparametrized `address::module::name` form.
    pub fn base_name(&self) -> String {
        format!("{}::{}::{}", self.address, self.module, self.name)
    }

    /// Checks that `actual` is this exact type.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` when the struct name differs, `GenericArityMismatch`
    /// when the argument counts differ, `GenericArgumentMismatch` when an
    /// argument names a different type. A value tagged `Coin<X>` can never
    /// pass a check against `Coin<Y>`.
    pub fn check_matches(&self, actual: &StructTag) -> ReifiedResult<()> {
        if !self.same_struct(actual) {
            return Err(ReifiedError::type_mismatch(self, actual));
        }
        if self.type_params.len() != actual.type_params.len() {
            return Err(ReifiedError::GenericArityMismatch {
                expected: self.type_params.len(),
                actual: actual.type_params.len(),
            });
        }
        for (expected, found) in self.type_params.iter().zip(actual.type_params.iter()) {
            if expected != found {
                return Err(ReifiedError::generic_argument_mismatch(expected, found));
            }
        }
        Ok(())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U16 => write!(f, "u16"),
            TypeTag::U32 => write!(f, "u32"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::U128 => write!(f, "u128"),
            TypeTag::U256 => write!(f, "u256"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Signer => write!(f, "signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{inner}>"),
            TypeTag::Struct(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if !self.type_params.is_empty() {
            write!(f, "<")?;
            for (i, param) in self.type_params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{param}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

// === Parsing ===

fn identifier_part(input: &str) -> IResult<&str, &str> {
    recognize((
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))
    .parse(input)
}

fn move_identifier(input: &str) -> IResult<&str, Identifier> {
    map_res(identifier_part, Identifier::new).parse(input)
}

fn address_part(input: &str) -> IResult<&str, Address> {
    map_res(
        preceded(tag("0x"), take_while1(|c: char| c.is_ascii_hexdigit())),
        Address::from_hex,
    )
    .parse(input)
}

fn open_angle(input: &str) -> IResult<&str, ()> {
    value((), (multispace0, char('<'), multispace0)).parse(input)
}

fn close_angle(input: &str) -> IResult<&str, ()> {
    value((), (multispace0, char('>'))).parse(input)
}

fn comma_sep(input: &str) -> IResult<&str, ()> {
    value((), (multispace0, char(','), multispace0)).parse(input)
}

fn type_params(input: &str) -> IResult<&str, Vec<TypeTag>> {
    delimited(
        open_angle,
        separated_list1(comma_sep, type_tag_part),
        close_angle,
    )
    .parse(input)
}

fn struct_part(input: &str) -> IResult<&str, StructTag> {
    map(
        (
            address_part,
            tag("::"),
            move_identifier,
            tag("::"),
            move_identifier,
            opt(type_params),
        ),
        |(address, _, module, _, name, params)| StructTag {
            address,
            module,
            name,
            type_params: params.unwrap_or_default(),
        },
    )
    .parse(input)
}

fn vector_part(input: &str) -> IResult<&str, TypeTag> {
    map(
        preceded(
            tag("vector"),
            delimited(open_angle, type_tag_part, close_angle),
        ),
        |inner| TypeTag::Vector(Box::new(inner)),
    )
    .parse(input)
}

fn primitive_part(input: &str) -> IResult<&str, TypeTag> {
    alt((
        value(TypeTag::U256, tag("u256")),
        value(TypeTag::U128, tag("u128")),
        value(TypeTag::U16, tag("u16")),
        value(TypeTag::U32, tag("u32")),
        value(TypeTag::U64, tag("u64")),
        value(TypeTag::U8, tag("u8")),
        value(TypeTag::Bool, tag("bool")),
        value(TypeTag::Address, tag("address")),
        value(TypeTag::Signer, tag("signer")),
    ))
    .parse(input)
}

fn type_tag_part(input: &str) -> IResult<&str, TypeTag> {
    alt((
        vector_part,
        map(struct_part, |s| TypeTag::Struct(Box::new(s))),
        primitive_part,
    ))
    .parse(input)
}

impl FromStr for TypeTag {
    type Err = ReifiedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match all_consuming(delimited(multispace0, type_tag_part, multispace0)).parse(s) {
            Ok((_, parsed)) => Ok(parsed),
            Err(_) => Err(ReifiedError::InvalidTypeString(s.to_string())),
        }
    }
}

impl FromStr for StructTag {
    type Err = ReifiedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match all_consuming(delimited(multispace0, struct_part, multispace0)).parse(s) {
            Ok((_, parsed)) => Ok(parsed),
            Err(_) => Err(ReifiedError::InvalidTypeString(s.to_string())),
        }
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for StructTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for StructTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalizes a type string to its canonical spelling.
///
/// Every "is this the expected type" comparison in the runtime goes through
/// structural tags, which parse via this same grammar, so semantically
/// identical spellings (long-form addresses, extra whitespace) can never
/// produce a false negative. The function is idempotent.
///
/// # Example
///
/// ```rust
/// use sui_reified::types::compress_type;
///
/// let canonical = compress_type(
///     "0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI",
/// )
/// .unwrap();
/// assert_eq!(canonical, "0x2::sui::SUI");
/// ```
pub fn compress_type(s: &str) -> ReifiedResult<String> {
    Ok(s.parse::<TypeTag>()?.to_string())
}

/// Renders `base<arg1, arg2, ...>` for an unparametrized base type name.
///
/// # Errors
///
/// Fails when `base` does not parse as a struct type or already carries
/// generic arguments.
pub fn compose_type(base: &str, args: &[TypeTag]) -> ReifiedResult<String> {
    let parsed: StructTag = base.parse()?;
    if !parsed.type_params.is_empty() {
        return Err(ReifiedError::InvalidTypeString(format!(
            "base type already has generic arguments: {base}"
        )));
    }
    Ok(parsed.with_type_params(args.to_vec()).to_string())
}
