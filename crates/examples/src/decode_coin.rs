//! Offline demonstration: build a `Coin<SUI>` through its reified factory,
//! encode it to wire bytes, decode it back, and print both renderings.

use anyhow::Result;
use examples::coin::{Coin, SUI};
use sui_reified::{Address, FieldRecord, MoveStruct, MoveValue, TypeTag};

fn main() -> Result<()> {
    let sui: TypeTag = SUI.parse()?;
    let reified = Coin::reified(vec![sui])?;

    let object_id =
        Address::from_hex("0x5fc2c234b9d67de07d6709cbd72a37a0fa5cd56a856b5c9a11eaf6f1b3fbc63a")?;
    let coin = reified.from_fields(
        FieldRecord::new()
            .with_field(
                "id",
                MoveValue::Struct(FieldRecord::new().with_field(
                    "id",
                    MoveValue::Struct(
                        FieldRecord::new().with_field("bytes", MoveValue::Address(object_id)),
                    ),
                )),
            )
            .with_field(
                "balance",
                MoveValue::Struct(FieldRecord::new().with_field("value", MoveValue::U64(1000))),
            ),
    )?;

    println!("type: {}", reified.full_type_name());

    let bytes = reified.to_bcs(&coin)?;
    println!("bcs:  {}", hex::encode(&bytes));

    let decoded = reified.from_bcs(&bytes)?;
    assert_eq!(decoded, coin);

    println!("json: {}", serde_json::to_string_pretty(&coin.to_json()?)?);
    Ok(())
}
