//! Fetches a `Coin<SUI>` object from testnet and prints its JSON rendering.
//!
//! Usage: `fetch_coin <object-id>`

use anyhow::{Context, Result};
use examples::coin::{Coin, SUI};
use sui_reified::{Address, MoveStruct, TypeTag};
use sui_reified_client::{ClientConfig, ObjectClient};

#[tokio::main]
async fn main() -> Result<()> {
    let id: Address = std::env::args()
        .nth(1)
        .context("usage: fetch_coin <object-id>")?
        .parse()?;

    let client = ObjectClient::new(ClientConfig::testnet())?;
    let sui: TypeTag = SUI.parse()?;
    let reified = Coin::reified(vec![sui])?;

    let coin = client.fetch(&reified, id).await?;
    println!(
        "fetched {} with balance {}",
        reified.full_type_name(),
        coin.balance().value()
    );
    println!("{}", serde_json::to_string_pretty(&coin.to_json()?)?);
    Ok(())
}
