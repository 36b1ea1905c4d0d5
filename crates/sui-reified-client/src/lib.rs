//! # sui-reified-client
//!
//! The node-client collaborator for the [`sui_reified`] runtime: a thin
//! JSON-RPC client that fetches an object's parsed content and hands it to a
//! reified descriptor for validated decoding.
//!
//! The client issues one request per call with no retry, no backoff, and no
//! request coordination. It is always passed explicitly as a handle; the
//! codec runtime never owns network configuration.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sui_reified::{MoveStruct, TypeTag};
//! use sui_reified_client::{ClientConfig, ObjectClient};
//!
//! # async fn example<Coin: MoveStruct>() -> anyhow::Result<()> {
//! let client = ObjectClient::new(ClientConfig::mainnet())?;
//! let sui: TypeTag = "0x2::sui::SUI".parse()?;
//! let reified = Coin::reified(vec![sui])?;
//! let coin = client.fetch(&reified, "0x5fc2".parse()?).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::ObjectClient;
pub use config::{ClientConfig, Network};
pub use error::{ClientError, ClientResult};
pub use response::{ObjectData, ObjectResponse, ObjectResponseError, RpcErrorBody, RpcResponse};
