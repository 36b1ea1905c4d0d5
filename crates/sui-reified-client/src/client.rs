//! Node RPC client for fetching on-chain objects.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::response::{ObjectData, ObjectResponse, RpcResponse};
use reqwest::Client;
use sui_reified::{Address, MoveStruct, Reified, ReifiedError};
use url::Url;

/// Client for fetching objects from a node's JSON-RPC API.
///
/// The client is a plain capability handle: it owns only its HTTP connection
/// and endpoint configuration and is passed explicitly wherever a fetch is
/// needed. Each call issues exactly one request and surfaces any failure
/// immediately; retry policy, if wanted, belongs to the caller.
///
/// # Example
///
/// ```rust,no_run
/// use sui_reified_client::{ClientConfig, ObjectClient};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = ObjectClient::new(ClientConfig::testnet())?;
/// let id = "0x5fc2c234b9d67de07d6709cbd72a37a0fa5cd56a856b5c9a11eaf6f1b3fbc63a".parse()?;
/// let object = client.get_object(id).await?;
/// println!("version: {:?}", object.version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ObjectClient {
    config: ClientConfig,
    client: Client,
}

impl ObjectClient {
    /// Creates a new client.
    ///
    /// TLS certificate validation uses `reqwest` defaults; all public Sui
    /// endpoints serve HTTPS with valid certificates.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::Http)?;
        Ok(Self { config, client })
    }

    /// Creates a client from an existing `reqwest::Client`, for callers that
    /// manage their own connection settings.
    pub fn from_client(client: Client, config: ClientConfig) -> Self {
        Self { config, client }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the RPC endpoint URL.
    pub fn rpc_url(&self) -> &Url {
        self.config.rpc_url()
    }

    /// Fetches an object by id, asking the node for parsed content.
    ///
    /// # Errors
    ///
    /// `Rpc` for transport-level and RPC-level failures, `NotFound` when the
    /// id does not resolve (`notExists`/`deleted`), `Object` for any other
    /// object-level error.
    pub async fn get_object(&self, id: Address) -> ClientResult<ObjectData> {
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "sui_getObject",
            "params": [id.to_hex(), { "showContent": true }],
        });

        let response = self
            .client
            .post(self.config.rpc_url().clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rpc {
                code: i64::from(status.as_u16()),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let envelope: RpcResponse<ObjectResponse> = response.json().await?;
        if let Some(error) = envelope.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        let result = envelope.result.ok_or_else(|| ClientError::Rpc {
            code: 0,
            message: "response carried neither result nor error".to_string(),
        })?;

        if let Some(error) = result.error {
            let object_id = error.object_id.unwrap_or_else(|| id.to_hex());
            return Err(match error.code.as_str() {
                "notExists" | "deleted" => ClientError::NotFound(object_id),
                _ => ClientError::Object {
                    code: error.code,
                    object_id,
                },
            });
        }

        result.data.ok_or_else(|| ClientError::NotFound(id.to_hex()))
    }

    /// Fetches an object and decodes it against a reified descriptor.
    ///
    /// The on-chain type is validated against the descriptor before any
    /// field is accepted; a type or generic-argument mismatch surfaces as a
    /// [`ClientError::Decode`].
    pub async fn fetch<T: MoveStruct>(
        &self,
        reified: &Reified<T>,
        id: Address,
    ) -> ClientResult<T> {
        let object = self.get_object(id).await?;
        let content = object.content.ok_or_else(|| {
            ClientError::Decode(ReifiedError::schema(format!(
                "object {} carried no parsed content",
                id.to_hex()
            )))
        })?;
        Ok(reified.from_object(&content)?)
    }
}
