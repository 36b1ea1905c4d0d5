//! Network configuration for the node client.
//!
//! This module provides configuration options for connecting to different
//! Sui networks (mainnet, testnet, devnet) or custom endpoints.

use std::time::Duration;
use url::Url;

/// Configuration for the node client.
///
/// Use one of the preset constructors like [`ClientConfig::mainnet()`] or
/// [`ClientConfig::testnet()`], or point at a custom endpoint with
/// [`ClientConfig::custom()`].
///
/// # Example
///
/// ```rust
/// use sui_reified_client::ClientConfig;
///
/// let config = ClientConfig::testnet()
///     .with_timeout(std::time::Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    network: Network,
    rpc_url: Url,
    timeout: Duration,
}

/// Known Sui networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Sui mainnet
    Mainnet,
    /// Sui testnet
    Testnet,
    /// Sui devnet
    Devnet,
    /// Local development network
    Local,
    /// Custom network
    Custom,
}

impl Network {
    /// Returns the network name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Local => "local",
            Network::Custom => "custom",
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::devnet()
    }
}

impl ClientConfig {
    /// Creates a configuration for Sui mainnet.
    pub fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            rpc_url: Url::parse("https://fullnode.mainnet.sui.io:443").expect("valid mainnet URL"),
            timeout: Duration::from_secs(30),
        }
    }

    /// Creates a configuration for Sui testnet.
    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            rpc_url: Url::parse("https://fullnode.testnet.sui.io:443").expect("valid testnet URL"),
            timeout: Duration::from_secs(30),
        }
    }

    /// Creates a configuration for Sui devnet.
    pub fn devnet() -> Self {
        Self {
            network: Network::Devnet,
            rpc_url: Url::parse("https://fullnode.devnet.sui.io:443").expect("valid devnet URL"),
            timeout: Duration::from_secs(30),
        }
    }

    /// Creates a configuration for a local development network on the
    /// default port.
    pub fn local() -> Self {
        Self {
            network: Network::Local,
            rpc_url: Url::parse("http://127.0.0.1:9000").expect("valid local URL"),
            timeout: Duration::from_secs(10),
        }
    }

    /// Creates a custom configuration with the specified RPC URL.
    pub fn custom(rpc_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            network: Network::Custom,
            rpc_url: Url::parse(rpc_url)?,
            timeout: Duration::from_secs(30),
        })
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the network this config is for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns the RPC URL.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_config() {
        let config = ClientConfig::mainnet();
        assert_eq!(config.network(), Network::Mainnet);
        assert!(config.rpc_url().as_str().contains("mainnet"));
    }

    #[test]
    fn test_testnet_config() {
        let config = ClientConfig::testnet();
        assert_eq!(config.network(), Network::Testnet);
        assert!(config.rpc_url().as_str().contains("testnet"));
    }

    #[test]
    fn test_local_config() {
        let config = ClientConfig::local();
        assert_eq!(config.network(), Network::Local);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_custom_config() {
        let config = ClientConfig::custom("https://my-node.example.com").unwrap();
        assert_eq!(config.network(), Network::Custom);
        assert_eq!(config.rpc_url().as_str(), "https://my-node.example.com/");

        assert!(ClientConfig::custom("not a url").is_err());
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::testnet().with_timeout(Duration::from_secs(60));
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_network_names() {
        assert_eq!(Network::Mainnet.as_str(), "mainnet");
        assert_eq!(Network::Custom.as_str(), "custom");
    }
}
