/*
[INPUT]:  CLI flags and environment (CLIENT_ID, CLIENT_SECRET, DERIBIT_BASE_URL)
[OUTPUT]: Validated session configuration
[POS]:    Configuration layer - session setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, Result, bail};
use deribit_adapter::{ClientConfig, Credentials, TESTNET_BASE_URL};

/// Everything the driver needs before touching the network
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// API host, e.g. https://test.deribit.com
    pub base_url: String,
    /// Overall request timeout
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            base_url: TESTNET_BASE_URL.to_string(),
            timeout: client.timeout,
            connect_timeout: client.connect_timeout,
            client_id: None,
            client_secret: None,
        }
    }
}

impl SessionConfig {
    /// Credentials, or an error naming what is missing
    pub fn credentials(&self) -> Result<Credentials> {
        let missing: Vec<&str> = [
            ("CLIENT_ID", &self.client_id),
            ("CLIENT_SECRET", &self.client_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            bail!("missing credentials: {} not set", missing.join(", "));
        }

        let client_id = self.client_id.clone().unwrap_or_default();
        let client_secret = self.client_secret.clone().unwrap_or_default();
        Credentials::new(client_id, client_secret).context("invalid credentials")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            ..ClientConfig::default()
        }
    }
}
