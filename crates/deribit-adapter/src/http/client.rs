/*
[INPUT]:  HTTP configuration (base URL, timeouts), transport
[OUTPUT]: Configured client that runs encode -> send -> decode per call
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::AccessToken;
use crate::http::{HttpTransport, Result, Transport};
use crate::rpc::{self, RpcMethod};

/// Base URLs for the Deribit API
pub const TESTNET_BASE_URL: &str = "https://test.deribit.com";
pub const MAINNET_BASE_URL: &str = "https://www.deribit.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Main client for the Deribit JSON-RPC API
///
/// Holds no session state besides the request id counter; the access token
/// is passed into each call.
#[derive(Debug)]
pub struct DeribitClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    next_id: AtomicU64,
}

impl DeribitClient {
    /// Create a testnet client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a testnet client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, TESTNET_BASE_URL)
    }

    /// Create a client against an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(base_url, transport)
    }

    /// Create a client that sends through a caller-supplied transport
    pub fn with_transport(base_url: &str, transport: impl Transport + 'static) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(transport),
            base_url: Url::parse(base_url)?,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for a method endpoint
    fn endpoint_url(&self, method: RpcMethod) -> Result<Url> {
        Ok(self.base_url.join(&method.path())?)
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// One JSON-RPC round trip, returning the decoded `result`
    ///
    /// The bearer header is attached only for a non-empty token; the token
    /// is otherwise not inspected.
    pub async fn call<P>(
        &self,
        method: RpcMethod,
        params: &P,
        token: Option<&AccessToken>,
    ) -> Result<Value>
    where
        P: Serialize + Sync + ?Sized,
    {
        let id = self.next_id();
        let url = self.endpoint_url(method)?;
        let body = rpc::encode(method.as_str(), params, id)?;

        let authorized = token.is_some_and(|t| !t.is_empty());
        if method.is_private() && !authorized {
            warn!(%method, id, "private method sent without a bearer token");
        }
        debug!(%method, id, %url, authorized, "sending request");
        let raw = self.transport.send(&url, body, token).await?;
        let result = rpc::decode(&raw);

        match &result {
            Ok(_) => debug!(%method, id, "request succeeded"),
            Err(err) => debug!(%method, id, error = %err, "request returned error"),
        }
        result
    }
}
