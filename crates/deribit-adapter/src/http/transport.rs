/*
[INPUT]:  Endpoint URL, serialized JSON body, optional bearer token
[OUTPUT]: Raw response body or transport failure
[POS]:    HTTP layer - single POST round trip
[UPDATE]: When changing headers, TLS or timeout handling
*/

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::auth::AccessToken;
use crate::http::{ClientConfig, DeribitError, Result};

/// One HTTP POST per call, body returned whatever the status
///
/// Implement this to route requests somewhere other than reqwest.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn send(&self, url: &Url, body: String, bearer: Option<&AccessToken>) -> Result<String>;
}

/// reqwest-backed transport; one connection pool shared by every call
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DeribitError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    fn transport_error(url: &Url, source: reqwest::Error) -> DeribitError {
        warn!(%url, timeout = source.is_timeout(), error = %source, "request failed");
        DeribitError::Transport {
            url: url.to_string(),
            source,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &Url, body: String, bearer: Option<&AccessToken>) -> Result<String> {
        let mut builder = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if let Some(token) = bearer.filter(|token| !token.is_empty()) {
            builder = builder.bearer_auth(token.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::transport_error(url, e))?;

        // Application errors arrive in the body, so the status is only logged.
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Self::transport_error(url, e))?;

        debug!(%url, status = status.as_u16(), bytes = text.len(), "response received");
        Ok(text)
    }
}
