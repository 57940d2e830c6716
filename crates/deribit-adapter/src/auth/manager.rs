/*
[INPUT]:  Client credentials and HTTP client
[OUTPUT]: Bearer access token (or the full grant)
[POS]:    Auth layer - client-credentials exchange via public/auth
[UPDATE]: When auth endpoints, scope or grant handling change
*/

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::http::{AuthFailure, DeribitClient, DeribitError, Result};
use crate::rpc::RpcMethod;
use crate::types::{AuthRequest, GrantType};

use super::token::GrantMetadata;
use super::{AccessToken, AuthGrant, Credentials};

/// Scope requested unless the caller overrides it
pub const DEFAULT_SCOPE: &str = "session:apiconsole-c5i26ds6dsr expires:2592000";

/// Exchanges client credentials for an access token
#[derive(Debug)]
pub struct Authenticator<'a> {
    client: &'a DeribitClient,
    scope: Option<String>,
}

impl<'a> Authenticator<'a> {
    /// Authenticator requesting [`DEFAULT_SCOPE`]
    pub fn new(client: &'a DeribitClient) -> Self {
        Self {
            client,
            scope: Some(DEFAULT_SCOPE.to_string()),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Let the exchange pick its default scope
    pub fn without_scope(mut self) -> Self {
        self.scope = None;
        self
    }

    /// Run `public/auth` and return only the token
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken> {
        Ok(self.grant(credentials).await?.access_token)
    }

    /// Run `public/auth` and return the full grant
    ///
    /// POST /api/v2/public/auth, sent without a bearer header
    pub async fn grant(&self, credentials: &Credentials) -> Result<AuthGrant> {
        let req = AuthRequest {
            grant_type: GrantType::ClientCredentials,
            scope: self.scope.clone(),
            client_id: credentials.client_id().to_string(),
            client_secret: credentials.client_secret().to_string(),
        };

        let result = self
            .client
            .call(RpcMethod::PublicAuth, &req, None)
            .await
            .map_err(|err| {
                let err = err.into_auth_failure();
                warn!(client_id = credentials.client_id(), error = %err, "authentication failed");
                err
            })?;

        let grant = grant_from_result(result)?;
        info!(
            client_id = credentials.client_id(),
            expires_in = grant.expires_in,
            scope = grant.scope.as_deref(),
            "authenticated"
        );
        Ok(grant)
    }
}

impl DeribitClient {
    /// Shorthand for `Authenticator::new(self).authenticate(credentials)`
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken> {
        Authenticator::new(self).authenticate(credentials).await
    }
}

fn grant_from_result(result: Value) -> Result<AuthGrant> {
    let access_token = result
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(AccessToken::new)
        .ok_or_else(|| {
            warn!("auth result carries no access_token");
            DeribitError::Auth {
                reason: AuthFailure::MissingAccessToken,
            }
        })?;

    // Grant metadata is informational; a malformed field leaves it unset.
    let metadata: GrantMetadata = serde_json::from_value(result).unwrap_or_else(|e| {
        debug!(error = %e, "ignoring malformed grant metadata");
        GrantMetadata::default()
    });

    Ok(AuthGrant {
        access_token,
        expires_in: metadata.expires_in,
        refresh_token: metadata.refresh_token,
        scope: metadata.scope,
        token_type: metadata.token_type,
    })
}
