/*
[INPUT]:  `public/auth` result values
[OUTPUT]: Bearer token and grant metadata
[POS]:    Auth layer - token value types
[UPDATE]: When the auth result shape changes
*/

use std::fmt;

use serde::Deserialize;

/// Opaque bearer token sent as `Authorization: Bearer <token>`
///
/// Expiry is not tracked; one token serves one session.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "AccessToken({prefix}...)")
    }
}

/// Full result of a successful `public/auth` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub access_token: AccessToken,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}

/// Optional grant metadata; `access_token` is checked separately
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GrantMetadata {
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}
