/*
[INPUT]:  Client id and secret supplied by the caller
[OUTPUT]: Validated, immutable credentials
[POS]:    Auth layer - credential value type
[UPDATE]: When credential sources or validation rules change
*/

use std::fmt;

use crate::http::{DeribitError, Result};

/// API client credentials for the `client_credentials` grant
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Both values must contain something besides whitespace; they are
    /// stored exactly as given
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.trim().is_empty() {
            return Err(DeribitError::Config("client id is empty".to_string()));
        }
        if client_secret.trim().is_empty() {
            return Err(DeribitError::Config("client secret is empty".to_string()));
        }

        Ok(Self {
            client_id,
            client_secret,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
