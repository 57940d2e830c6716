/*
[INPUT]:  Client credentials
[OUTPUT]: Bearer access tokens and typed auth errors
[POS]:    Auth layer - handles Deribit client-credentials authentication
[UPDATE]: When auth flow or grant handling changes
*/

pub mod credentials;
pub mod manager;
pub mod token;

pub use credentials::Credentials;
pub use manager::{Authenticator, DEFAULT_SCOPE};
pub use token::{AccessToken, AuthGrant};
