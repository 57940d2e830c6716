/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Deribit adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod rpc;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{AccessToken, AuthGrant, Authenticator, Credentials, DEFAULT_SCOPE};

// Re-export commonly used types from http
pub use http::{
    AuthFailure,
    ClientConfig,
    DeribitClient,
    DeribitError,
    HttpTransport,
    MAINNET_BASE_URL,
    ProjectionFault,
    Result,
    RpcError,
    TESTNET_BASE_URL,
    Transport,
};

pub use rpc::RpcMethod;

// Re-export all types
pub use types::*;
