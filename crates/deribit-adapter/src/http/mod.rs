/*
[INPUT]:  HTTP client configuration and exchange methods
[OUTPUT]: HTTP round trips and typed API results
[POS]:    HTTP layer - JSON-RPC over HTTPS communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod trade;
pub mod transport;
pub mod user;

pub use error::{AuthFailure, DeribitError, ProjectionFault, Result, RpcError};
pub use transport::{HttpTransport, Transport};

pub use client::{ClientConfig, DeribitClient, MAINNET_BASE_URL, TESTNET_BASE_URL};
