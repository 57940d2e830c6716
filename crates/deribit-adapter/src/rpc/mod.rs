/*
[INPUT]:  Method names, typed params, raw response bodies
[OUTPUT]: Serialized JSON-RPC requests and decoded results
[POS]:    RPC layer - envelope codec shared by every endpoint
[UPDATE]: When adding exchange methods or changing envelope handling
*/

pub mod envelope;
pub mod method;

pub use envelope::{decode, encode, RequestEnvelope, JSONRPC_VERSION};
pub use method::RpcMethod;
