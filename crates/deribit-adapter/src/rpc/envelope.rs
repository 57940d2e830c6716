/*
[INPUT]:  Method name, params struct, request id / raw response body
[OUTPUT]: JSON-RPC 2.0 request string / result value or typed failure
[POS]:    RPC layer - envelope codec
[UPDATE]: When the envelope shape or response validation changes
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::{DeribitError, Result, RpcError};

pub const JSONRPC_VERSION: &str = "2.0";

/// Outgoing JSON-RPC request
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a, P: ?Sized> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a P,
}

/// Serialize a request envelope; the returned string is sent as-is
pub fn encode<P>(method: &str, params: &P, id: u64) -> Result<String>
where
    P: Serialize + ?Sized,
{
    let envelope = RequestEnvelope {
        jsonrpc: JSONRPC_VERSION,
        id,
        method,
        params,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Decode a response body into its `result` value
///
/// Exactly one of `result` / `error` must be present. An `error` member is
/// returned as [`DeribitError::Rpc`]; anything else malformed is
/// [`DeribitError::Decode`] carrying the raw body.
pub fn decode(raw: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|e| DeribitError::decode(format!("invalid JSON: {e}"), raw))?;

    let Value::Object(mut fields) = parsed else {
        return Err(DeribitError::decode("response is not a JSON object", raw));
    };

    match (fields.remove("result"), fields.remove("error")) {
        (Some(result), None) => Ok(result),
        (None, Some(error)) => {
            let error: RpcError = serde_json::from_value(error)
                .map_err(|e| DeribitError::decode(format!("malformed error object: {e}"), raw))?;
            Err(DeribitError::Rpc(error))
        }
        (Some(_), Some(_)) => Err(DeribitError::decode("both result and error present", raw)),
        (None, None) => Err(DeribitError::decode("neither result nor error present", raw)),
    }
}
