//! JSON-RPC 2.0 request envelope
//!
//! Validates an arbitrary inbound JSON value against the request shape.
//! The accept/reject decision is final: a rejected value never reaches a
//! handler, and no validation detail is serialized back to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Protocol version tag required on every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id: a JSON number or string, echoed verbatim in the response.
///
/// Booleans, null, objects and arrays are not valid ids; the untagged
/// representation rejects them at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(serde_json::Number),
    String(String),
}

impl From<i64> for RpcId {
    fn from(n: i64) -> Self {
        RpcId::Number(n.into())
    }
}

impl From<&str> for RpcId {
    fn from(s: &str) -> Self {
        RpcId::String(s.to_string())
    }
}

impl std::fmt::Display for RpcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RpcId::Number(n) => write!(f, "{}", n),
            RpcId::String(s) => write!(f, "{}", s),
        }
    }
}

/// A validated JSON-RPC 2.0 request.
///
/// Unknown extra fields are ignored. `params` defaults to an empty
/// sequence when absent. `method` only has to be a string: an unmatched
/// name (empty included) resolves to the registry fallback, it is not an
/// envelope error.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    pub id: RpcId,
    jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

/// Why an inbound value failed envelope validation.
///
/// Logged at warn level by the dispatcher; never exposed on the wire.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("malformed request envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported protocol version: {0:?}")]
    Version(String),
}

impl RpcRequest {
    /// Validate `raw` against the request shape.
    pub fn parse(raw: Value) -> Result<Self, EnvelopeError> {
        let req: Self = serde_json::from_value(raw)?;
        if req.jsonrpc != JSONRPC_VERSION {
            return Err(EnvelopeError::Version(req.jsonrpc));
        }
        Ok(req)
    }
}
