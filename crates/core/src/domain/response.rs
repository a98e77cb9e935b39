//! JSON-RPC 2.0 response builders
//!
//! Pure functions producing the three core-owned error envelopes. Success
//! responses are built by the handlers themselves and pass through the
//! dispatcher untouched.

use crate::domain::envelope::{RpcId, JSONRPC_VERSION};
use crate::error::HandlerError;
use serde_json::{json, Value};

/// Fixed protocol-level error codes.
pub mod code {
    /// Malformed envelope. Standard JSON-RPC code.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Unknown method or caller not allowed. Unknown methods answer with
    /// this code on purpose, so probing cannot enumerate the method set.
    pub const UNAUTHORIZED: i32 = -32001;
    /// Default for handler failures that carry no code of their own.
    /// Standard JSON-RPC internal-error code.
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Envelope for a request that failed validation. The id is always null
/// because a malformed request has no trustworthy id to echo.
pub fn invalid_request() -> Value {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": Value::Null,
        "error": {
            "code": code::INVALID_REQUEST,
            "message": "Invalid request",
        }
    })
}

/// Envelope for a call the caller may not make.
pub fn unauthorized(id: &RpcId) -> Value {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id,
        "error": {
            "code": code::UNAUTHORIZED,
            "message": "Unauthorized",
        }
    })
}

/// Envelope for a handler failure, echoing the request id captured before
/// the failure. Missing fields default: code to internal-error, message to
/// empty, data omitted.
pub fn error_response(id: &RpcId, err: &HandlerError) -> Value {
    let mut error = json!({
        "code": err.code.unwrap_or(code::INTERNAL_ERROR),
        "message": err.message.clone().unwrap_or_default(),
    });
    if let Some(data) = &err.data {
        error["data"] = data.clone();
    }
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id,
        "error": error,
    })
}
