// Domain Layer - wire types and pure response builders

pub mod envelope;
pub mod response;

pub use envelope::{EnvelopeError, RpcId, RpcRequest, JSONRPC_VERSION};
