// Warden Core - JSON-RPC 2.0 dispatch engine
// Transport, authorization policy and business handlers live outside
// this crate; only their seams (ports) are defined here.

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{MethodRegistry, RpcDispatcher};
pub use domain::envelope::{EnvelopeError, RpcId, RpcRequest};
pub use error::{HandlerError, HandlerResult};
pub use port::{Authorizer, MethodHandler, RequestContext};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
