//! Method Handler Port
//!
//! Business methods implement `MethodHandler` and register by name with
//! the dispatcher. The context is built once per dispatcher and shared by
//! reference across every invocation, batches included; handlers must not
//! mutate it (and cannot, short of interior mutability in the authorizer
//! they were handed).

use crate::domain::envelope::RpcId;
use crate::error::HandlerResult;
use crate::port::authorizer::Authorizer;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Read-only per-dispatcher state threaded into every handler call.
#[derive(Clone)]
pub struct RequestContext {
    /// Opaque permission capability, consumed by handlers only.
    pub authorizer: Arc<dyn Authorizer>,
    /// Identity of the caller this dispatcher serves.
    pub current_user: String,
    /// Upstream endpoint for handlers that proxy calls onward.
    pub target_rpc_url: String,
}

impl RequestContext {
    pub fn new(
        authorizer: Arc<dyn Authorizer>,
        current_user: impl Into<String>,
        target_rpc_url: impl Into<String>,
    ) -> Self {
        Self {
            authorizer,
            current_user: current_user.into(),
            target_rpc_url: target_rpc_url.into(),
        }
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("current_user", &self.current_user)
            .field("target_rpc_url", &self.target_rpc_url)
            .finish_non_exhaustive()
    }
}

/// A named business method.
///
/// `handle` returns the complete wire response on success; the dispatcher
/// passes it through untouched. Failures (Err or panic) are converted to a
/// generic error envelope at the dispatch boundary.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    /// Registry key. Must be unique per dispatcher; on a duplicate the
    /// later registration wins.
    fn name(&self) -> &str;

    /// Execute the method.
    ///
    /// # Arguments
    /// * `context` - shared read-only dispatcher state
    /// * `method` - the method name from the request (useful for handlers
    ///   registered under a family of names)
    /// * `params` - positional parameters, empty when the request had none
    /// * `id` - request id, to echo in the handler-built response
    async fn handle(
        &self,
        context: &RequestContext,
        method: &str,
        params: &[Value],
        id: &RpcId,
    ) -> HandlerResult;
}
