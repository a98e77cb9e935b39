//! Dispatch Engine
//!
//! Accepts one parsed JSON value per call - a single request or a batch
//! array - and always returns a well-formed JSON value. Every failure
//! path (bad envelope, unknown method, handler Err, handler panic) ends
//! in a protocol-shaped error response; nothing escapes `handle` as an
//! error and one batch element can never contaminate a sibling.

use crate::application::registry::MethodRegistry;
use crate::domain::envelope::RpcRequest;
use crate::domain::response;
use crate::error::{HandlerError, HandlerResult};
use crate::port::{MethodHandler, RequestContext};
use futures::future::join_all;
use futures::FutureExt;
use serde_json::Value;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, warn};

/// JSON-RPC request dispatcher.
///
/// Stateless across calls: the registry and context are fixed at
/// construction, so one instance is safe for concurrent `handle` calls
/// for the dispatcher's whole lifetime (process-wide or per-connection,
/// the embedding application decides).
pub struct RpcDispatcher {
    registry: MethodRegistry,
    context: RequestContext,
}

impl RpcDispatcher {
    pub fn new(
        handlers: impl IntoIterator<Item = Arc<dyn MethodHandler>>,
        context: RequestContext,
    ) -> Self {
        Self {
            registry: MethodRegistry::new(handlers),
            context,
        }
    }

    /// Dispatch a raw inbound value.
    ///
    /// Batch input (a JSON array) fans out concurrently; the output array
    /// is positionally aligned with the input regardless of completion
    /// order. An empty batch is itself invalid and yields a single
    /// invalid-request envelope, not an empty array. Non-array input
    /// yields exactly one response value.
    pub async fn handle(&self, raw: Value) -> Value {
        match raw {
            Value::Array(batch) => {
                if batch.is_empty() {
                    warn!("rejecting empty batch");
                    return response::invalid_request();
                }
                let replies = join_all(batch.into_iter().map(|item| self.dispatch_one(item))).await;
                Value::Array(replies)
            }
            single => self.dispatch_one(single).await,
        }
    }

    async fn dispatch_one(&self, raw: Value) -> Value {
        let request = match RpcRequest::parse(raw) {
            Ok(request) => request,
            Err(err) => {
                // Detail stays in the log; the caller only sees the
                // fixed invalid-request envelope with a null id.
                warn!(error = %err, "rejecting invalid request");
                return response::invalid_request();
            }
        };

        match self.try_call(&request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(method = %request.method, id = %request.id, error = %err, "handler failed");
                response::error_response(&request.id, &err)
            }
        }
    }

    /// Invoke the handler for `request`, confining panics to this slot.
    async fn try_call(&self, request: &RpcRequest) -> HandlerResult {
        let handler = self.registry.lookup(&request.method);
        let call = handler.handle(&self.context, &request.method, &request.params, &request.id);
        match AssertUnwindSafe(call).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => {
                error!(
                    method = %request.method,
                    id = %request.id,
                    panic = %panic_message(payload.as_ref()),
                    "handler panicked"
                );
                // Uninspected failure: internal code, empty message. The
                // panic text never reaches the wire.
                Err(HandlerError::default())
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
