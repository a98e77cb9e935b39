//! Method Registry
//!
//! Name -> handler lookup built once at dispatcher construction. Unknown
//! names resolve to a fallback that answers "unauthorized", so a probe
//! cannot tell an unregistered method from a forbidden one.

use crate::domain::envelope::RpcId;
use crate::domain::response;
use crate::error::HandlerResult;
use crate::port::{MethodHandler, RequestContext};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

pub const FALLBACK_HANDLER_NAME: &str = "default-handler";

/// Immutable name -> handler map with a closed-by-default fallback.
pub struct MethodRegistry {
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
    fallback: Arc<dyn MethodHandler>,
}

impl MethodRegistry {
    /// Build from an ordered handler list. On duplicate names the later
    /// entry wins.
    pub fn new(handlers: impl IntoIterator<Item = Arc<dyn MethodHandler>>) -> Self {
        let mut map: HashMap<String, Arc<dyn MethodHandler>> = HashMap::new();
        for handler in handlers {
            if let Some(prev) = map.insert(handler.name().to_string(), handler) {
                tracing::debug!(method = prev.name(), "handler registration overridden");
            }
        }
        Self {
            handlers: map,
            fallback: Arc::new(UnknownMethodHandler),
        }
    }

    /// Registered handler for `method`, or the fallback.
    pub fn lookup(&self, method: &str) -> &Arc<dyn MethodHandler> {
        self.handlers.get(method).unwrap_or(&self.fallback)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Fallback for method names with no registration. Always answers with
/// the unauthorized envelope, never a generic dispatch error.
struct UnknownMethodHandler;

#[async_trait]
impl MethodHandler for UnknownMethodHandler {
    fn name(&self) -> &str {
        FALLBACK_HANDLER_NAME
    }

    async fn handle(
        &self,
        _context: &RequestContext,
        _method: &str,
        _params: &[Value],
        id: &RpcId,
    ) -> HandlerResult {
        Ok(response::unauthorized(id))
    }
}
