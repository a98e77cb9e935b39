//! Protocol Contract Tests
//!
//! Drives the dispatcher end-to-end through raw JSON values, the way a
//! transport adapter would: parsed body in, wire-ready value out.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use warden_core::domain::response::code;
use warden_core::domain::JSONRPC_VERSION;
use warden_core::{
    Authorizer, HandlerError, MethodHandler, RequestContext, RpcDispatcher, RpcId,
};

struct AllowAll;

impl Authorizer for AllowAll {
    fn allow(&self, _user: &str, _method: &str) -> bool {
        true
    }
}

struct PingHandler;

#[async_trait]
impl MethodHandler for PingHandler {
    fn name(&self) -> &str {
        "ping"
    }

    async fn handle(
        &self,
        _context: &RequestContext,
        _method: &str,
        _params: &[Value],
        id: &RpcId,
    ) -> Result<Value, HandlerError> {
        Ok(json!({"jsonrpc": JSONRPC_VERSION, "id": id, "result": "pong"}))
    }
}

/// Echoes the routing target, like a proxying handler would consume it.
struct WhoamiHandler;

#[async_trait]
impl MethodHandler for WhoamiHandler {
    fn name(&self) -> &str {
        "whoami"
    }

    async fn handle(
        &self,
        context: &RequestContext,
        _method: &str,
        _params: &[Value],
        id: &RpcId,
    ) -> Result<Value, HandlerError> {
        Ok(json!({
            "jsonrpc": JSONRPC_VERSION,
            "id": id,
            "result": {
                "user": context.current_user,
                "upstream": context.target_rpc_url,
            }
        }))
    }
}

struct BoomHandler;

#[async_trait]
impl MethodHandler for BoomHandler {
    fn name(&self) -> &str {
        "boom"
    }

    async fn handle(
        &self,
        _context: &RequestContext,
        _method: &str,
        _params: &[Value],
        _id: &RpcId,
    ) -> Result<Value, HandlerError> {
        Err(HandlerError::with_code(42, "boom").data(json!({"x": 1})))
    }
}

fn dispatcher() -> RpcDispatcher {
    let handlers: Vec<Arc<dyn MethodHandler>> = vec![
        Arc::new(PingHandler),
        Arc::new(WhoamiHandler),
        Arc::new(BoomHandler),
    ];
    RpcDispatcher::new(
        handlers,
        RequestContext::new(Arc::new(AllowAll), "0xfeed", "http://chain.invalid:8545"),
    )
}

#[tokio::test]
async fn ping_scenario_matches_wire_shape() {
    let out = dispatcher()
        .handle(json!({"id": 1, "jsonrpc": "2.0", "method": "ping"}))
        .await;
    assert_eq!(out, json!({"jsonrpc": "2.0", "id": 1, "result": "pong"}));
}

#[tokio::test]
async fn response_id_always_echoes_request_id() {
    let dispatcher = dispatcher();
    for id in [json!(1), json!(0), json!("req-1"), json!(-3), json!(2.5)] {
        let out = dispatcher
            .handle(json!({"id": id.clone(), "jsonrpc": "2.0", "method": "ping"}))
            .await;
        assert_eq!(out["id"], id);
    }
}

#[tokio::test]
async fn mixed_batch_preserves_order() {
    let out = dispatcher()
        .handle(json!([
            {"id": 1, "jsonrpc": "2.0", "method": "ping"},
            {"id": 2, "jsonrpc": "2.0", "method": "unknown"},
        ]))
        .await;

    let replies = out.as_array().expect("batch input yields an array");
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0], json!({"jsonrpc": "2.0", "id": 1, "result": "pong"}));
    assert_eq!(replies[1]["id"], 2);
    assert_eq!(replies[1]["error"]["code"], code::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_batch_yields_one_invalid_request() {
    let out = dispatcher().handle(json!([])).await;
    assert_eq!(
        out,
        json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": {"code": code::INVALID_REQUEST, "message": "Invalid request"}
        })
    );
}

#[tokio::test]
async fn malformed_envelopes_never_reach_handlers() {
    let dispatcher = dispatcher();
    let malformed = [
        json!({"jsonrpc": "2.0", "method": "ping"}),           // no id
        json!({"id": true, "jsonrpc": "2.0", "method": "ping"}), // bool id
        json!({"id": 1, "jsonrpc": "3.0", "method": "ping"}),  // wrong tag
        json!({"id": 1, "jsonrpc": "2.0", "method": ["ping"]}), // non-string method
        json!(42),
    ];
    for raw in malformed {
        let out = dispatcher.handle(raw.clone()).await;
        assert_eq!(out["id"], Value::Null, "input {:?}", raw);
        assert_eq!(out["error"]["code"], code::INVALID_REQUEST, "input {:?}", raw);
    }
}

#[tokio::test]
async fn handler_failure_surfaces_code_message_data() {
    let out = dispatcher()
        .handle(json!({"id": "x", "jsonrpc": "2.0", "method": "boom"}))
        .await;
    assert_eq!(out["id"], "x");
    assert_eq!(out["error"]["code"], 42);
    assert_eq!(out["error"]["message"], "boom");
    assert_eq!(out["error"]["data"], json!({"x": 1}));
}

#[tokio::test]
async fn context_reaches_every_handler_unchanged() {
    let out = dispatcher()
        .handle(json!([
            {"id": 1, "jsonrpc": "2.0", "method": "whoami"},
            {"id": 2, "jsonrpc": "2.0", "method": "whoami"},
        ]))
        .await;
    for reply in out.as_array().unwrap() {
        assert_eq!(reply["result"]["user"], "0xfeed");
        assert_eq!(reply["result"]["upstream"], "http://chain.invalid:8545");
    }
}

#[tokio::test]
async fn dispatcher_is_safe_for_concurrent_calls() {
    let dispatcher = Arc::new(dispatcher());

    let mut handles = Vec::new();
    for i in 0..16 {
        let dispatcher = dispatcher.clone();
        handles.push(tokio::spawn(async move {
            dispatcher
                .handle(json!({"id": i, "jsonrpc": "2.0", "method": "ping"}))
                .await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.await.unwrap();
        assert_eq!(out["id"], i);
        assert_eq!(out["result"], "pong");
    }
}
