use crate::foundation::GiveawayError;
use crate::infrastructure::rpc::{NodeRpc, RpcEnvelope};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub params: Value,
}

#[derive(Clone, Debug)]
enum ScriptedReply {
    Envelope(RpcEnvelope),
    Transport(String),
}

#[derive(Default)]
struct ScriptState {
    queued: HashMap<String, VecDeque<ScriptedReply>>,
    fallback: HashMap<String, ScriptedReply>,
    calls: Vec<RecordedCall>,
}

/// In-memory node for dry runs and tests.
///
/// Each method answers from its queue first, then from its fallback reply. A method with
/// neither fails with a transport error, as an unreachable node would.
#[derive(Default)]
pub struct ScriptedNodeRpc {
    state: Mutex<ScriptState>,
}

impl ScriptedNodeRpc {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut ScriptState) -> R) -> R {
        match self.state.lock() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }

    fn enqueue(&self, method: &str, reply: ScriptedReply) {
        self.with_state(|state| state.queued.entry(method.to_string()).or_default().push_back(reply));
    }

    pub fn push_result(&self, method: &str, result: Value) {
        self.enqueue(method, ScriptedReply::Envelope(RpcEnvelope::ok(result)));
    }

    pub fn push_error(&self, method: &str, error: Value) {
        self.enqueue(method, ScriptedReply::Envelope(RpcEnvelope::err(error)));
    }

    pub fn push_transport_error(&self, method: &str, details: &str) {
        self.enqueue(method, ScriptedReply::Transport(details.to_string()));
    }

    /// Reply used once the queue for `method` is drained.
    pub fn set_result(&self, method: &str, result: Value) {
        self.with_state(|state| state.fallback.insert(method.to_string(), ScriptedReply::Envelope(RpcEnvelope::ok(result))));
    }

    pub fn set_error(&self, method: &str, error: Value) {
        self.with_state(|state| state.fallback.insert(method.to_string(), ScriptedReply::Envelope(RpcEnvelope::err(error))));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.with_state(|state| state.calls.clone())
    }

    pub fn calls_to(&self, method: &str) -> Vec<RecordedCall> {
        self.with_state(|state| state.calls.iter().filter(|call| call.method == method).cloned().collect())
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.with_state(|state| state.calls.iter().filter(|call| call.method == method).count())
    }

    pub fn methods_called(&self) -> Vec<String> {
        self.with_state(|state| state.calls.iter().map(|call| call.method.clone()).collect())
    }
}

#[async_trait]
impl NodeRpc for ScriptedNodeRpc {
    async fn call(&self, method: &str, params: Value) -> Result<RpcEnvelope, GiveawayError> {
        let reply = self.with_state(|state| {
            state.calls.push(RecordedCall { method: method.to_string(), params });
            state
                .queued
                .get_mut(method)
                .and_then(VecDeque::pop_front)
                .or_else(|| state.fallback.get(method).cloned())
        });
        match reply {
            Some(ScriptedReply::Envelope(envelope)) => Ok(envelope),
            Some(ScriptedReply::Transport(details)) => Err(GiveawayError::transport(method, details)),
            None => Err(GiveawayError::transport(method, "no scripted reply")),
        }
    }
}
