use crate::foundation::GiveawayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC response body. `error` is null on success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcEnvelope {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Value,
}

impl RpcEnvelope {
    pub fn ok(result: Value) -> Self {
        Self { result, error: Value::Null }
    }

    pub fn err(error: impl Into<Value>) -> Self {
        Self { result: Value::Null, error: error.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_null()
    }

    /// Human-readable error text: the `message` of an error object, a bare string, or raw JSON.
    pub fn error_message(&self) -> Option<String> {
        match &self.error {
            Value::Null => None,
            Value::String(message) => Some(message.clone()),
            Value::Object(map) => match map.get("message").and_then(Value::as_str) {
                Some(message) => Some(message.to_string()),
                None => Some(self.error.to_string()),
            },
            other => Some(other.to_string()),
        }
    }

    /// Converts a non-null `error` into [`GiveawayError::RpcError`].
    pub fn into_result(self, method: &str) -> Result<Value, GiveawayError> {
        match self.error_message() {
            Some(message) => Err(GiveawayError::rpc(method, message)),
            None => Ok(self.result),
        }
    }
}

/// Single JSON-RPC round trip against the ledger node.
///
/// Implementations return `Err` only when no envelope could be obtained (connect failure,
/// timeout, undecodable body). Node-side errors arrive inside the envelope.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    async fn call(&self, method: &str, params: Value) -> Result<RpcEnvelope, GiveawayError>;
}

pub mod chain;
pub mod http;
pub mod retry;
pub mod scripted;

pub use chain::ChainReader;
pub use http::{HttpNodeRpc, HttpNodeRpcConfig};
pub use retry::{retry, RetryBackoff, RetryPolicy};
pub use scripted::{RecordedCall, ScriptedNodeRpc};
