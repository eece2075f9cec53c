use crate::foundation::{GiveawayError, SignedTransaction, TransactionId};
use crate::infrastructure::rpc::NodeRpc;
use log::{debug, info};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BroadcastReport {
    pub accepted: bool,
    pub txid: Option<TransactionId>,
    pub error: Option<String>,
}

/// One `sendrawtransaction` call; retries belong to the coordinator.
pub struct Broadcaster {
    rpc: Arc<dyn NodeRpc>,
}

impl Broadcaster {
    pub fn new(rpc: Arc<dyn NodeRpc>) -> Self {
        Self { rpc }
    }

    pub async fn broadcast(&self, signed: &SignedTransaction) -> Result<BroadcastReport, GiveawayError> {
        let envelope = self.rpc.call("sendrawtransaction", json!([signed.as_hex()])).await?;
        let error = envelope.error_message();
        let txid = match &envelope.result {
            Value::String(txid) if !txid.is_empty() => Some(TransactionId::new(txid.clone())),
            _ => None,
        };
        let report = BroadcastReport { accepted: error.is_none(), txid, error };
        if report.accepted {
            info!("broadcast accepted txid={}", report.txid.as_ref().map(|t| t.as_str()).unwrap_or("-"));
        } else {
            debug!("broadcast rejected error={}", report.error.as_deref().unwrap_or(""));
        }
        Ok(report)
    }
}
