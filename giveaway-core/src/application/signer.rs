use crate::foundation::{GiveawayError, PrivateKey, SignedTransaction, UnsignedTransaction};
use crate::infrastructure::rpc::NodeRpc;
use log::debug;
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use std::sync::Arc;

/// Signs through the node's `signrawtransactionwithkey`; the key never leaves this call.
pub struct Signer {
    rpc: Arc<dyn NodeRpc>,
    private_key: PrivateKey,
}

impl Signer {
    pub fn new(rpc: Arc<dyn NodeRpc>, private_key: PrivateKey) -> Self {
        Self { rpc, private_key }
    }

    /// Transport errors propagate; any node-side problem is a [`GiveawayError::SignError`].
    pub async fn sign(&self, unsigned: &UnsignedTransaction) -> Result<SignedTransaction, GiveawayError> {
        let params = json!([unsigned.as_hex(), [self.private_key.expose_secret()]]);
        let envelope = self.rpc.call("signrawtransactionwithkey", params).await?;
        if let Some(message) = envelope.error_message() {
            return Err(GiveawayError::SignError(message));
        }
        let hex = envelope
            .result
            .get("hex")
            .and_then(Value::as_str)
            .filter(|hex| !hex.is_empty())
            .ok_or_else(|| GiveawayError::SignError("missing hex in signrawtransactionwithkey result".to_string()))?;
        if envelope.result.get("complete").and_then(Value::as_bool) == Some(false) {
            let details = envelope.result.get("errors").map(Value::to_string).unwrap_or_default();
            return Err(GiveawayError::SignError(format!("signature incomplete {}", details).trim_end().to_string()));
        }
        let signed = SignedTransaction::from_hex(hex).map_err(|err| GiveawayError::SignError(err.to_string()))?;
        debug!("transaction signed hex_len={}", signed.as_hex().len());
        Ok(signed)
    }
}
