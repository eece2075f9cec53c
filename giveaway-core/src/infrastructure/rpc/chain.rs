use crate::domain::UnspentOutput;
use crate::foundation::{Address, Amount, GiveawayError, SignedTransaction, TransactionId};
use crate::infrastructure::rpc::NodeRpc;
use log::{debug, trace};
use serde_json::{json, Value};
use std::sync::Arc;

/// Read-side queries against the node, scoped to the paying wallet.
#[derive(Clone)]
pub struct ChainReader {
    rpc: Arc<dyn NodeRpc>,
    wallet: Address,
}

impl ChainReader {
    pub fn new(rpc: Arc<dyn NodeRpc>, wallet: Address) -> Self {
        Self { rpc, wallet }
    }

    pub fn wallet(&self) -> &Address {
        &self.wallet
    }

    pub fn rpc(&self) -> &Arc<dyn NodeRpc> {
        &self.rpc
    }

    fn address_filter(&self) -> Value {
        json!([{ "addresses": [self.wallet] }])
    }

    /// Wallet balance. The node reports integer base units.
    pub async fn get_balance(&self) -> Result<Amount, GiveawayError> {
        let result = self.rpc.call("getaddressbalance", json!([self.wallet])).await?.into_result("getaddressbalance")?;
        let balance = result
            .get("balance")
            .and_then(Value::as_u64)
            .ok_or_else(|| GiveawayError::rpc("getaddressbalance", format!("missing integer balance in {}", result)))?;
        let balance = Amount::from_units(balance);
        debug!("wallet balance address={} balance={}", self.wallet, balance);
        Ok(balance)
    }

    /// Every unspent output of the wallet, as the node lists them.
    pub async fn get_unspent_outputs(&self) -> Result<Vec<UnspentOutput>, GiveawayError> {
        let result = self.rpc.call("getaddressutxos", self.address_filter()).await?.into_result("getaddressutxos")?;
        let utxos: Vec<UnspentOutput> = serde_json::from_value(result)?;
        debug!("wallet utxos address={} utxo_count={}", self.wallet, utxos.len());
        Ok(utxos)
    }

    /// True iff the node answers a balance query for `address` without error. Takes no wallet lock.
    pub async fn address_exists(&self, address: &Address) -> Result<bool, GiveawayError> {
        let envelope = self.rpc.call("getaddressbalance", json!([address])).await?;
        trace!("address_exists address={} exists={}", address, envelope.is_ok());
        Ok(envelope.is_ok())
    }

    pub async fn get_address_txids(&self) -> Result<Vec<TransactionId>, GiveawayError> {
        let result = self.rpc.call("getaddresstxids", self.address_filter()).await?.into_result("getaddresstxids")?;
        Ok(serde_json::from_value(result)?)
    }

    pub async fn best_block_hash(&self) -> Result<String, GiveawayError> {
        let result = self.rpc.call("getbestblockhash", json!([])).await?.into_result("getbestblockhash")?;
        result.as_str().map(str::to_string).ok_or_else(|| GiveawayError::rpc("getbestblockhash", format!("expected string, got {}", result)))
    }

    pub async fn decode_txid(&self, signed: &SignedTransaction) -> Result<TransactionId, GiveawayError> {
        let result = self.rpc.call("decoderawtransaction", json!([signed.as_hex()])).await?.into_result("decoderawtransaction")?;
        result
            .get("txid")
            .and_then(Value::as_str)
            .map(TransactionId::from)
            .ok_or_else(|| GiveawayError::rpc("decoderawtransaction", "missing txid"))
    }

    /// True iff the node knows `txid`, in the mempool or on chain.
    ///
    /// Nodes without `-txindex` only answer `getrawtransaction` for mempool entries, so a miss
    /// falls back to the wallet's address index.
    pub async fn transaction_known(&self, txid: &TransactionId) -> Result<bool, GiveawayError> {
        let envelope = self.rpc.call("getrawtransaction", json!([txid])).await?;
        if envelope.is_ok() {
            return Ok(true);
        }
        let known = self.get_address_txids().await?.contains(txid);
        debug!("transaction lookup via address index txid={} known={}", txid, known);
        Ok(known)
    }
}
