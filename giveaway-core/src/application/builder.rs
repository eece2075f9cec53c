use crate::domain::{plan_transaction, CoinSelector, PayableSet, SpendAll, TransactionPlan};
use crate::foundation::{Amount, GiveawayError, UnsignedTransaction};
use crate::infrastructure::rpc::ChainReader;
use log::{debug, trace};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    Built { transaction: UnsignedTransaction, plan: TransactionPlan },
    /// The node refused this fee or had nothing to spend; a higher fee may succeed.
    Failed { fee: Amount, reason: String },
}

/// Assembles an unsigned payout from a fresh balance and UTXO read.
pub struct TransactionBuilder {
    chain: ChainReader,
    selector: Arc<dyn CoinSelector>,
}

impl TransactionBuilder {
    pub fn new(chain: ChainReader) -> Self {
        Self { chain, selector: Arc::new(SpendAll) }
    }

    pub fn with_selector(mut self, selector: Arc<dyn CoinSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn chain(&self) -> &ChainReader {
        &self.chain
    }

    /// Validation errors and transport errors are returned as `Err`; a node-side refusal
    /// of `createrawtransaction` is `Ok(BuildOutcome::Failed)`.
    pub async fn build(&self, fee: Amount, payables: &PayableSet) -> Result<BuildOutcome, GiveawayError> {
        let balance = self.chain.get_balance().await?;
        let utxos = self.chain.get_unspent_outputs().await?;
        trace!("build inputs fee={} balance={} utxo_count={} payable_count={}", fee, balance, utxos.len(), payables.len());

        let plan = match plan_transaction(self.chain.wallet(), balance, &utxos, payables, fee, self.selector.as_ref()) {
            Ok(plan) => plan,
            Err(GiveawayError::BuildFailure { fee, reason }) => return Ok(BuildOutcome::Failed { fee, reason }),
            Err(err) => return Err(err),
        };

        let envelope = self.chain.rpc().call("createrawtransaction", plan.rpc_params()).await?;
        if let Some(message) = envelope.error_message() {
            debug!("createrawtransaction refused fee={} error={}", fee, message);
            return Ok(BuildOutcome::Failed { fee, reason: message });
        }
        let hex = match envelope.result {
            Value::String(hex) if !hex.is_empty() => hex,
            _ => return Ok(BuildOutcome::Failed { fee, reason: "missing hex in createrawtransaction result".to_string() }),
        };
        match UnsignedTransaction::from_hex(hex) {
            Ok(transaction) => {
                debug!("unsigned transaction built fee={} inputs={} outputs={} change={}", fee, plan.inputs.len(), plan.outputs.len(), plan.change);
                Ok(BuildOutcome::Built { transaction, plan })
            }
            Err(err) => Ok(BuildOutcome::Failed { fee, reason: err.to_string() }),
        }
    }
}
