use crate::domain::coin_selection::CoinSelector;
use crate::domain::model::UnspentOutput;
use crate::domain::payables::{Payable, PayableSet};
use crate::foundation::{Address, Amount, GiveawayError, ValidationError};
use serde_json::{json, Map, Value};

/// Inputs and outputs of one unsigned payout transaction at a given fee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionPlan {
    pub inputs: Vec<UnspentOutput>,
    /// Payables in order, then the change output to the wallet.
    pub outputs: Vec<Payable>,
    pub fee: Amount,
    pub change: Amount,
}

impl TransactionPlan {
    pub fn inputs_json(&self) -> Value {
        Value::Array(self.inputs.iter().map(|utxo| json!({ "txid": utxo.transaction_id, "vout": utxo.output_index })).collect())
    }

    /// Outputs as a list of single-entry objects so that ordering survives the wire.
    pub fn outputs_json(&self) -> Value {
        Value::Array(
            self.outputs
                .iter()
                .map(|payable| {
                    let mut entry = Map::new();
                    entry.insert(payable.address.to_string(), json!(payable.amount));
                    Value::Object(entry)
                })
                .collect(),
        )
    }

    /// `createrawtransaction` params.
    pub fn rpc_params(&self) -> Value {
        json!([self.inputs_json(), self.outputs_json()])
    }
}

/// Plans a transaction paying `payables` from `wallet` at `fee`.
///
/// Every check here runs before any node call: a rejected plan means
/// `createrawtransaction` is never attempted.
pub fn plan_transaction(
    wallet: &Address,
    balance: Amount,
    utxos: &[UnspentOutput],
    payables: &PayableSet,
    fee: Amount,
    selector: &dyn CoinSelector,
) -> Result<TransactionPlan, GiveawayError> {
    payables.validate()?;
    if payables.contains(wallet) {
        return Err(ValidationError::PaysOwnWallet { address: wallet.to_string() }.into());
    }

    let total = payables.total()?;
    let required = total.checked_add(fee).ok_or_else(|| GiveawayError::Message("payout total overflow".to_string()))?;
    let change = balance.checked_sub(required).ok_or(ValidationError::InsufficientBalance { required, available: balance })?;

    let inputs = selector.select(utxos, required);
    if inputs.is_empty() {
        return Err(GiveawayError::BuildFailure { fee, reason: "no unspent outputs".to_string() });
    }

    let mut outputs: Vec<Payable> = payables.iter().cloned().collect();
    outputs.push(Payable::new(wallet.clone(), change));

    Ok(TransactionPlan { inputs, outputs, fee, change })
}
