use crate::domain::payables::PayableSet;
use crate::foundation::{Address, Amount, PrivateKey, TransactionId};
use serde::{Deserialize, Serialize};

/// One spendable output of the wallet, as reported by `getaddressutxos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentOutput {
    #[serde(rename = "txid")]
    pub transaction_id: TransactionId,
    #[serde(rename = "outputIndex")]
    pub output_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satoshis: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
}

impl UnspentOutput {
    pub fn new(transaction_id: impl Into<TransactionId>, output_index: u32) -> Self {
        Self { transaction_id: transaction_id.into(), output_index, satoshis: None, address: None, height: None }
    }
}

/// Prize table in coins. `ref_master` is a ratio of `master` paid to the winner's referral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prizes {
    pub register: Amount,
    pub referral: Amount,
    pub master: Amount,
    pub ref_master: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoutRequest {
    pub payables: PayableSet,
    pub fee: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerSelection {
    pub entropy_source: String,
    pub candidate_count: usize,
    /// 1-based position of the winner in the candidate list.
    pub selected_index: usize,
}

/// Paying wallet. The key is handed to the node only for signing.
#[derive(Clone, Debug)]
pub struct Wallet {
    pub address: Address,
    pub private_key: PrivateKey,
}

impl Wallet {
    pub fn new(address: impl Into<Address>, private_key: PrivateKey) -> Self {
        Self { address: address.into(), private_key }
    }
}
