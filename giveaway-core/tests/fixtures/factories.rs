#![allow(dead_code)]

use crate::fixtures::constants::{TEST_SIGNED_TXID, TEST_WALLET_ADDRESS, TEST_WALLET_KEY};
use giveaway_core::domain::{Candidate, Prizes, Wallet};
use giveaway_core::foundation::{Address, Amount, PrivateKey};
use giveaway_core::infrastructure::rpc::ScriptedNodeRpc;
use serde_json::json;
use std::sync::Arc;

pub fn coins(value: f64) -> Amount {
    Amount::from_coins(value).expect("amount")
}

pub fn test_wallet() -> Wallet {
    Wallet::new(TEST_WALLET_ADDRESS, PrivateKey::new(TEST_WALLET_KEY.to_string()))
}

pub fn test_prizes() -> Prizes {
    Prizes { register: coins(1.0), referral: coins(0.5), master: coins(10.0), ref_master: 0.1 }
}

pub fn candidate(recipient: &str, address: &str, referral: Option<&str>) -> Candidate {
    Candidate { recipient: recipient.to_string(), address: Address::new(address), referral: referral.map(Address::new) }
}

/// A node whose wallet holds `balance_coins` in one UTXO and which builds, signs and decodes
/// every transaction. Broadcast and lookup replies are left to the test.
pub fn funded_node(balance_coins: f64) -> Arc<ScriptedNodeRpc> {
    let rpc = Arc::new(ScriptedNodeRpc::new());
    rpc.set_result("getaddressbalance", json!({ "balance": coins(balance_coins).units() }));
    rpc.set_result("getaddressutxos", json!([{ "txid": "5e1f", "outputIndex": 1, "satoshis": coins(balance_coins).units() }]));
    rpc.set_result("createrawtransaction", json!("02000000"));
    rpc.set_result("signrawtransactionwithkey", json!({ "hex": "02000000ff", "complete": true }));
    rpc.set_result("decoderawtransaction", json!({ "txid": TEST_SIGNED_TXID }));
    rpc.set_error("getrawtransaction", json!("No such mempool or blockchain transaction"));
    rpc.set_result("getaddresstxids", json!([]));
    rpc
}
