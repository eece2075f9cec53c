use crate::fixtures::{coins, TEST_ADDRESS_A, TEST_ADDRESS_B, TEST_WALLET_ADDRESS};
use giveaway_core::domain::{plan_transaction, PayableSet, SpendAll, UnspentOutput};
use giveaway_core::foundation::{Address, ErrorCode};
use serde_json::json;

fn wallet() -> Address {
    Address::new(TEST_WALLET_ADDRESS)
}

#[test]
fn test_change_is_balance_minus_payables_and_fee() {
    let utxos = vec![UnspentOutput::new("5e1f", 1)];
    let payables = PayableSet::new().with(TEST_ADDRESS_A, coins(100.0));

    let plan = plan_transaction(&wallet(), coins(1000.0), &utxos, &payables, coins(0.01), &SpendAll).expect("plan");

    assert_eq!(plan.change, coins(899.99));
    assert_eq!(plan.outputs_json(), json!([{ TEST_ADDRESS_A: 100.0 }, { TEST_WALLET_ADDRESS: 899.99 }]));
}

#[test]
fn test_duplicate_payables_merge_before_planning() {
    let utxos = vec![UnspentOutput::new("5e1f", 1)];
    let payables = PayableSet::new()
        .with(TEST_ADDRESS_A, coins(1.0))
        .with(TEST_ADDRESS_B, coins(0.5))
        .with(TEST_ADDRESS_A, coins(0.5))
        .aggregate()
        .expect("aggregate");

    let plan = plan_transaction(&wallet(), coins(10.0), &utxos, &payables, coins(0.01), &SpendAll).expect("plan");

    assert_eq!(plan.outputs.len(), 3);
    assert_eq!(plan.outputs[0].address.as_str(), TEST_ADDRESS_A);
    assert_eq!(plan.outputs[0].amount, coins(1.5));
    assert_eq!(plan.change, coins(7.99));
}

#[test]
fn test_overspend_is_rejected() {
    let utxos = vec![UnspentOutput::new("5e1f", 1)];
    let payables = PayableSet::new().with(TEST_ADDRESS_A, coins(5.0));
    let err = plan_transaction(&wallet(), coins(5.0), &utxos, &payables, coins(0.01), &SpendAll).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InsufficientBalance);
}

#[test]
fn test_paying_own_wallet_is_rejected() {
    let utxos = vec![UnspentOutput::new("5e1f", 1)];
    let payables = PayableSet::new().with(TEST_WALLET_ADDRESS, coins(1.0));
    let err = plan_transaction(&wallet(), coins(5.0), &utxos, &payables, coins(0.01), &SpendAll).unwrap_err();
    assert_eq!(err.code(), ErrorCode::PaysOwnWallet);
}
