use crate::fixtures::{coins, funded_node, test_wallet, TEST_ADDRESS_A, TEST_WALLET_ADDRESS};
use giveaway_core::application::{FeeEscalator, NoopObserver, PayoutCoordinator, TransactionBuilder};
use giveaway_core::domain::PayableSet;
use giveaway_core::foundation::{Address, ErrorCode};
use giveaway_core::infrastructure::rpc::ChainReader;
use serde_json::json;

#[tokio::test]
async fn test_fee_escalates_until_build_succeeds() {
    let rpc = funded_node(1000.0);
    rpc.push_error("createrawtransaction", json!("insufficient fee"));
    rpc.push_error("createrawtransaction", json!("insufficient fee"));
    rpc.push_result("createrawtransaction", json!("02000000"));
    let builder = TransactionBuilder::new(ChainReader::new(rpc.clone(), Address::new(TEST_WALLET_ADDRESS)));

    let payables = PayableSet::new().with(TEST_ADDRESS_A, coins(100.0));
    let built = FeeEscalator::default().escalate(&builder, &payables, coins(0.01), &NoopObserver).await.expect("escalate");

    assert_eq!(built.attempts, 3);
    assert_eq!(built.fee, coins(0.03));
    assert_eq!(built.plan.change, coins(899.97));
    assert_eq!(rpc.call_count("createrawtransaction"), 3);
}

#[tokio::test]
async fn test_overspend_never_reaches_create() {
    let rpc = funded_node(10.0);
    let coordinator = PayoutCoordinator::new(rpc.clone(), test_wallet());

    let err = coordinator.payout(PayableSet::new().with(TEST_ADDRESS_A, coins(10.0)), coins(0.01)).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::InsufficientBalance);
    assert_eq!(rpc.call_count("createrawtransaction"), 0);
    assert_eq!(rpc.call_count("sendrawtransaction"), 0);
}

#[tokio::test]
async fn test_fee_exhaustion_is_fatal_for_payout() {
    let rpc = funded_node(1000.0);
    rpc.set_error("createrawtransaction", json!("insufficient fee"));
    let coordinator = PayoutCoordinator::new(rpc.clone(), test_wallet()).with_escalator(FeeEscalator::new(coins(0.01), 5));

    let err = coordinator.payout(PayableSet::new().with(TEST_ADDRESS_A, coins(1.0)), coins(0.01)).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::FeeExhausted);
    assert_eq!(rpc.call_count("createrawtransaction"), 5);
    assert_eq!(rpc.call_count("signrawtransactionwithkey"), 0);
}
