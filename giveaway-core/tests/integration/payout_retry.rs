use crate::fixtures::{coins, funded_node, test_wallet, TEST_ADDRESS_A, TEST_ADDRESS_B, TEST_SIGNED_TXID};
use giveaway_core::application::{PayoutCoordinator, PayoutObserver};
use giveaway_core::domain::PayableSet;
use giveaway_core::foundation::{GiveawayError, TransactionId};
use giveaway_core::infrastructure::rpc::{RetryBackoff, RetryPolicy};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Default)]
struct EventLog {
    events: Mutex<Vec<String>>,
}

impl EventLog {
    fn push(&self, event: String) {
        self.events.lock().expect("events lock").push(event);
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().expect("events lock").clone()
    }
}

impl PayoutObserver for EventLog {
    fn on_attempt_started(&self, attempt: u32) {
        self.push(format!("attempt:{attempt}"));
    }

    fn on_broadcast_rejected(&self, attempt: u32, error: &str) {
        self.push(format!("rejected:{attempt}:{error}"));
    }

    fn on_verified_accepted(&self, txid: &TransactionId) {
        self.push(format!("verified:{txid}"));
    }

    fn on_completed(&self, _txid: Option<&TransactionId>, attempts: u32) {
        self.push(format!("completed:{attempts}"));
    }

    fn on_exhausted(&self, attempts: u32, _last_error: &str) {
        self.push(format!("exhausted:{attempts}"));
    }
}

#[tokio::test(start_paused = true)]
async fn test_inputs_spent_restarts_full_unit_after_three_seconds() {
    let rpc = funded_node(1000.0);
    rpc.push_error("sendrawtransaction", json!("bad-txns-inputs-spent"));
    rpc.push_result("sendrawtransaction", json!(TEST_SIGNED_TXID));
    let log = Arc::new(EventLog::default());
    let coordinator = PayoutCoordinator::new(rpc.clone(), test_wallet()).with_observer(log.clone());

    let started = Instant::now();
    let receipt = coordinator.payout(PayableSet::new().with(TEST_ADDRESS_A, coins(100.0)), coins(0.01)).await.expect("payout");
    let elapsed = started.elapsed();

    assert!(elapsed >= Duration::from_secs(3), "elapsed={elapsed:?}");
    assert!(elapsed < Duration::from_secs(4), "elapsed={elapsed:?}");
    assert_eq!(receipt.attempts, 2);
    assert_eq!(receipt.txid, Some(TransactionId::new(TEST_SIGNED_TXID)));
    assert_eq!(rpc.call_count("getaddressutxos"), 2);
    assert_eq!(rpc.call_count("createrawtransaction"), 2);
    assert_eq!(rpc.call_count("signrawtransactionwithkey"), 2);
    assert_eq!(
        log.events(),
        vec!["attempt:1".to_string(), "rejected:1:bad-txns-inputs-spent".to_string(), "attempt:2".to_string(), "completed:2".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_accepted_transaction_is_not_resubmitted() {
    let rpc = funded_node(1000.0);
    rpc.push_transport_error("sendrawtransaction", "operation timed out");
    rpc.set_result("getrawtransaction", json!("02000000ff"));
    let log = Arc::new(EventLog::default());
    let coordinator = PayoutCoordinator::new(rpc.clone(), test_wallet()).with_observer(log.clone());

    let receipt = coordinator.payout(PayableSet::new().with(TEST_ADDRESS_A, coins(1.0)), coins(0.01)).await.expect("payout");

    assert!(receipt.already_accepted);
    assert_eq!(rpc.call_count("sendrawtransaction"), 1);
    assert_eq!(rpc.calls_to("getrawtransaction")[0].params, json!([TEST_SIGNED_TXID]));
    assert!(log.events().contains(&format!("verified:{TEST_SIGNED_TXID}")));
}

#[tokio::test(start_paused = true)]
async fn test_confirmed_transaction_found_without_txindex_is_not_resubmitted() {
    let rpc = funded_node(1000.0);
    rpc.push_transport_error("sendrawtransaction", "operation timed out");
    rpc.set_error("getrawtransaction", json!({ "code": -5, "message": "No such mempool transaction. Use -txindex to enable blockchain transaction queries" }));
    rpc.set_result("getaddresstxids", json!(["5e1f", TEST_SIGNED_TXID]));
    let coordinator = PayoutCoordinator::new(rpc.clone(), test_wallet());

    let receipt = coordinator.payout(PayableSet::new().with(TEST_ADDRESS_A, coins(1.0)), coins(0.01)).await.expect("payout");

    assert!(receipt.already_accepted);
    assert_eq!(receipt.txid, Some(TransactionId::new(TEST_SIGNED_TXID)));
    assert_eq!(rpc.call_count("sendrawtransaction"), 1);
    assert_eq!(rpc.call_count("getaddresstxids"), 1);
    assert_eq!(rpc.call_count("createrawtransaction"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_exhaustion_uses_backoff_and_reports_last_error() {
    let rpc = funded_node(1000.0);
    rpc.set_error("sendrawtransaction", json!("bad-txns-inputs-spent"));
    let log = Arc::new(EventLog::default());
    let policy = RetryPolicy::new(Duration::from_secs(1), Duration::from_secs(4), RetryBackoff::Exponential);
    let coordinator =
        PayoutCoordinator::new(rpc.clone(), test_wallet()).with_retry_policy(policy).with_max_broadcast_attempts(4).with_observer(log.clone());

    let started = Instant::now();
    let err = coordinator.payout(PayableSet::new().with(TEST_ADDRESS_A, coins(1.0)), coins(0.01)).await.unwrap_err();

    assert!(matches!(err, GiveawayError::BroadcastExhausted { attempts: 4, ref last_error } if last_error == "bad-txns-inputs-spent"));
    // 1s + 2s + 4s between the four attempts.
    assert!(started.elapsed() >= Duration::from_secs(7));
    assert_eq!(rpc.call_count("sendrawtransaction"), 4);
    assert_eq!(log.events().last().map(String::as_str), Some("exhausted:4"));
}

#[tokio::test(start_paused = true)]
async fn test_payouts_on_one_wallet_do_not_interleave() {
    let rpc = funded_node(1000.0);
    rpc.push_error("sendrawtransaction", json!("bad-txns-inputs-spent"));
    rpc.set_result("sendrawtransaction", json!(TEST_SIGNED_TXID));
    let coordinator = Arc::new(PayoutCoordinator::new(rpc.clone(), test_wallet()));

    let first = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.payout(PayableSet::new().with(TEST_ADDRESS_A, coins(1.0)), coins(0.01)).await })
    };
    tokio::task::yield_now().await;
    let second = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.payout(PayableSet::new().with(TEST_ADDRESS_B, coins(2.0)), coins(0.01)).await })
    };

    let first = first.await.expect("join").expect("first payout");
    let second = second.await.expect("join").expect("second payout");
    assert_eq!(first.attempts, 2);
    assert_eq!(second.attempts, 1);

    let methods = rpc.methods_called();
    let first_send = methods.iter().position(|m| m == "sendrawtransaction").expect("send");
    assert_eq!(methods[first_send + 1], "getrawtransaction");
    assert_eq!(methods[first_send + 2], "getaddresstxids");
    assert_eq!(methods[first_send + 3], "getaddressbalance");

    let creates = rpc.calls_to("createrawtransaction");
    assert_eq!(creates.len(), 3);
    assert_eq!(creates[2].params[1][0], json!({ TEST_ADDRESS_B: 2.0 }));
}
