use crate::fixtures::{
    candidate, coins, funded_node, test_prizes, test_wallet, MemoryCandidateSource, RecordingSink, TEST_ADDRESS_A, TEST_ADDRESS_B,
    TEST_ADDRESS_C, TEST_BLOCK_HASH_HIGH, TEST_BLOCK_HASH_LOW,
};
use giveaway_core::application::{GiveawayReport, GiveawayRunner, PayoutCoordinator};
use giveaway_core::domain::NotificationTemplate;
use giveaway_core::foundation::{Address, ErrorCode};
use serde_json::json;
use std::sync::Arc;

fn runner(rpc: &Arc<giveaway_core::infrastructure::rpc::ScriptedNodeRpc>, sink: &Arc<RecordingSink>) -> GiveawayRunner {
    let coordinator = Arc::new(PayoutCoordinator::new(rpc.clone(), test_wallet()));
    GiveawayRunner::new(coordinator, sink.clone(), test_prizes(), coins(0.01))
}

fn candidates() -> Vec<giveaway_core::domain::Candidate> {
    vec![
        candidate("a@example.com", TEST_ADDRESS_A, None),
        candidate("b@example.com", TEST_ADDRESS_B, None),
        candidate("c@example.com", TEST_ADDRESS_C, Some(TEST_ADDRESS_A)),
    ]
}

#[tokio::test]
async fn test_draw_notifies_archives_and_pays() {
    let rpc = funded_node(1000.0);
    rpc.set_result("getbestblockhash", json!(TEST_BLOCK_HASH_HIGH));
    rpc.set_result("sendrawtransaction", json!("f00d"));
    let sink = Arc::new(RecordingSink::default());
    let source = MemoryCandidateSource::new(candidates());

    let report = runner(&rpc, &sink).run_from_source(&source).await.expect("run");

    let GiveawayReport::Completed { selection, winner, outcomes, receipt, .. } = report else { panic!("expected completed draw") };
    assert_eq!(selection.selected_index, 3);
    assert_eq!(winner, Address::new(TEST_ADDRESS_C));
    assert_eq!(outcomes.len(), 3);
    assert_eq!(receipt.attempts, 1);

    let sent = sink.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[2].template, NotificationTemplate::GiveWinner { address: Address::new(TEST_ADDRESS_C) });
    assert!(sent[..2].iter().all(|n| n.template == NotificationTemplate::GiveComplete));

    assert_eq!(source.archived().len(), 3);
    assert_eq!(source.remaining(), 0);

    let create = &rpc.calls_to("createrawtransaction")[0];
    assert_eq!(create.params[1][0], json!({ TEST_ADDRESS_C: 10.0 }));
    assert_eq!(create.params[1][1], json!({ TEST_ADDRESS_A: 1.0 }));
}

#[tokio::test]
async fn test_empty_draw_touches_nothing() {
    let rpc = funded_node(1000.0);
    let sink = Arc::new(RecordingSink::default());
    let source = MemoryCandidateSource::new(Vec::new());

    let report = runner(&rpc, &sink).run_from_source(&source).await.expect("run");

    assert_eq!(report, GiveawayReport::NoCandidates);
    assert!(rpc.calls().is_empty());
    assert!(sink.sent().is_empty());
}

#[tokio::test]
async fn test_archive_failure_stops_payout() {
    let rpc = funded_node(1000.0);
    rpc.set_result("getbestblockhash", json!(TEST_BLOCK_HASH_LOW));
    let sink = Arc::new(RecordingSink::default());
    let source = MemoryCandidateSource::failing(candidates());

    let err = runner(&rpc, &sink).run_from_source(&source).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::Message);
    assert_eq!(rpc.call_count("createrawtransaction"), 0);
    assert_eq!(source.remaining(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_block_hash_read_is_retried() {
    let rpc = funded_node(1000.0);
    rpc.push_transport_error("getbestblockhash", "connection refused");
    rpc.set_result("getbestblockhash", json!(TEST_BLOCK_HASH_LOW));
    rpc.set_result("sendrawtransaction", json!("f00d"));
    let sink = Arc::new(RecordingSink::default());
    let source = MemoryCandidateSource::new(candidates());

    let report = runner(&rpc, &sink).run_from_source(&source).await.expect("run");

    assert_eq!(report.winner(), Some(&Address::new(TEST_ADDRESS_A)));
    assert_eq!(rpc.call_count("getbestblockhash"), 2);
}
