use crate::fixtures::{candidate, coins, test_prizes, TEST_ADDRESS_A, TEST_ADDRESS_B, TEST_ADDRESS_C, TEST_BLOCK_HASH_HIGH};
use giveaway_core::domain::giveaway::prize_payables;
use giveaway_core::domain::{plan_giveaway, NotificationTemplate, Prizes};

#[test]
fn test_outcomes_cover_every_candidate() {
    let candidates = vec![
        candidate("a@example.com", TEST_ADDRESS_A, None),
        candidate("b@example.com", TEST_ADDRESS_B, None),
        candidate("c@example.com", TEST_ADDRESS_C, Some(TEST_ADDRESS_A)),
    ];
    let plan = plan_giveaway(&candidates, TEST_BLOCK_HASH_HIGH, &test_prizes()).expect("plan");

    assert_eq!(plan.selection.selected_index, 3);
    let numbers: Vec<_> = plan.outcomes.iter().map(|o| o.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(plan.outcomes.iter().all(|o| o.calculated_hash == TEST_BLOCK_HASH_HIGH && o.bids_count == 3));
    assert!(plan.outcomes[2].is_winner);
    assert_eq!(plan.notifications.len(), 3);
    assert!(matches!(plan.notifications[2].template, NotificationTemplate::GiveWinner { .. }));
    assert_eq!(plan.payables.total().expect("total"), coins(11.0));
}

#[test]
fn test_zero_ref_master_skips_referral_output() {
    let prizes = Prizes { ref_master: 0.0, ..test_prizes() };
    let winner = candidate("a@example.com", TEST_ADDRESS_A, Some(TEST_ADDRESS_B));
    let payables = prize_payables(&winner, &prizes).expect("payables");
    assert_eq!(payables.len(), 1);
}
