use crate::fixtures::{TEST_BLOCK_HASH_HIGH, TEST_BLOCK_HASH_LOW};
use giveaway_core::domain::select_winner;
use giveaway_core::foundation::ErrorCode;

#[test]
fn test_zero_prefix_selects_first() {
    assert_eq!(select_winner(TEST_BLOCK_HASH_LOW, 5).expect("select").selected_index, 1);
}

#[test]
fn test_max_prefix_selects_last() {
    assert_eq!(select_winner(TEST_BLOCK_HASH_HIGH, 5).expect("select").selected_index, 5);
}

#[test]
fn test_index_stays_in_range() {
    let hashes = ["0000000000000", "7ffffffffffff", "8000000000000", "a3b1c9d0e2f47", "fffffffffffff", "123456789abcd"];
    for hash in hashes {
        for n in 1..=50 {
            let index = select_winner(hash, n).expect("select").selected_index;
            assert!((1..=n).contains(&index), "hash={hash} n={n} index={index}");
        }
    }
}

#[test]
fn test_selection_is_deterministic() {
    let first = select_winner(TEST_BLOCK_HASH_LOW, 17).expect("select");
    let second = select_winner(TEST_BLOCK_HASH_LOW, 17).expect("select");
    assert_eq!(first, second);
    assert_eq!(first.entropy_source, TEST_BLOCK_HASH_LOW);
}

#[test]
fn test_bad_inputs() {
    assert_eq!(select_winner(TEST_BLOCK_HASH_LOW, 0).unwrap_err().code(), ErrorCode::NoCandidates);
    assert_eq!(select_winner("abc", 3).unwrap_err().code(), ErrorCode::InvalidEntropy);
    assert_eq!(select_winner("+000000000000", 3).unwrap_err().code(), ErrorCode::InvalidEntropy);
}
