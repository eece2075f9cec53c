#![allow(dead_code)]

pub const TEST_WALLET_ADDRESS: &str = "SNcRk1ZTUQCQZVFcXrkQSR1BTfbDyzqBbt";
pub const TEST_WALLET_KEY: &str = "cVt4o7BGAig1UXywgGSmARhxMdzP5qvQsxKkSsc1XEkw3tDTQFpy";
pub const TEST_ADDRESS_A: &str = "SY2kNKexBwJt1s7cd3KdphdPCGmVoSmbUN";
pub const TEST_ADDRESS_B: &str = "SVUt7GDHZrejN17XE8a2GEbACC8VAmn4sk";
pub const TEST_ADDRESS_C: &str = "SfkhpUCf4cXEFrvKvGc5NHrVZ7eB4e9Hb3";
pub const TEST_BLOCK_HASH_LOW: &str = "0000000000000a3f5e0c1b2d4f6a8c9e0b1d2f3a4c5e6f708192a3b4c5d6e7f8";
pub const TEST_BLOCK_HASH_HIGH: &str = "fffffffffffff3f5e0c1b2d4f6a8c9e0b1d2f3a4c5e6f708192a3b4c5d6e7f8";
pub const TEST_SIGNED_TXID: &str = "9a0c3b1e7f5d2a4c6e8b0d1f3a5c7e9b2d4f6a8c0e1b3d5f7a9c2e4b6d8f0a1c";
