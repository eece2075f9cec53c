//! System-wide constants for the giveaway payout engine.

/// Base units per coin (10^7). Node balances and UTXO values are reported in base units.
pub const AMOUNT_SCALE: u64 = 10_000_000;

/// Fractional digits carried by an [`crate::foundation::Amount`] when rendered in coins.
pub const AMOUNT_DECIMALS: usize = 7;

/// Fee tried first by the escalator when no override is configured (0.01 coin).
pub const DEFAULT_INITIAL_FEE_UNITS: u64 = AMOUNT_SCALE / 100;

/// Fee increment applied after each failed build (0.01 coin).
pub const DEFAULT_FEE_STEP_UNITS: u64 = AMOUNT_SCALE / 100;

/// Upper bound on build attempts before the escalator gives up.
pub const DEFAULT_MAX_FEE_ATTEMPTS: u32 = 100;

/// Delay between payout attempts after a rejected broadcast.
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 3;

/// Ceiling for backoff-based retry delays.
pub const DEFAULT_MAX_RETRY_DELAY_SECS: u64 = 60;

/// Full payout units attempted before the coordinator reports exhaustion.
pub const DEFAULT_MAX_BROADCAST_ATTEMPTS: u32 = 20;

/// Per-call HTTP timeout for node RPC requests.
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

/// Number of leading hex characters of the entropy source used for winner selection.
pub const ENTROPY_PREFIX_LEN: usize = 13;

/// Tries for the block-hash read that seeds a draw.
pub const ENTROPY_READ_ATTEMPTS: u32 = 3;

/// Expected length of a ledger address.
pub const DEFAULT_ADDRESS_LENGTH: usize = 34;

/// Leading character of a valid ledger address.
pub const DEFAULT_ADDRESS_PREFIX: &str = "S";

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Environment override for the wall clock, in unix seconds. Used by tests and dry runs.
pub const TEST_NOW_SECS_ENV_VAR: &str = "GIVEAWAY_TEST_NOW_SECS";
