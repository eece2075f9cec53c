use crate::domain::{AddressRules, PayoutSchedule, Prizes};
use crate::foundation::{
    Amount, GiveawayError, PrivateKey, SecretString, DEFAULT_ADDRESS_LENGTH, DEFAULT_ADDRESS_PREFIX, DEFAULT_FEE_STEP_UNITS,
    DEFAULT_INITIAL_FEE_UNITS, DEFAULT_MAX_BROADCAST_ATTEMPTS, DEFAULT_MAX_FEE_ATTEMPTS, DEFAULT_MAX_RETRY_DELAY_SECS,
    DEFAULT_RETRY_DELAY_SECS, DEFAULT_RPC_TIMEOUT_SECS,
};
use crate::infrastructure::rpc::{HttpNodeRpcConfig, RetryBackoff, RetryPolicy};
use figment::value::{Dict, Map};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_NODE_URL: &str = "http://127.0.0.1:3889";
pub const DEFAULT_CANDIDATES_FILE: &str = "candidates.json";
pub const DEFAULT_HISTORY_FILE: &str = "history.jsonl";

/// Ledger node RPC endpoint and credentials.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default = "default_node_url")]
    pub url: String,
    #[serde(default)]
    pub user: String,
    #[serde(default = "empty_secret", skip_serializing)]
    pub password: SecretString,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self { url: default_node_url(), user: String::new(), password: empty_secret(), timeout_secs: default_timeout_secs() }
    }
}

impl NodeConfig {
    pub fn to_http_config(&self) -> HttpNodeRpcConfig {
        HttpNodeRpcConfig::new(self.url.clone(), self.user.clone(), self.password.clone()).with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub address: String,
    #[serde(default = "empty_secret", skip_serializing)]
    pub private_key: PrivateKey,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self { address: String::new(), private_key: empty_secret() }
    }
}

/// Prize table in coins.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrizeConfig {
    #[serde(default = "default_register")]
    pub register: Amount,
    #[serde(default = "default_referral")]
    pub referral: Amount,
    #[serde(default = "default_master")]
    pub master: Amount,
    /// Share of `master` paid to the winner's referral.
    #[serde(default = "default_ref_master")]
    pub ref_master: f64,
}

impl Default for PrizeConfig {
    fn default() -> Self {
        Self { register: default_register(), referral: default_referral(), master: default_master(), ref_master: default_ref_master() }
    }
}

impl PrizeConfig {
    pub fn prizes(&self) -> Prizes {
        Prizes { register: self.register, referral: self.referral, master: self.master, ref_master: self.ref_master }
    }
}

/// Payout instant, fee escalation and broadcast retry settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PayoutConfig {
    #[serde(default = "default_hour")]
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
    #[serde(default)]
    pub second: u8,
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_initial_fee")]
    pub initial_fee: Amount,
    #[serde(default = "default_fee_step")]
    pub fee_step: Amount,
    #[serde(default = "default_max_fee_attempts")]
    pub max_fee_attempts: u32,
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    #[serde(default)]
    pub retry_backoff: RetryBackoff,
    #[serde(default = "default_max_retry_delay_secs")]
    pub max_retry_delay_secs: u64,
    #[serde(default = "default_max_broadcast_attempts")]
    pub max_broadcast_attempts: u32,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            hour: default_hour(),
            minute: 0,
            second: 0,
            utc_offset_minutes: 0,
            initial_fee: default_initial_fee(),
            fee_step: default_fee_step(),
            max_fee_attempts: default_max_fee_attempts(),
            retry_delay_secs: default_retry_delay_secs(),
            retry_backoff: RetryBackoff::Fixed,
            max_retry_delay_secs: default_max_retry_delay_secs(),
            max_broadcast_attempts: default_max_broadcast_attempts(),
        }
    }
}

impl PayoutConfig {
    pub fn schedule(&self) -> Result<PayoutSchedule, GiveawayError> {
        PayoutSchedule::new(self.hour, self.minute, self.second, self.utc_offset_minutes)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(Duration::from_secs(self.retry_delay_secs), Duration::from_secs(self.max_retry_delay_secs), self.retry_backoff)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrationConfig {
    #[serde(default = "default_address_prefix")]
    pub address_prefix: String,
    #[serde(default = "default_address_length")]
    pub address_length: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self { address_prefix: default_address_prefix(), address_length: default_address_length() }
    }
}

impl RegistrationConfig {
    pub fn address_rules(&self) -> AddressRules {
        AddressRules { prefix: self.address_prefix.clone(), length: self.address_length }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub data_dir: String,
    /// JSON list of registered candidates. Relative paths resolve against `data_dir`.
    #[serde(default)]
    pub candidates_file: String,
    /// Draw history, one JSON outcome per line. Relative paths resolve against `data_dir`.
    #[serde(default)]
    pub history_file: String,
    /// Directory for rolling log files. Console-only when empty.
    #[serde(default)]
    pub log_dir: String,
}

impl ServiceConfig {
    fn resolve(&self, file: &str) -> PathBuf {
        let path = PathBuf::from(file);
        if path.is_absolute() {
            path
        } else {
            PathBuf::from(&self.data_dir).join(path)
        }
    }

    pub fn candidates_path(&self) -> PathBuf {
        self.resolve(&self.candidates_file)
    }

    pub fn history_path(&self) -> PathBuf {
        self.resolve(&self.history_file)
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        let trimmed = self.log_dir.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub prize: PrizeConfig,
    #[serde(default)]
    pub payout: PayoutConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default, skip_serializing)]
    pub profiles: Option<Map<String, Dict>>,
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_node_url() -> String {
    DEFAULT_NODE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_RPC_TIMEOUT_SECS
}

fn default_register() -> Amount {
    Amount::from_units(10_000_000)
}

fn default_referral() -> Amount {
    Amount::from_units(5_000_000)
}

fn default_master() -> Amount {
    Amount::from_units(100_000_000)
}

fn default_ref_master() -> f64 {
    0.1
}

fn default_hour() -> u8 {
    20
}

fn default_initial_fee() -> Amount {
    Amount::from_units(DEFAULT_INITIAL_FEE_UNITS)
}

fn default_fee_step() -> Amount {
    Amount::from_units(DEFAULT_FEE_STEP_UNITS)
}

fn default_max_fee_attempts() -> u32 {
    DEFAULT_MAX_FEE_ATTEMPTS
}

fn default_retry_delay_secs() -> u64 {
    DEFAULT_RETRY_DELAY_SECS
}

fn default_max_retry_delay_secs() -> u64 {
    DEFAULT_MAX_RETRY_DELAY_SECS
}

fn default_max_broadcast_attempts() -> u32 {
    DEFAULT_MAX_BROADCAST_ATTEMPTS
}

fn default_address_prefix() -> String {
    DEFAULT_ADDRESS_PREFIX.to_string()
}

fn default_address_length() -> usize {
    DEFAULT_ADDRESS_LENGTH
}
