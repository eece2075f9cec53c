use crate::foundation::Amount;
use std::io;
use thiserror::Error;

/// Machine-checkable reason codes. Stable across releases; callers match on these
/// instead of parsing `Display` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    TransportError,
    RpcError,
    BuildFailure,
    FeeExhausted,
    SignError,
    BroadcastExhausted,
    InsufficientBalance,
    SelfReferral,
    InvalidAddressFormat,
    NonPositiveAmount,
    EmptyPayables,
    PaysOwnWallet,
    NoCandidates,
    InvalidEntropy,
    InvalidHex,
    ConfigError,
    SerializationError,
    Message,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::TransportError => "transport_error",
            ErrorCode::RpcError => "rpc_error",
            ErrorCode::BuildFailure => "build_failure",
            ErrorCode::FeeExhausted => "fee_exhausted",
            ErrorCode::SignError => "sign_error",
            ErrorCode::BroadcastExhausted => "broadcast_exhausted",
            ErrorCode::InsufficientBalance => "insufficient_balance",
            ErrorCode::SelfReferral => "self_referral",
            ErrorCode::InvalidAddressFormat => "invalid_address_format",
            ErrorCode::NonPositiveAmount => "non_positive_amount",
            ErrorCode::EmptyPayables => "empty_payables",
            ErrorCode::PaysOwnWallet => "pays_own_wallet",
            ErrorCode::NoCandidates => "no_candidates",
            ErrorCode::InvalidEntropy => "invalid_entropy",
            ErrorCode::InvalidHex => "invalid_hex",
            ErrorCode::ConfigError => "config_error",
            ErrorCode::SerializationError => "serialization_error",
            ErrorCode::Message => "message",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub code: ErrorCode,
    pub message: String,
}

/// Caller-side mistakes. Always raised before any node call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: Amount, available: Amount },

    #[error("address cannot refer itself: {address}")]
    SelfReferral { address: String },

    #[error("invalid address format: {address} ({reason})")]
    InvalidAddressFormat { address: String, reason: String },

    #[error("amount for {address} must be strictly positive")]
    NonPositiveAmount { address: String },

    #[error("no payables supplied")]
    EmptyPayables,

    #[error("payable targets the wallet's own address {address}")]
    PaysOwnWallet { address: String },
}

#[derive(Debug, Error)]
pub enum GiveawayError {
    #[error("transport error during {operation}: {details}")]
    TransportError { operation: String, details: String },

    #[error("node rpc {method} returned error: {message}")]
    RpcError { method: String, message: String },

    #[error("build failed at fee {fee}: {reason}")]
    BuildFailure { fee: Amount, reason: String },

    #[error("fee escalation exhausted after {attempts} attempts (last fee {last_fee})")]
    FeeExhausted { attempts: u32, last_fee: Amount },

    #[error("signing failed: {0}")]
    SignError(String),

    #[error("broadcast exhausted after {attempts} attempts: {last_error}")]
    BroadcastExhausted { attempts: u32, last_error: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no candidates to select from")]
    NoCandidates,

    #[error("invalid entropy source {entropy:?}: {reason}")]
    InvalidEntropy { entropy: String, reason: String },

    #[error("invalid hex for {what}: {details}")]
    InvalidHex { what: String, details: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("{format} serialization error: {details}")]
    SerializationError { format: String, details: String },

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, GiveawayError>;

impl GiveawayError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GiveawayError::TransportError { .. } => ErrorCode::TransportError,
            GiveawayError::RpcError { .. } => ErrorCode::RpcError,
            GiveawayError::BuildFailure { .. } => ErrorCode::BuildFailure,
            GiveawayError::FeeExhausted { .. } => ErrorCode::FeeExhausted,
            GiveawayError::SignError(_) => ErrorCode::SignError,
            GiveawayError::BroadcastExhausted { .. } => ErrorCode::BroadcastExhausted,
            GiveawayError::Validation(err) => err.code(),
            GiveawayError::NoCandidates => ErrorCode::NoCandidates,
            GiveawayError::InvalidEntropy { .. } => ErrorCode::InvalidEntropy,
            GiveawayError::InvalidHex { .. } => ErrorCode::InvalidHex,
            GiveawayError::ConfigError(_) => ErrorCode::ConfigError,
            GiveawayError::SerializationError { .. } => ErrorCode::SerializationError,
            GiveawayError::Message(_) => ErrorCode::Message,
        }
    }

    pub fn context(&self) -> ErrorContext {
        ErrorContext { code: self.code(), message: self.to_string() }
    }

    /// Errors that may clear up on their own by restarting the payout unit.
    pub fn is_transient(&self) -> bool {
        matches!(self, GiveawayError::TransportError { .. } | GiveawayError::RpcError { .. })
    }

    pub fn transport(operation: impl Into<String>, details: impl Into<String>) -> Self {
        GiveawayError::TransportError { operation: operation.into(), details: details.into() }
    }

    pub fn rpc(method: impl Into<String>, message: impl Into<String>) -> Self {
        GiveawayError::RpcError { method: method.into(), message: message.into() }
    }
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            ValidationError::SelfReferral { .. } => ErrorCode::SelfReferral,
            ValidationError::InvalidAddressFormat { .. } => ErrorCode::InvalidAddressFormat,
            ValidationError::NonPositiveAmount { .. } => ErrorCode::NonPositiveAmount,
            ValidationError::EmptyPayables => ErrorCode::EmptyPayables,
            ValidationError::PaysOwnWallet { .. } => ErrorCode::PaysOwnWallet,
        }
    }
}

impl From<hex::FromHexError> for GiveawayError {
    fn from(err: hex::FromHexError) -> Self {
        GiveawayError::InvalidHex { what: "transaction".to_string(), details: err.to_string() }
    }
}

impl From<serde_json::Error> for GiveawayError {
    fn from(err: serde_json::Error) -> Self {
        GiveawayError::SerializationError { format: "json".to_string(), details: err.to_string() }
    }
}

impl From<toml::de::Error> for GiveawayError {
    fn from(err: toml::de::Error) -> Self {
        GiveawayError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<figment::Error> for GiveawayError {
    fn from(err: figment::Error) -> Self {
        GiveawayError::ConfigError(format!("config extraction failed: {}", err))
    }
}

impl From<reqwest::Error> for GiveawayError {
    fn from(err: reqwest::Error) -> Self {
        let operation = if err.is_timeout() {
            "timeout"
        } else if err.is_connect() {
            "connect"
        } else if err.is_decode() {
            "decode"
        } else {
            "http"
        };
        GiveawayError::TransportError { operation: operation.to_string(), details: err.to_string() }
    }
}

impl From<io::Error> for GiveawayError {
    fn from(err: io::Error) -> Self {
        GiveawayError::Message(format!("io error: {}", err))
    }
}
