use crate::foundation::GiveawayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

pub use secrecy::{ExposeSecret, SecretString};

macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id_type!(Address);
define_id_type!(TransactionId);

fn validate_tx_hex(what: &str, hex_str: &str) -> Result<(), GiveawayError> {
    if hex_str.is_empty() {
        return Err(GiveawayError::InvalidHex { what: what.to_string(), details: "empty".to_string() });
    }
    hex::decode(hex_str).map(|_| ()).map_err(|err| GiveawayError::InvalidHex { what: what.to_string(), details: err.to_string() })
}

/// Raw transaction returned by `createrawtransaction`, not yet signed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsignedTransaction(String);

impl UnsignedTransaction {
    pub fn from_hex(hex_str: impl Into<String>) -> Result<Self, GiveawayError> {
        let hex_str = hex_str.into();
        validate_tx_hex("unsigned transaction", &hex_str)?;
        Ok(Self(hex_str))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

/// Fully signed raw transaction, optionally with the txid the node decoded for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransaction {
    hex: String,
    txid: Option<TransactionId>,
}

impl SignedTransaction {
    pub fn from_hex(hex_str: impl Into<String>) -> Result<Self, GiveawayError> {
        let hex_str = hex_str.into();
        validate_tx_hex("signed transaction", &hex_str)?;
        Ok(Self { hex: hex_str, txid: None })
    }

    pub fn with_txid(mut self, txid: TransactionId) -> Self {
        self.txid = Some(txid);
        self
    }

    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    pub fn txid(&self) -> Option<&TransactionId> {
        self.txid.as_ref()
    }
}

/// Wallet signing key in the node's text encoding.
pub type PrivateKey = SecretString;
