use crate::foundation::constants::{AMOUNT_DECIMALS, AMOUNT_SCALE};
use crate::foundation::GiveawayError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fixed-point ledger amount stored as integer base units (1 coin = 10^7 units).
///
/// Arithmetic is exact; conversion to and from floating-point coins only happens at the
/// JSON boundary, where the node expects plain numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Parses a coin value, rounding to the nearest base unit.
    pub fn from_coins(coins: f64) -> Result<Self, GiveawayError> {
        if !coins.is_finite() {
            return Err(GiveawayError::Message(format!("amount must be finite, got {}", coins)));
        }
        if coins < 0.0 {
            return Err(GiveawayError::Message(format!("amount must not be negative, got {}", coins)));
        }
        let units = (coins * AMOUNT_SCALE as f64).round();
        if units > u64::MAX as f64 {
            return Err(GiveawayError::Message(format!("amount out of range: {}", coins)));
        }
        Ok(Self(units as u64))
    }

    pub fn as_coins(&self) -> f64 {
        self.0 as f64 / AMOUNT_SCALE as f64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// `None` when the result would be negative.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }

    /// Multiplies by a non-negative ratio, rounding to the nearest base unit.
    pub fn scaled(self, ratio: f64) -> Result<Amount, GiveawayError> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(GiveawayError::Message(format!("invalid amount ratio {}", ratio)));
        }
        let units = (self.0 as f64 * ratio).round();
        if units > u64::MAX as f64 {
            return Err(GiveawayError::Message(format!("scaled amount out of range: {} * {}", self, ratio)));
        }
        Ok(Amount(units as u64))
    }

    pub fn checked_sum<'a, I>(amounts: I) -> Option<Amount>
    where
        I: IntoIterator<Item = &'a Amount>,
    {
        amounts.into_iter().try_fold(Amount::ZERO, |acc, amount| acc.checked_add(*amount))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / AMOUNT_SCALE;
        let frac = self.0 % AMOUNT_SCALE;
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:0width$}", frac, width = AMOUNT_DECIMALS);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_coins())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let coins = f64::deserialize(deserializer)?;
        Amount::from_coins(coins).map_err(serde::de::Error::custom)
    }
}
