use crate::foundation::{Address, Amount, GiveawayError, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payable {
    pub address: Address,
    pub amount: Amount,
}

impl Payable {
    pub fn new(address: impl Into<Address>, amount: Amount) -> Self {
        Self { address: address.into(), amount }
    }
}

/// Ordered payout obligations.
///
/// Entries are kept in insertion order. [`PayableSet::aggregate`] folds repeated addresses
/// into the position of their first occurrence, so two bonuses for the same registrant
/// become one output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayableSet {
    entries: Vec<Payable>,
}

impl PayableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, address: impl Into<Address>, amount: Amount) {
        self.entries.push(Payable::new(address, amount));
    }

    pub fn with(mut self, address: impl Into<Address>, amount: Amount) -> Self {
        self.push(address, amount);
        self
    }

    pub fn aggregate(self) -> Result<Self, GiveawayError> {
        let mut merged: Vec<Payable> = Vec::with_capacity(self.entries.len());
        for payable in self.entries {
            match merged.iter_mut().find(|existing| existing.address == payable.address) {
                Some(existing) => {
                    existing.amount = existing
                        .amount
                        .checked_add(payable.amount)
                        .ok_or_else(|| GiveawayError::Message(format!("payable overflow for {}", payable.address)))?;
                }
                None => merged.push(payable),
            }
        }
        Ok(Self { entries: merged })
    }

    /// Checks the set is non-empty and every amount is strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.entries.is_empty() {
            return Err(ValidationError::EmptyPayables);
        }
        if let Some(zero) = self.entries.iter().find(|p| p.amount.is_zero()) {
            return Err(ValidationError::NonPositiveAmount { address: zero.address.to_string() });
        }
        Ok(())
    }

    pub fn total(&self) -> Result<Amount, GiveawayError> {
        Amount::checked_sum(self.entries.iter().map(|p| &p.amount))
            .ok_or_else(|| GiveawayError::Message("payable total overflow".to_string()))
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.entries.iter().any(|p| &p.address == address)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Payable> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Payable> for PayableSet {
    fn from_iter<T: IntoIterator<Item = Payable>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a PayableSet {
    type Item = &'a Payable;
    type IntoIter = std::slice::Iter<'a, Payable>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
