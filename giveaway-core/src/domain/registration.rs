use crate::domain::model::Prizes;
use crate::domain::notification::{Notification, NotificationTemplate};
use crate::domain::payables::PayableSet;
use crate::foundation::{Address, GiveawayError, ValidationError, DEFAULT_ADDRESS_LENGTH, DEFAULT_ADDRESS_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressRules {
    pub prefix: String,
    pub length: usize,
}

impl Default for AddressRules {
    fn default() -> Self {
        Self { prefix: DEFAULT_ADDRESS_PREFIX.to_string(), length: DEFAULT_ADDRESS_LENGTH }
    }
}

impl AddressRules {
    pub fn check(&self, address: &Address) -> Result<(), ValidationError> {
        let len = address.chars().count();
        if len != self.length {
            return Err(ValidationError::InvalidAddressFormat {
                address: address.to_string(),
                reason: format!("expected {} characters, got {}", self.length, len),
            });
        }
        if !address.starts_with(self.prefix.as_str()) {
            return Err(ValidationError::InvalidAddressFormat {
                address: address.to_string(),
                reason: format!("must start with {:?}", self.prefix),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub recipient: String,
    pub address: Address,
    #[serde(default)]
    pub referral: Option<Address>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    InvalidAddressFormat,
    SelfReferral,
    ReferralNotFound,
    AddressNotFound,
    NodeUnavailable,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::InvalidAddressFormat => "invalid_address_format",
            RejectionReason::SelfReferral => "self_referral",
            RejectionReason::ReferralNotFound => "referral_not_found",
            RejectionReason::AddressNotFound => "address_not_found",
            RejectionReason::NodeUnavailable => "node_unavailable",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationDecision {
    Accepted { payables: PayableSet, notification: Notification },
    Rejected { reason: RejectionReason, message: String },
}

impl RegistrationDecision {
    pub fn rejected(reason: RejectionReason, message: impl Into<String>) -> Self {
        RegistrationDecision::Rejected { reason, message: message.into() }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, RegistrationDecision::Accepted { .. })
    }

    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            RegistrationDecision::Rejected { reason, .. } => Some(*reason),
            RegistrationDecision::Accepted { .. } => None,
        }
    }
}

/// Format and self-referral checks. Runs before any node lookup.
pub fn precheck(rules: &AddressRules, request: &RegistrationRequest) -> Result<(), (RejectionReason, ValidationError)> {
    rules.check(&request.address).map_err(|err| (RejectionReason::InvalidAddressFormat, err))?;
    if let Some(referral) = &request.referral {
        rules.check(referral).map_err(|err| (RejectionReason::InvalidAddressFormat, err))?;
        if referral == &request.address {
            return Err((RejectionReason::SelfReferral, ValidationError::SelfReferral { address: referral.to_string() }));
        }
    }
    Ok(())
}

/// Bonus payables for an accepted registration.
///
/// Without a referral the registrant gets `register`. With one, the referral gets `referral`
/// and the registrant gets `register + referral`.
pub fn bonus_payables(request: &RegistrationRequest, prizes: &Prizes) -> Result<PayableSet, GiveawayError> {
    let mut payables = PayableSet::new();
    if let Some(referral) = &request.referral {
        payables.push(referral.clone(), prizes.referral);
        payables.push(request.address.clone(), prizes.register);
        payables.push(request.address.clone(), prizes.referral);
    } else {
        payables.push(request.address.clone(), prizes.register);
    }
    payables.aggregate()
}

pub fn accept(request: &RegistrationRequest, prizes: &Prizes) -> Result<RegistrationDecision, GiveawayError> {
    let payables = bonus_payables(request, prizes)?;
    let coins_amount = payables
        .iter()
        .find(|p| p.address == request.address)
        .map(|p| p.amount)
        .unwrap_or(prizes.register);
    let notification = Notification::new(
        request.recipient.clone(),
        NotificationTemplate::BidAccepted { coins_amount, address: request.address.clone() },
    );
    Ok(RegistrationDecision::Accepted { payables, notification })
}
