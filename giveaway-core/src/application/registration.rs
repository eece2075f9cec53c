use crate::application::notification::NotificationSink;
use crate::application::payout::{PayoutCoordinator, PayoutReceipt};
use crate::domain::registration::{accept, precheck};
use crate::domain::{AddressRules, Prizes, RegistrationDecision, RegistrationRequest, RejectionReason};
use crate::foundation::{Address, Amount, GiveawayError};
use crate::infrastructure::rpc::ChainReader;
use log::{info, warn};
use std::sync::Arc;

/// Decides whether a bid may be registered. Node lookups never take the wallet lock.
pub struct RegistrationValidator {
    chain: ChainReader,
    rules: AddressRules,
    prizes: Prizes,
}

impl RegistrationValidator {
    pub fn new(chain: ChainReader, rules: AddressRules, prizes: Prizes) -> Self {
        Self { chain, rules, prizes }
    }

    pub async fn evaluate(&self, request: &RegistrationRequest) -> Result<RegistrationDecision, GiveawayError> {
        if let Err((reason, err)) = precheck(&self.rules, request) {
            info!("registration rejected reason={} address={}", reason, request.address);
            return Ok(RegistrationDecision::rejected(reason, err.to_string()));
        }

        if let Some(referral) = &request.referral {
            if let Some(decision) = self.lookup(referral, RejectionReason::ReferralNotFound).await {
                return Ok(decision);
            }
        }
        if let Some(decision) = self.lookup(&request.address, RejectionReason::AddressNotFound).await {
            return Ok(decision);
        }

        let decision = accept(request, &self.prizes)?;
        info!("registration accepted address={} referral={}", request.address, request.referral.as_ref().map(Address::as_str).unwrap_or("-"));
        Ok(decision)
    }

    async fn lookup(&self, address: &Address, missing: RejectionReason) -> Option<RegistrationDecision> {
        match self.chain.address_exists(address).await {
            Ok(true) => None,
            Ok(false) => {
                info!("registration rejected reason={} address={}", missing, address);
                Some(RegistrationDecision::rejected(missing, format!("address {} has no history on the node", address)))
            }
            Err(err) => {
                warn!("registration lookup failed address={} error={}", address, err);
                Some(RegistrationDecision::rejected(RejectionReason::NodeUnavailable, err.to_string()))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub decision: RegistrationDecision,
    /// Present only when the bonus payout ran.
    pub receipt: Option<PayoutReceipt>,
}

/// Validates a bid, notifies the registrant, then pays the bonus.
pub struct Registrar {
    validator: RegistrationValidator,
    coordinator: Arc<PayoutCoordinator>,
    sink: Arc<dyn NotificationSink>,
    fee: Amount,
}

impl Registrar {
    pub fn new(validator: RegistrationValidator, coordinator: Arc<PayoutCoordinator>, sink: Arc<dyn NotificationSink>, fee: Amount) -> Self {
        Self { validator, coordinator, sink, fee }
    }

    pub async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationOutcome, GiveawayError> {
        let decision = self.validator.evaluate(request).await?;
        let RegistrationDecision::Accepted { payables, notification } = &decision else {
            return Ok(RegistrationOutcome { decision, receipt: None });
        };
        if let Err(err) = self.sink.notify(notification).await {
            warn!("notification failed template={} recipient={} error={}", notification.template_name(), notification.recipient, err);
        }
        let receipt = self.coordinator.payout(payables.clone(), self.fee).await?;
        Ok(RegistrationOutcome { decision, receipt: Some(receipt) })
    }
}
