use crate::application::builder::{BuildOutcome, TransactionBuilder};
use crate::application::lifecycle::PayoutObserver;
use crate::domain::{PayableSet, TransactionPlan};
use crate::foundation::{Amount, GiveawayError, DEFAULT_FEE_STEP_UNITS, DEFAULT_MAX_FEE_ATTEMPTS};
use crate::foundation::UnsignedTransaction;
use log::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscalatedBuild {
    pub transaction: UnsignedTransaction,
    pub plan: TransactionPlan,
    pub fee: Amount,
    /// Build attempts including the successful one.
    pub attempts: u32,
}

/// Retries the build with a rising fee until the node accepts one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeEscalator {
    pub fee_step: Amount,
    pub max_attempts: u32,
}

impl Default for FeeEscalator {
    fn default() -> Self {
        Self { fee_step: Amount::from_units(DEFAULT_FEE_STEP_UNITS), max_attempts: DEFAULT_MAX_FEE_ATTEMPTS }
    }
}

impl FeeEscalator {
    pub fn new(fee_step: Amount, max_attempts: u32) -> Self {
        Self { fee_step, max_attempts }
    }

    pub async fn escalate(
        &self,
        builder: &TransactionBuilder,
        payables: &PayableSet,
        initial_fee: Amount,
        observer: &dyn PayoutObserver,
    ) -> Result<EscalatedBuild, GiveawayError> {
        let mut fee = initial_fee;
        let mut last_fee = initial_fee;
        for attempt in 1..=self.max_attempts {
            match builder.build(fee, payables).await? {
                BuildOutcome::Built { transaction, plan } => {
                    observer.on_built(fee, attempt);
                    return Ok(EscalatedBuild { transaction, plan, fee, attempts: attempt });
                }
                BuildOutcome::Failed { reason, .. } => {
                    last_fee = fee;
                    let next_fee = fee.checked_add(self.fee_step).ok_or_else(|| GiveawayError::Message("fee overflow".to_string()))?;
                    debug!("build failed attempt={} fee={} next_fee={} reason={}", attempt, fee, next_fee, reason);
                    observer.on_fee_escalated(fee, next_fee, &reason);
                    fee = next_fee;
                }
            }
        }
        warn!("fee escalation exhausted attempts={} last_fee={}", self.max_attempts, last_fee);
        Err(GiveawayError::FeeExhausted { attempts: self.max_attempts, last_fee })
    }
}
