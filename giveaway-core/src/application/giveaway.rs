use crate::application::notification::{notify_all, NotificationSink};
use crate::application::payout::{PayoutCoordinator, PayoutReceipt};
use crate::domain::{plan_giveaway, Candidate, CandidateOutcome, Prizes, WinnerSelection};
use crate::foundation::{Address, Amount, GiveawayError, ENTROPY_READ_ATTEMPTS};
use crate::infrastructure::rpc::retry;
use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;

/// Registered candidates for the next draw, plus the store that receives draw history.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn candidates(&self) -> Result<Vec<Candidate>, GiveawayError>;

    /// Records the draw and retires its candidates.
    async fn archive(&self, outcomes: &[CandidateOutcome]) -> Result<(), GiveawayError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GiveawayReport {
    NoCandidates,
    Completed {
        selection: WinnerSelection,
        winner: Address,
        outcomes: Vec<CandidateOutcome>,
        notifications_failed: usize,
        receipt: PayoutReceipt,
    },
}

impl GiveawayReport {
    pub fn winner(&self) -> Option<&Address> {
        match self {
            GiveawayReport::Completed { winner, .. } => Some(winner),
            GiveawayReport::NoCandidates => None,
        }
    }
}

pub struct GiveawayRunner {
    coordinator: Arc<PayoutCoordinator>,
    sink: Arc<dyn NotificationSink>,
    prizes: Prizes,
    fee: Amount,
}

impl GiveawayRunner {
    pub fn new(coordinator: Arc<PayoutCoordinator>, sink: Arc<dyn NotificationSink>, prizes: Prizes, fee: Amount) -> Self {
        Self { coordinator, sink, prizes, fee }
    }

    pub async fn run_from_source(&self, source: &dyn CandidateSource) -> Result<GiveawayReport, GiveawayError> {
        let candidates = source.candidates().await?;
        self.run(&candidates, source).await
    }

    pub async fn run(&self, candidates: &[Candidate], source: &dyn CandidateSource) -> Result<GiveawayReport, GiveawayError> {
        if candidates.is_empty() {
            info!("giveaway skipped reason=no_candidates");
            return Ok(GiveawayReport::NoCandidates);
        }

        let chain = self.coordinator.chain();
        let entropy = retry(ENTROPY_READ_ATTEMPTS, self.coordinator.retry_policy(), || chain.best_block_hash()).await?;
        let plan = plan_giveaway(candidates, &entropy, &self.prizes)?;
        info!(
            "giveaway winner selected index={} candidate_count={} winner={} entropy={}",
            plan.selection.selected_index, plan.selection.candidate_count, plan.winner.address, entropy
        );

        let notifications_failed = notify_all(self.sink.as_ref(), &plan.notifications).await;

        if let Err(err) = source.archive(&plan.outcomes).await {
            error!("giveaway archive failed; payout not started error={}", err);
            return Err(err);
        }

        let receipt = self.coordinator.payout(plan.payables, self.fee).await?;
        info!(
            "giveaway complete winner={} txid={} attempts={}",
            plan.winner.address,
            receipt.txid.as_ref().map(|t| t.as_str()).unwrap_or("-"),
            receipt.attempts
        );
        Ok(GiveawayReport::Completed {
            selection: plan.selection,
            winner: plan.winner.address,
            outcomes: plan.outcomes,
            notifications_failed,
            receipt,
        })
    }
}
