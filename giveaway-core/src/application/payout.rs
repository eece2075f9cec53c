use crate::application::broadcaster::Broadcaster;
use crate::application::builder::TransactionBuilder;
use crate::application::fee::FeeEscalator;
use crate::application::lifecycle::{NoopObserver, PayoutObserver};
use crate::application::signer::Signer;
use crate::domain::{PayableSet, PayoutRequest, Wallet};
use crate::foundation::{Amount, GiveawayError, TransactionId, ValidationError, DEFAULT_MAX_BROADCAST_ATTEMPTS};
use crate::infrastructure::rpc::{ChainReader, NodeRpc, RetryPolicy};
use log::{error, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoutReceipt {
    pub txid: Option<TransactionId>,
    pub fee: Amount,
    /// Payout units run, including the one that succeeded.
    pub attempts: u32,
    /// Set when a rejected-looking broadcast turned out to be on the node already.
    pub already_accepted: bool,
}

enum UnitFailure {
    Retriable(String),
    Fatal(GiveawayError),
}

impl From<GiveawayError> for UnitFailure {
    fn from(err: GiveawayError) -> Self {
        if err.is_transient() {
            UnitFailure::Retriable(err.to_string())
        } else {
            UnitFailure::Fatal(err)
        }
    }
}

/// Drives fee-escalated build, sign and broadcast until the payout lands.
///
/// One wallet lock is held for the whole payout, so units never interleave. After a
/// rejected broadcast or transient failure the coordinator waits per its retry policy,
/// checks whether the last signed transaction is already on the node, and otherwise
/// restarts the unit from a fresh balance and UTXO read.
pub struct PayoutCoordinator {
    builder: TransactionBuilder,
    escalator: FeeEscalator,
    signer: Signer,
    broadcaster: Broadcaster,
    retry_policy: RetryPolicy,
    max_broadcast_attempts: u32,
    wallet_lock: Arc<Mutex<()>>,
    observer: Arc<dyn PayoutObserver>,
}

impl PayoutCoordinator {
    pub fn new(rpc: Arc<dyn NodeRpc>, wallet: Wallet) -> Self {
        let chain = ChainReader::new(rpc.clone(), wallet.address.clone());
        Self {
            builder: TransactionBuilder::new(chain),
            escalator: FeeEscalator::default(),
            signer: Signer::new(rpc.clone(), wallet.private_key),
            broadcaster: Broadcaster::new(rpc),
            retry_policy: RetryPolicy::default(),
            max_broadcast_attempts: DEFAULT_MAX_BROADCAST_ATTEMPTS,
            wallet_lock: Arc::new(Mutex::new(())),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_builder(mut self, builder: TransactionBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn with_escalator(mut self, escalator: FeeEscalator) -> Self {
        self.escalator = escalator;
        self
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn with_max_broadcast_attempts(mut self, attempts: u32) -> Self {
        self.max_broadcast_attempts = attempts.max(1);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn PayoutObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Shares a wallet lock with another coordinator paying from the same wallet.
    pub fn with_wallet_lock(mut self, lock: Arc<Mutex<()>>) -> Self {
        self.wallet_lock = lock;
        self
    }

    pub fn chain(&self) -> &ChainReader {
        self.builder.chain()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    pub async fn payout(&self, payables: PayableSet, fee: Amount) -> Result<PayoutReceipt, GiveawayError> {
        self.execute(PayoutRequest { payables, fee }).await
    }

    pub async fn execute(&self, request: PayoutRequest) -> Result<PayoutReceipt, GiveawayError> {
        let payables = request.payables.aggregate()?;
        payables.validate()?;
        let wallet = self.chain().wallet();
        if payables.contains(wallet) {
            return Err(ValidationError::PaysOwnWallet { address: wallet.to_string() }.into());
        }

        let _guard = self.wallet_lock.lock().await;
        info!("payout start payable_count={} total={} fee={}", payables.len(), payables.total()?, request.fee);

        let mut last_txid: Option<TransactionId> = None;
        let mut last_fee = request.fee;
        let mut last_error = String::new();

        for attempt in 1..=self.max_broadcast_attempts {
            self.observer.on_attempt_started(attempt);
            match self.run_unit(&payables, request.fee, attempt, &mut last_txid, &mut last_fee).await {
                Ok(txid) => {
                    self.observer.on_completed(txid.as_ref(), attempt);
                    return Ok(PayoutReceipt { txid, fee: last_fee, attempts: attempt, already_accepted: false });
                }
                Err(UnitFailure::Fatal(err)) => {
                    error!("payout failed attempt={} code={} error={}", attempt, err.code(), err);
                    return Err(err);
                }
                Err(UnitFailure::Retriable(message)) => last_error = message,
            }

            if attempt == self.max_broadcast_attempts {
                break;
            }
            let delay = self.retry_policy.delay_for(attempt);
            warn!("payout attempt failed; retrying attempt={} delay_ms={} error={}", attempt, delay.as_millis(), last_error);
            sleep(delay).await;

            if let Some(txid) = &last_txid {
                match self.chain().transaction_known(txid).await {
                    Ok(true) => {
                        self.observer.on_verified_accepted(txid);
                        self.observer.on_completed(Some(txid), attempt);
                        return Ok(PayoutReceipt { txid: Some(txid.clone()), fee: last_fee, attempts: attempt, already_accepted: true });
                    }
                    Ok(false) => {}
                    Err(err) => warn!("could not verify earlier broadcast txid={} error={}", txid, err),
                }
            }
        }

        error!("payout broadcast exhausted attempts={} last_error={}", self.max_broadcast_attempts, last_error);
        self.observer.on_exhausted(self.max_broadcast_attempts, &last_error);
        Err(GiveawayError::BroadcastExhausted { attempts: self.max_broadcast_attempts, last_error })
    }

    async fn run_unit(
        &self,
        payables: &PayableSet,
        initial_fee: Amount,
        attempt: u32,
        last_txid: &mut Option<TransactionId>,
        last_fee: &mut Amount,
    ) -> Result<Option<TransactionId>, UnitFailure> {
        let built = self.escalator.escalate(&self.builder, payables, initial_fee, self.observer.as_ref()).await?;
        *last_fee = built.fee;

        let mut signed = self.signer.sign(&built.transaction).await?;
        match self.chain().decode_txid(&signed).await {
            Ok(txid) => {
                *last_txid = Some(txid.clone());
                signed = signed.with_txid(txid);
            }
            Err(err) => warn!("could not decode signed transaction attempt={} error={}", attempt, err),
        }
        self.observer.on_signed(signed.txid());

        let report = self.broadcaster.broadcast(&signed).await?;
        if report.accepted {
            return Ok(report.txid.or_else(|| signed.txid().cloned()));
        }
        let message = report.error.unwrap_or_else(|| "unknown broadcast error".to_string());
        self.observer.on_broadcast_rejected(attempt, &message);
        Err(UnitFailure::Retriable(message))
    }
}
