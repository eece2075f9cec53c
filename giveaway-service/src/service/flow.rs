use crate::service::candidates::FileCandidateSource;
use crate::service::notifier::LogNotificationSink;
use giveaway_core::application::{
    CompositeObserver, FeeEscalator, GiveawayRunner, GiveawayScheduler, NotificationSink, PayoutCoordinator, PayoutObserver, Registrar,
    RegistrationValidator,
};
use giveaway_core::domain::{PayoutSchedule, Wallet};
use giveaway_core::foundation::{Address, GiveawayError};
use giveaway_core::infrastructure::config::AppConfig;
use giveaway_core::infrastructure::rpc::{ChainReader, HttpNodeRpc, NodeRpc};
use log::info;
use std::sync::Arc;

/// Wires the node client, payout coordinator and giveaway collaborators from one config.
pub struct ServiceFlow {
    config: AppConfig,
    rpc: Arc<dyn NodeRpc>,
    coordinator: Arc<PayoutCoordinator>,
    source: Arc<FileCandidateSource>,
    sink: Arc<dyn NotificationSink>,
    schedule: PayoutSchedule,
}

impl ServiceFlow {
    pub fn new(config: &AppConfig) -> Result<Self, GiveawayError> {
        let client = HttpNodeRpc::new(config.node.to_http_config())?;
        info!("node client ready url={} timeout_secs={}", client.redacted_url(), config.node.timeout_secs);
        Self::new_with_rpc(config, Arc::new(client))
    }

    pub fn new_with_rpc(config: &AppConfig, rpc: Arc<dyn NodeRpc>) -> Result<Self, GiveawayError> {
        let schedule = config.payout.schedule()?;
        let wallet = Wallet::new(config.wallet.address.clone(), config.wallet.private_key.clone());
        let observer: Arc<dyn PayoutObserver> = Arc::new(CompositeObserver::new());
        let coordinator = PayoutCoordinator::new(rpc.clone(), wallet)
            .with_escalator(FeeEscalator::new(config.payout.fee_step, config.payout.max_fee_attempts))
            .with_retry_policy(config.payout.retry_policy())
            .with_max_broadcast_attempts(config.payout.max_broadcast_attempts)
            .with_observer(observer);
        let source = Arc::new(FileCandidateSource::new(config.service.candidates_path(), config.service.history_path()));
        Ok(Self {
            config: config.clone(),
            rpc,
            coordinator: Arc::new(coordinator),
            source,
            sink: Arc::new(LogNotificationSink),
            schedule,
        })
    }

    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn rpc(&self) -> Arc<dyn NodeRpc> {
        self.rpc.clone()
    }

    pub fn coordinator(&self) -> Arc<PayoutCoordinator> {
        self.coordinator.clone()
    }

    pub fn source(&self) -> Arc<FileCandidateSource> {
        self.source.clone()
    }

    pub fn schedule(&self) -> PayoutSchedule {
        self.schedule
    }

    pub fn runner(&self) -> GiveawayRunner {
        GiveawayRunner::new(self.coordinator.clone(), self.sink.clone(), self.config.prize.prizes(), self.config.payout.initial_fee)
    }

    pub fn scheduler(&self) -> GiveawayScheduler {
        GiveawayScheduler::new(self.runner(), self.source.clone(), self.schedule)
    }

    pub fn validator(&self) -> RegistrationValidator {
        let chain = ChainReader::new(self.rpc.clone(), Address::new(self.config.wallet.address.clone()));
        RegistrationValidator::new(chain, self.config.registration.address_rules(), self.config.prize.prizes())
    }

    pub fn registrar(&self) -> Registrar {
        Registrar::new(self.validator(), self.coordinator.clone(), self.sink.clone(), self.config.payout.initial_fee)
    }
}
