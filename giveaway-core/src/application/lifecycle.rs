use crate::foundation::{Amount, TransactionId};
use log::{debug, info, trace, warn};
use std::sync::Arc;

/// Hooks into a payout's progress. Every method defaults to a no-op.
pub trait PayoutObserver: Send + Sync {
    fn on_attempt_started(&self, _attempt: u32) {}
    fn on_fee_escalated(&self, _failed_fee: Amount, _next_fee: Amount, _reason: &str) {}
    fn on_built(&self, _fee: Amount, _fee_attempts: u32) {}
    fn on_signed(&self, _txid: Option<&TransactionId>) {}
    fn on_broadcast_rejected(&self, _attempt: u32, _error: &str) {}
    fn on_verified_accepted(&self, _txid: &TransactionId) {}
    fn on_completed(&self, _txid: Option<&TransactionId>, _attempts: u32) {}
    fn on_exhausted(&self, _attempts: u32, _last_error: &str) {}
}

pub struct NoopObserver;

impl PayoutObserver for NoopObserver {}

pub struct CompositeObserver {
    observers: Vec<Arc<dyn PayoutObserver>>,
}

impl CompositeObserver {
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub fn add_observer(&mut self, observer: Arc<dyn PayoutObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Default for CompositeObserver {
    fn default() -> Self {
        Self::new()
    }
}

fn fmt_txid(txid: Option<&TransactionId>) -> &str {
    txid.map(|t| t.as_str()).unwrap_or("-")
}

impl PayoutObserver for CompositeObserver {
    fn on_attempt_started(&self, attempt: u32) {
        trace!("on_attempt_started dispatch observer_count={} attempt={}", self.observers.len(), attempt);
        for observer in &self.observers {
            observer.on_attempt_started(attempt);
        }
    }

    fn on_fee_escalated(&self, failed_fee: Amount, next_fee: Amount, reason: &str) {
        debug!("fee escalated failed_fee={} next_fee={} reason={}", failed_fee, next_fee, reason);
        for observer in &self.observers {
            observer.on_fee_escalated(failed_fee, next_fee, reason);
        }
    }

    fn on_built(&self, fee: Amount, fee_attempts: u32) {
        debug!("transaction built fee={} fee_attempts={}", fee, fee_attempts);
        for observer in &self.observers {
            observer.on_built(fee, fee_attempts);
        }
    }

    fn on_signed(&self, txid: Option<&TransactionId>) {
        debug!("transaction signed txid={}", fmt_txid(txid));
        for observer in &self.observers {
            observer.on_signed(txid);
        }
    }

    fn on_broadcast_rejected(&self, attempt: u32, error: &str) {
        warn!("broadcast rejected attempt={} error={}", attempt, error);
        for observer in &self.observers {
            observer.on_broadcast_rejected(attempt, error);
        }
    }

    fn on_verified_accepted(&self, txid: &TransactionId) {
        info!("earlier broadcast found on node txid={}", txid);
        for observer in &self.observers {
            observer.on_verified_accepted(txid);
        }
    }

    fn on_completed(&self, txid: Option<&TransactionId>, attempts: u32) {
        info!("payout completed txid={} attempts={}", fmt_txid(txid), attempts);
        for observer in &self.observers {
            observer.on_completed(txid, attempts);
        }
    }

    fn on_exhausted(&self, attempts: u32, last_error: &str) {
        trace!("on_exhausted dispatch observer_count={} attempts={}", self.observers.len(), attempts);
        for observer in &self.observers {
            observer.on_exhausted(attempts, last_error);
        }
    }
}
