use crate::application::giveaway::{CandidateSource, GiveawayReport, GiveawayRunner};
use crate::domain::PayoutSchedule;
use crate::foundation::util::time::now_utc;
use crate::foundation::{ErrorCode, GiveawayError};
use log::{error, info, warn};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

pub type Clock = Arc<dyn Fn() -> OffsetDateTime + Send + Sync>;

/// Sleeps until each daily payout instant and runs the giveaway.
///
/// Cancellation only interrupts the sleep. A giveaway that has started runs to completion or
/// failure before the token is checked again.
pub struct GiveawayScheduler {
    runner: GiveawayRunner,
    source: Arc<dyn CandidateSource>,
    schedule: PayoutSchedule,
    clock: Clock,
    last_instant: Option<OffsetDateTime>,
}

impl GiveawayScheduler {
    pub fn new(runner: GiveawayRunner, source: Arc<dyn CandidateSource>, schedule: PayoutSchedule) -> Self {
        Self { runner, source, schedule, clock: Arc::new(now_utc), last_instant: None }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn schedule(&self) -> &PayoutSchedule {
        &self.schedule
    }

    /// Next instant to run at. Never repeats an instant that already ran.
    pub fn next_instant(&self) -> OffsetDateTime {
        let now = (self.clock)();
        let next = self.schedule.next_payout(now);
        match self.last_instant {
            Some(last) if next <= last => last + time::Duration::days(1),
            _ => next,
        }
    }

    pub async fn run(&mut self, shutdown: CancellationToken) -> Result<(), GiveawayError> {
        info!("giveaway scheduler started payout_time={} utc_offset={}", self.schedule.time_of_day(), self.schedule.offset());
        loop {
            let next = self.next_instant();
            let wait = (next - (self.clock)()).max(time::Duration::ZERO);
            let wait = std::time::Duration::try_from(wait).unwrap_or_default();
            info!("next giveaway scheduled at={} wait_secs={}", next, wait.as_secs());

            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("giveaway scheduler stopping");
                    return Ok(());
                }
                _ = sleep(wait) => {}
            }

            self.last_instant = Some(next);
            match self.run_once().await {
                Ok(GiveawayReport::NoCandidates) => {}
                Ok(report) => info!("scheduled giveaway finished winner={}", report.winner().map(|w| w.as_str()).unwrap_or("-")),
                Err(err) if err.code() == ErrorCode::BroadcastExhausted => {
                    error!("scheduled giveaway payout exhausted; operator action required error={}", err)
                }
                Err(err) => warn!("scheduled giveaway failed code={} error={}", err.code(), err),
            }
        }
    }

    /// Runs one draw immediately, outside the schedule.
    pub async fn run_once(&self) -> Result<GiveawayReport, GiveawayError> {
        self.runner.run_from_source(self.source.as_ref()).await
    }
}
