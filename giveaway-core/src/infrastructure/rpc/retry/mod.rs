use crate::foundation::{GiveawayError, DEFAULT_MAX_RETRY_DELAY_SECS, DEFAULT_RETRY_DELAY_SECS};
use log::debug;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryBackoff {
    #[default]
    Fixed,
    Linear,
    Exponential,
}

/// Delay schedule between attempts. `attempt` is 1-based: the delay after the first failure
/// is `delay_for(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff: RetryBackoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(Duration::from_secs(DEFAULT_RETRY_DELAY_SECS))
    }
}

impl RetryPolicy {
    pub fn fixed(delay: Duration) -> Self {
        Self { base_delay: delay, max_delay: delay.max(Duration::from_secs(DEFAULT_MAX_RETRY_DELAY_SECS)), backoff: RetryBackoff::Fixed }
    }

    pub fn new(base_delay: Duration, max_delay: Duration, backoff: RetryBackoff) -> Self {
        Self { base_delay, max_delay, backoff }
    }

    pub fn delay_for(&self, attempt: u32) -> Duration {
        let attempt = attempt.max(1);
        let delay = match self.backoff {
            RetryBackoff::Fixed => return self.base_delay,
            RetryBackoff::Linear => self.base_delay.saturating_mul(attempt),
            RetryBackoff::Exponential => self.base_delay.saturating_mul(2u32.saturating_pow(attempt - 1)),
        };
        delay.min(self.max_delay)
    }
}

/// Retry an async read per `policy`, up to `attempts` tries. Only transient errors are retried.
pub async fn retry<F, Fut, T>(attempts: u32, policy: RetryPolicy, mut op: F) -> Result<T, GiveawayError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GiveawayError>>,
{
    let mut last_err = None;
    for attempt in 1..=attempts {
        match op().await {
            Ok(v) => return Ok(v),
            Err(err) if !err.is_transient() => return Err(err),
            Err(err) => {
                if attempt < attempts {
                    let delay = policy.delay_for(attempt);
                    debug!("retrying read attempt={} delay_ms={} error={}", attempt, delay.as_millis(), err);
                    sleep(delay).await;
                }
                last_err = Some(err);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| GiveawayError::Message("retry exhausted".to_string())))
}
