use crate::foundation::{GiveawayError, SECONDS_PER_DAY};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, Time, UtcOffset};

/// Daily payout instant: a wall-clock time at a fixed UTC offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayoutSchedule {
    time_of_day: Time,
    offset: UtcOffset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
}

impl TimeRemaining {
    pub fn from_seconds(total_seconds: i64) -> Self {
        let total_seconds = total_seconds.max(0);
        Self { hours: total_seconds / 3600, minutes: (total_seconds % 3600) / 60, seconds: total_seconds % 60, total_seconds }
    }
}

impl PayoutSchedule {
    pub fn new(hour: u8, minute: u8, second: u8, utc_offset_minutes: i32) -> Result<Self, GiveawayError> {
        let time_of_day = Time::from_hms(hour, minute, second)
            .map_err(|err| GiveawayError::ConfigError(format!("invalid payout time {hour:02}:{minute:02}:{second:02}: {err}")))?;
        let offset = UtcOffset::from_whole_seconds(utc_offset_minutes.saturating_mul(60))
            .map_err(|err| GiveawayError::ConfigError(format!("invalid utc offset {utc_offset_minutes} minutes: {err}")))?;
        Ok(Self { time_of_day, offset })
    }

    pub fn time_of_day(&self) -> Time {
        self.time_of_day
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    fn instant_on_day_of(&self, at: OffsetDateTime) -> OffsetDateTime {
        let local = at.to_offset(self.offset);
        local.date().with_time(self.time_of_day).assume_offset(self.offset)
    }

    /// Today's payout instant if it has not passed yet, otherwise tomorrow's.
    pub fn next_payout(&self, now: OffsetDateTime) -> OffsetDateTime {
        let today = self.instant_on_day_of(now);
        if today < now {
            today + Duration::days(1)
        } else {
            today
        }
    }

    pub fn seconds_until_payout(&self, now: OffsetDateTime) -> i64 {
        let remaining = (self.next_payout(now) - now).whole_seconds();
        remaining.clamp(0, SECONDS_PER_DAY)
    }

    pub fn time_remaining(&self, now: OffsetDateTime) -> TimeRemaining {
        TimeRemaining::from_seconds(self.seconds_until_payout(now))
    }

    /// A bid counts for a day's draw when placed at or before that day's payout instant.
    pub fn is_valid_bid(&self, bid_time: OffsetDateTime) -> bool {
        bid_time <= self.instant_on_day_of(bid_time)
    }
}
