use crate::foundation::constants::TEST_NOW_SECS_ENV_VAR;
use crate::foundation::GiveawayError;
use time::OffsetDateTime;

pub fn current_time_env(env_var: Option<&str>) -> Result<OffsetDateTime, GiveawayError> {
    if let Some(var) = env_var {
        if let Ok(value) = std::env::var(var) {
            let secs = value.trim().parse::<i64>().map_err(|err| GiveawayError::Message(format!("{var}: {err}")))?;
            return OffsetDateTime::from_unix_timestamp(secs).map_err(|err| GiveawayError::Message(err.to_string()));
        }
    }
    Ok(OffsetDateTime::now_utc())
}

/// Returns the current wall-clock time in UTC.
///
/// For test determinism, this respects `TEST_NOW_SECS_ENV_VAR` when set.
pub fn now_utc() -> OffsetDateTime {
    current_time_env(Some(TEST_NOW_SECS_ENV_VAR)).unwrap_or_else(|_| OffsetDateTime::now_utc())
}
