use giveaway_core::domain::{select_winner, PayoutSchedule};
use giveaway_core::foundation::util::time::now_utc;
use giveaway_core::foundation::GiveawayError;
use serde_json::json;

/// Prints the winner index `entropy` yields over `candidates` entries.
pub fn print_selection(entropy: &str, candidates: usize) -> Result<(), GiveawayError> {
    let selection = select_winner(entropy, candidates)?;
    println!("{}", serde_json::to_string_pretty(&selection)?);
    Ok(())
}

pub fn print_time_remaining(schedule: &PayoutSchedule) -> Result<(), GiveawayError> {
    let now = now_utc();
    let remaining = schedule.time_remaining(now);
    let report = json!({
        "now": now.unix_timestamp(),
        "next_payout": schedule.next_payout(now).unix_timestamp(),
        "remaining": remaining,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
