mod config_loading;
mod fee_escalation;
mod giveaway_run;
mod payout_retry;
