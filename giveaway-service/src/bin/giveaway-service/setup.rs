use giveaway_core::foundation::util::redact::redact_url;
use giveaway_core::foundation::GiveawayError;
use giveaway_core::infrastructure::config::AppConfig;
use giveaway_core::infrastructure::logging::init_logger;
use log::info;
use std::path::Path;

pub fn init_logging(log_dir: Option<&Path>, filters: &str) -> Result<(), GiveawayError> {
    init_logger(log_dir, filters)
}

pub fn log_startup_banner(app_config: &AppConfig) {
    let payout = &app_config.payout;
    info!(
        "giveaway-service config node_url={} wallet={} payout_time={:02}:{:02}:{:02} utc_offset_minutes={} initial_fee={} max_broadcast_attempts={}",
        redact_url(&app_config.node.url),
        app_config.wallet.address,
        payout.hour,
        payout.minute,
        payout.second,
        payout.utc_offset_minutes,
        payout.initial_fee,
        payout.max_broadcast_attempts
    );
    info!(
        "giveaway-service files candidates={} history={}",
        app_config.service.candidates_path().display(),
        app_config.service.history_path().display()
    );
}
