use giveaway_core::application::GiveawayReport;
use giveaway_core::foundation::GiveawayError;
use giveaway_service::service::{cancel_on_signal, ServiceFlow};
use log::info;
use tokio_util::sync::CancellationToken;

/// Runs the scheduler until ctrl-c. A draw already in progress finishes first.
pub async fn run_scheduler(flow: &ServiceFlow) -> Result<(), GiveawayError> {
    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_signal(tokio::signal::ctrl_c(), shutdown.clone()));

    flow.scheduler().run(shutdown).await
}

pub async fn run_now(flow: &ServiceFlow) -> Result<(), GiveawayError> {
    match flow.scheduler().run_once().await? {
        GiveawayReport::NoCandidates => info!("no candidates registered; nothing to draw"),
        GiveawayReport::Completed { selection, winner, receipt, .. } => info!(
            "draw complete index={} candidate_count={} winner={} txid={} already_accepted={}",
            selection.selected_index,
            selection.candidate_count,
            winner,
            receipt.txid.as_ref().map(|t| t.as_str()).unwrap_or("-"),
            receipt.already_accepted
        ),
    }
    Ok(())
}
