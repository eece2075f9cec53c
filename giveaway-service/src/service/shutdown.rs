use log::{info, warn};
use std::future::Future;
use std::io;
use tokio_util::sync::CancellationToken;

/// Cancels `token` once `signal` fires. A listener that fails to install leaves the token alone,
/// so the service keeps running rather than stopping at startup.
pub async fn cancel_on_signal<F>(signal: F, token: CancellationToken)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("shutdown signal received");
            token.cancel();
        }
        Err(err) => warn!("failed to listen for shutdown signal; scheduler keeps running error={}", err),
    }
}
