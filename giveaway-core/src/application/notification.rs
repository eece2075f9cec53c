use crate::domain::Notification;
use crate::foundation::GiveawayError;
use async_trait::async_trait;
use log::{debug, warn};

/// Delivery channel for participant notifications. Delivery guarantees belong to the sink.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), GiveawayError>;
}

/// Sends every notification in order. Failures are logged and counted, never returned.
pub async fn notify_all(sink: &dyn NotificationSink, notifications: &[Notification]) -> usize {
    let mut failed = 0;
    for notification in notifications {
        match sink.notify(notification).await {
            Ok(()) => debug!("notification sent template={} recipient={}", notification.template_name(), notification.recipient),
            Err(err) => {
                failed += 1;
                warn!(
                    "notification failed template={} recipient={} error={}",
                    notification.template_name(),
                    notification.recipient,
                    err
                );
            }
        }
    }
    failed
}
