use async_trait::async_trait;
use giveaway_core::application::NotificationSink;
use giveaway_core::domain::Notification;
use giveaway_core::foundation::GiveawayError;
use log::info;

/// Writes notifications to the service log. Mail delivery lives outside this service.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotificationSink;

#[async_trait]
impl NotificationSink for LogNotificationSink {
    async fn notify(&self, notification: &Notification) -> Result<(), GiveawayError> {
        info!(
            "notification template={} recipient={} subject={:?} body={:?}",
            notification.template_name(),
            notification.recipient,
            notification.subject(),
            notification.body()
        );
        Ok(())
    }
}
