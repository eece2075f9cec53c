use crate::foundation::{Address, Amount};
use serde::{Deserialize, Serialize};

/// Message bodies the service sends to participants. Delivery is up to the sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum NotificationTemplate {
    BidAccepted { coins_amount: Amount, address: Address },
    GiveWinner { address: Address },
    GiveComplete,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub recipient: String,
    #[serde(flatten)]
    pub template: NotificationTemplate,
}

impl Notification {
    pub fn new(recipient: impl Into<String>, template: NotificationTemplate) -> Self {
        Self { recipient: recipient.into(), template }
    }

    pub fn subject(&self) -> &'static str {
        match self.template {
            NotificationTemplate::BidAccepted { .. } => "Bid accepted.",
            NotificationTemplate::GiveWinner { .. } | NotificationTemplate::GiveComplete => "Give completed.",
        }
    }

    pub fn body(&self) -> String {
        match &self.template {
            NotificationTemplate::BidAccepted { coins_amount, address } => {
                format!("Your bid is accepted. {} coins are on their way to {}.", coins_amount, address)
            }
            NotificationTemplate::GiveWinner { address } => {
                format!("Congratulations, you won today's giveaway. The prize is being sent to {}.", address)
            }
            NotificationTemplate::GiveComplete => "Today's giveaway is complete. Better luck next time.".to_string(),
        }
    }

    pub fn template_name(&self) -> &'static str {
        match self.template {
            NotificationTemplate::BidAccepted { .. } => "bid_accepted",
            NotificationTemplate::GiveWinner { .. } => "give_winner",
            NotificationTemplate::GiveComplete => "give_complete",
        }
    }
}
