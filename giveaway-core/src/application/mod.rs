pub mod broadcaster;
pub mod builder;
pub mod fee;
pub mod giveaway;
pub mod lifecycle;
pub mod notification;
pub mod payout;
pub mod registration;
pub mod scheduler;
pub mod signer;

pub use broadcaster::{BroadcastReport, Broadcaster};
pub use builder::{BuildOutcome, TransactionBuilder};
pub use fee::{EscalatedBuild, FeeEscalator};
pub use giveaway::{CandidateSource, GiveawayReport, GiveawayRunner};
pub use lifecycle::{CompositeObserver, NoopObserver, PayoutObserver};
pub use notification::{notify_all, NotificationSink};
pub use payout::{PayoutCoordinator, PayoutReceipt};
pub use registration::{Registrar, RegistrationOutcome, RegistrationValidator};
pub use scheduler::{Clock, GiveawayScheduler};
pub use signer::Signer;
