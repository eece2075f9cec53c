//! Domain layer: pure, synchronous payout and draw logic. No I/O.

pub mod coin_selection;
pub mod giveaway;
pub mod model;
pub mod notification;
pub mod payables;
pub mod registration;
pub mod schedule;
pub mod selection;
pub mod transaction;

pub use coin_selection::{CoinSelector, SpendAll};
pub use giveaway::{plan_giveaway, Candidate, CandidateOutcome, GiveawayPlan};
pub use model::{PayoutRequest, Prizes, UnspentOutput, Wallet, WinnerSelection};
pub use notification::{Notification, NotificationTemplate};
pub use payables::{Payable, PayableSet};
pub use registration::{AddressRules, RegistrationDecision, RegistrationRequest, RejectionReason};
pub use schedule::{PayoutSchedule, TimeRemaining};
pub use selection::select_winner;
pub use transaction::{plan_transaction, TransactionPlan};
