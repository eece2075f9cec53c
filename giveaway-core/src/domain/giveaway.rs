use crate::domain::model::{Prizes, WinnerSelection};
use crate::domain::notification::{Notification, NotificationTemplate};
use crate::domain::payables::PayableSet;
use crate::domain::selection::select_winner;
use crate::foundation::{Address, GiveawayError};
use serde::{Deserialize, Serialize};

/// A registered participant eligible for the next draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub recipient: String,
    pub address: Address,
    #[serde(default)]
    pub referral: Option<Address>,
}

/// Per-candidate draw record handed to the history store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateOutcome {
    /// 1-based position in the candidate list.
    pub number: usize,
    pub recipient: String,
    pub address: Address,
    pub is_winner: bool,
    pub calculated_hash: String,
    pub bids_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GiveawayPlan {
    pub selection: WinnerSelection,
    pub winner: Candidate,
    pub outcomes: Vec<CandidateOutcome>,
    pub notifications: Vec<Notification>,
    pub payables: PayableSet,
}

pub fn prize_payables(winner: &Candidate, prizes: &Prizes) -> Result<PayableSet, GiveawayError> {
    let mut payables = PayableSet::new().with(winner.address.clone(), prizes.master);
    if let Some(referral) = &winner.referral {
        let bonus = prizes.master.scaled(prizes.ref_master)?;
        if !bonus.is_zero() {
            payables.push(referral.clone(), bonus);
        }
    }
    payables.aggregate()
}

/// Runs the draw over `candidates` in their stored order.
pub fn plan_giveaway(candidates: &[Candidate], entropy: &str, prizes: &Prizes) -> Result<GiveawayPlan, GiveawayError> {
    let selection = select_winner(entropy, candidates.len())?;
    let winner = candidates
        .get(selection.selected_index - 1)
        .cloned()
        .ok_or_else(|| GiveawayError::Message(format!("selected index {} out of range", selection.selected_index)))?;

    let mut outcomes = Vec::with_capacity(candidates.len());
    let mut notifications = Vec::with_capacity(candidates.len());
    for (idx, candidate) in candidates.iter().enumerate() {
        let number = idx + 1;
        let is_winner = number == selection.selected_index;
        outcomes.push(CandidateOutcome {
            number,
            recipient: candidate.recipient.clone(),
            address: candidate.address.clone(),
            is_winner,
            calculated_hash: entropy.to_string(),
            bids_count: candidates.len(),
        });
        let template =
            if is_winner { NotificationTemplate::GiveWinner { address: candidate.address.clone() } } else { NotificationTemplate::GiveComplete };
        notifications.push(Notification::new(candidate.recipient.clone(), template));
    }

    let payables = prize_payables(&winner, prizes)?;
    Ok(GiveawayPlan { selection, winner, outcomes, notifications, payables })
}
