#![allow(dead_code)]

use async_trait::async_trait;
use giveaway_core::application::{CandidateSource, NotificationSink};
use giveaway_core::domain::{Candidate, CandidateOutcome, Notification};
use giveaway_core::foundation::GiveawayError;
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().expect("sink lock").clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn notify(&self, notification: &Notification) -> Result<(), GiveawayError> {
        self.sent.lock().expect("sink lock").push(notification.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCandidateSource {
    candidates: Mutex<Vec<Candidate>>,
    archived: Mutex<Vec<CandidateOutcome>>,
    fail_archive: bool,
}

impl MemoryCandidateSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates: Mutex::new(candidates), archived: Mutex::new(Vec::new()), fail_archive: false }
    }

    pub fn failing(candidates: Vec<Candidate>) -> Self {
        Self { fail_archive: true, ..Self::new(candidates) }
    }

    pub fn archived(&self) -> Vec<CandidateOutcome> {
        self.archived.lock().expect("archive lock").clone()
    }

    pub fn remaining(&self) -> usize {
        self.candidates.lock().expect("candidates lock").len()
    }
}

#[async_trait]
impl CandidateSource for MemoryCandidateSource {
    async fn candidates(&self) -> Result<Vec<Candidate>, GiveawayError> {
        Ok(self.candidates.lock().expect("candidates lock").clone())
    }

    async fn archive(&self, outcomes: &[CandidateOutcome]) -> Result<(), GiveawayError> {
        if self.fail_archive {
            return Err(GiveawayError::Message("history store unavailable".to_string()));
        }
        self.archived.lock().expect("archive lock").extend_from_slice(outcomes);
        self.candidates.lock().expect("candidates lock").clear();
        Ok(())
    }
}
