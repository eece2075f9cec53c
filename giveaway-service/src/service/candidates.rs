use async_trait::async_trait;
use giveaway_core::application::CandidateSource;
use giveaway_core::domain::{Candidate, CandidateOutcome};
use giveaway_core::foundation::GiveawayError;
use log::{debug, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Candidates stored as a JSON array; draw history appended as JSON lines.
///
/// Archiving appends every outcome to the history file and then empties the candidate list,
/// so a finished draw never counts its bids twice.
pub struct FileCandidateSource {
    candidates_path: PathBuf,
    history_path: PathBuf,
}

impl FileCandidateSource {
    pub fn new(candidates_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self { candidates_path: candidates_path.into(), history_path: history_path.into() }
    }

    pub fn candidates_path(&self) -> &Path {
        &self.candidates_path
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    async fn read_candidates(&self) -> Result<Vec<Candidate>, GiveawayError> {
        let raw = match fs::read_to_string(&self.candidates_path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("candidates file missing path={}", self.candidates_path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    async fn append_history(&self, outcomes: &[CandidateOutcome]) -> Result<(), GiveawayError> {
        if let Some(parent) = self.history_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.history_path).await?;
        let mut buf = String::new();
        for outcome in outcomes {
            buf.push_str(&serde_json::to_string(outcome)?);
            buf.push('\n');
        }
        file.write_all(buf.as_bytes()).await?;
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl CandidateSource for FileCandidateSource {
    async fn candidates(&self) -> Result<Vec<Candidate>, GiveawayError> {
        self.read_candidates().await
    }

    async fn archive(&self, outcomes: &[CandidateOutcome]) -> Result<(), GiveawayError> {
        self.append_history(outcomes).await?;
        fs::write(&self.candidates_path, "[]\n").await?;
        info!("draw archived history={} outcome_count={}", self.history_path.display(), outcomes.len());
        Ok(())
    }
}
