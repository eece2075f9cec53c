use clap::{Parser, Subcommand};
use giveaway_core::infrastructure::config::env::{CONFIG_PATH_ENV, DATA_DIR_ENV, PROFILE_ENV};
use giveaway_core::infrastructure::logging::DEFAULT_LOG_FILTERS;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "giveaway-service")]
#[command(about = "Daily giveaway draw and payout service", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override data directory
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Config profile to overlay from `[profiles.<name>]`
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Log filters, e.g. "info,giveaway_core=debug,root=warn"
    #[arg(short, long, default_value = DEFAULT_LOG_FILTERS)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the daily scheduler until interrupted (default)
    Run,
    /// Draw and pay out immediately, then exit
    RunNow,
    /// Compute a winner index offline from an entropy string
    SelectWinner {
        #[arg(long)]
        entropy: String,
        #[arg(long)]
        candidates: usize,
    },
    /// Print the time left until the next payout instant
    TimeRemaining,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }

    pub fn apply_to_env(&self) {
        if let Some(config_path) = &self.config {
            std::env::set_var(CONFIG_PATH_ENV, config_path);
        }

        if let Some(data_dir) = &self.data_dir {
            std::env::set_var(DATA_DIR_ENV, data_dir);
        }

        if let Some(profile) = &self.profile {
            std::env::set_var(PROFILE_ENV, profile);
        }
    }
}
