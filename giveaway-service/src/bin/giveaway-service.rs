#[path = "giveaway-service/cli.rs"]
mod cli;
#[path = "giveaway-service/modes/mod.rs"]
mod modes;
#[path = "giveaway-service/setup.rs"]
mod setup;

use crate::cli::{Cli, Command};
use giveaway_core::infrastructure::config;
use giveaway_service::service::ServiceFlow;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse_args();
    args.apply_to_env();

    match args.command() {
        Command::SelectWinner { entropy, candidates } => {
            setup::init_logging(None, &args.log_level)?;
            modes::offline::print_selection(&entropy, candidates)?;
        }
        Command::TimeRemaining => {
            setup::init_logging(None, &args.log_level)?;
            let app_config = config::load_unvalidated_app_config()?;
            modes::offline::print_time_remaining(&app_config.payout.schedule()?)?;
        }
        command @ (Command::Run | Command::RunNow) => {
            let app_config = config::load_app_config()?;
            setup::init_logging(app_config.service.log_dir().as_deref(), &args.log_level)?;
            info!("giveaway-service starting mode={:?} log_level={}", command, args.log_level);
            setup::log_startup_banner(&app_config);

            let flow = ServiceFlow::new(&app_config)?;
            if command == Command::RunNow {
                modes::scheduled::run_now(&flow).await?;
            } else {
                modes::scheduled::run_scheduler(&flow).await?;
            }
            info!("giveaway-service stopped");
        }
    }
    Ok(())
}
