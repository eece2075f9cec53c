mod loader;
mod types;
pub mod env;
pub mod validation;

pub use loader::{load_config, load_config_from_file, load_config_from_file_with_profile, load_config_with_profile, CONFIG_FILE_NAME, ENV_PREFIX};
pub use types::*;

use crate::foundation::GiveawayError;
use log::{info, warn};
use std::path::Path;

fn validated(config: AppConfig) -> Result<AppConfig, GiveawayError> {
    if let Err(errors) = config.validate() {
        for err in &errors {
            warn!("config validation error: {}", err);
        }
        return Err(GiveawayError::ConfigError(format!("{} validation error(s): {}", errors.len(), errors.join("; "))));
    }
    Ok(config)
}

/// Resolves data dir, config path and profile from the environment, then loads and validates.
pub fn load_app_config() -> Result<AppConfig, GiveawayError> {
    validated(load_unvalidated_app_config()?)
}

/// Same resolution as [`load_app_config`] without validation, for read-only modes that need no wallet.
pub fn load_unvalidated_app_config() -> Result<AppConfig, GiveawayError> {
    let data_dir = env::resolve_data_dir()?;
    let config_path = env::resolve_config_path(&data_dir);
    match env::resolve_profile() {
        Some(profile) => {
            info!("loading config profile profile={}", profile);
            load_config_from_file_with_profile(&config_path, &data_dir, &profile)
        }
        None => load_config_from_file(&config_path, &data_dir),
    }
}

pub fn load_app_config_from_path(path: &Path) -> Result<AppConfig, GiveawayError> {
    let data_dir = env::resolve_data_dir()?;
    validated(load_config_from_file(path, &data_dir)?)
}

pub fn load_app_config_from_profile_path(path: &Path, data_dir: &Path, profile: &str) -> Result<AppConfig, GiveawayError> {
    validated(load_config_from_file_with_profile(path, data_dir, profile)?)
}
