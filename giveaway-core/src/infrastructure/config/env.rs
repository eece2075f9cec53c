use crate::foundation::GiveawayError;
use crate::infrastructure::config::loader::CONFIG_FILE_NAME;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "GIVEAWAY_CONFIG_PATH";
pub const DATA_DIR_ENV: &str = "GIVEAWAY_DATA_DIR";
pub const PROFILE_ENV: &str = "GIVEAWAY_PROFILE";

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn resolve_config_path(data_dir: &Path) -> PathBuf {
    non_empty_env(CONFIG_PATH_ENV).map(PathBuf::from).unwrap_or_else(|| data_dir.join(CONFIG_FILE_NAME))
}

pub fn resolve_data_dir() -> Result<PathBuf, GiveawayError> {
    if let Some(data_dir) = non_empty_env(DATA_DIR_ENV) {
        return Ok(PathBuf::from(data_dir));
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(".giveaway"))
}

pub fn resolve_profile() -> Option<String> {
    non_empty_env(PROFILE_ENV)
}
