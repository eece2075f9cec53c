//! Configuration loader using Figment for layered config management.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. TOML config file
//! 3. Profile overrides from `[profiles.<name>]`
//! 4. Environment variables (GIVEAWAY_* prefix)

use crate::foundation::util::redact::redact_url;
use crate::foundation::GiveawayError;
use crate::infrastructure::config::types::{AppConfig, DEFAULT_CANDIDATES_FILE, DEFAULT_HISTORY_FILE};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::value::Dict;
use figment::{Figment, Profile};
use log::{debug, info};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "giveaway.toml";

/// Environment variable prefix for config overrides.
///
/// Example: `GIVEAWAY_NODE__URL` -> `node.url`
pub const ENV_PREFIX: &str = "GIVEAWAY_";

/// Load configuration from the default file in `data_dir` (`giveaway.toml`).
pub fn load_config(data_dir: &Path) -> Result<AppConfig, GiveawayError> {
    load_config_from_file(&data_dir.join(CONFIG_FILE_NAME), data_dir)
}

/// Load configuration from the default file in `data_dir` with a profile.
pub fn load_config_with_profile(data_dir: &Path, profile: &str) -> Result<AppConfig, GiveawayError> {
    load_config_from_file_with_profile(&data_dir.join(CONFIG_FILE_NAME), data_dir, profile)
}

/// Load configuration from a specific file path.
pub fn load_config_from_file(path: &Path, data_dir: &Path) -> Result<AppConfig, GiveawayError> {
    info!("loading configuration path={} data_dir={}", path.display(), data_dir.display());
    let figment = figment_base(path).merge(env_provider());
    let mut config: AppConfig = figment.extract()?;
    postprocess(&mut config, data_dir);
    debug!("configuration loaded node_url={} wallet={}", redact_url(&config.node.url), config.wallet.address);
    Ok(config)
}

/// Load configuration from a specific file path with profile overrides.
pub fn load_config_from_file_with_profile(path: &Path, data_dir: &Path, profile: &str) -> Result<AppConfig, GiveawayError> {
    info!("loading configuration with profile path={} data_dir={} profile={}", path.display(), data_dir.display(), profile);

    // Extract once to access `profiles.<name>` overrides from the file.
    let base: AppConfig = figment_base(path).extract()?;
    let overrides = profile_overrides(&base, profile)?;

    let figment = figment_base(path).merge(Serialized::from(overrides, Profile::Default)).merge(env_provider());
    let mut config: AppConfig =
        figment.extract().map_err(|e| GiveawayError::ConfigError(format!("config extraction failed for profile '{profile}': {e}")))?;
    postprocess(&mut config, data_dir);

    debug!("configuration loaded with profile profile={} node_url={}", profile, redact_url(&config.node.url));
    Ok(config)
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).split("__")
}

fn figment_base(path: &Path) -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));
    if path.exists() {
        figment = figment.merge(Toml::file(path));
    } else {
        debug!("configuration file missing; using defaults and env only path={}", path.display());
    }
    figment
}

fn profile_overrides(config: &AppConfig, profile: &str) -> Result<Dict, GiveawayError> {
    let profiles = config.profiles.as_ref().ok_or_else(|| GiveawayError::ConfigError("no profiles section in config".to_string()))?;
    profiles.get(profile).cloned().ok_or_else(|| GiveawayError::ConfigError(format!("profile '{profile}' not found in config")))
}

fn postprocess(config: &mut AppConfig, data_dir: &Path) {
    if config.service.data_dir.trim().is_empty() {
        config.service.data_dir = data_dir.to_string_lossy().to_string();
    }
    if config.service.candidates_file.trim().is_empty() {
        config.service.candidates_file = DEFAULT_CANDIDATES_FILE.to_string();
    }
    if config.service.history_file.trim().is_empty() {
        config.service.history_file = DEFAULT_HISTORY_FILE.to_string();
    }
    config.wallet.address = config.wallet.address.trim().to_string();
}
