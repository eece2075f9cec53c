use crate::fixtures::{TEST_WALLET_ADDRESS, TEST_WALLET_KEY};
use giveaway_core::foundation::ErrorCode;
use giveaway_core::infrastructure::config::env::{CONFIG_PATH_ENV, DATA_DIR_ENV};
use giveaway_core::infrastructure::config::{
    load_app_config, load_app_config_from_path, load_app_config_from_profile_path, load_unvalidated_app_config, CONFIG_FILE_NAME,
};
use giveaway_core::infrastructure::rpc::RetryBackoff;
use std::env;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_config(dir: &Path, extra: &str) -> std::path::PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    let body = format!(
        r#"
[node]
url = "http://127.0.0.1:3889"
user = "rpcuser"
password = "rpcpass"

[wallet]
address = "{TEST_WALLET_ADDRESS}"
private_key = "{TEST_WALLET_KEY}"

{extra}
"#
    );
    std::fs::write(&path, body).expect("write config");
    path
}

#[test]
fn test_env_overrides_file_and_defaults() {
    let _guard = lock_env();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[payout]\nhour = 18\nretry_backoff = \"linear\"\n");

    env::set_var(DATA_DIR_ENV, dir.path());
    env::set_var("GIVEAWAY_PAYOUT__HOUR", "21");
    env::set_var("GIVEAWAY_PAYOUT__MAX_BROADCAST_ATTEMPTS", "5");
    let loaded = load_app_config_from_path(&path);
    env::remove_var("GIVEAWAY_PAYOUT__MAX_BROADCAST_ATTEMPTS");
    env::remove_var("GIVEAWAY_PAYOUT__HOUR");
    env::remove_var(DATA_DIR_ENV);

    let config = loaded.expect("load");
    assert_eq!(config.payout.hour, 21);
    assert_eq!(config.payout.max_broadcast_attempts, 5);
    assert_eq!(config.payout.retry_backoff, RetryBackoff::Linear);
    assert_eq!(config.payout.retry_policy().delay_for(2), Duration::from_secs(6));
    assert_eq!(config.service.candidates_path(), dir.path().join("candidates.json"));
    assert_eq!(config.service.history_path(), dir.path().join("history.jsonl"));
}

#[test]
fn test_profile_overlay_then_validation() {
    let _guard = lock_env();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[prize]
master = 10

[profiles.broken.prize]
master = 0

[profiles.morning.payout]
hour = 8
utc_offset_minutes = 180
"#,
    );

    let config = load_app_config_from_profile_path(&path, dir.path(), "morning").expect("morning profile");
    assert_eq!(config.payout.hour, 8);
    assert_eq!(config.payout.schedule().expect("schedule").offset().whole_minutes(), 180);

    let err = load_app_config_from_profile_path(&path, dir.path(), "broken").unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigError);
    assert!(err.to_string().contains("prize.master"));
}

#[test]
fn test_missing_wallet_fails_validation() {
    let _guard = lock_env();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[node]\nurl = \"ftp://node\"\n").expect("write config");

    env::set_var(DATA_DIR_ENV, dir.path());
    let loaded = load_app_config_from_path(&path);
    env::remove_var(DATA_DIR_ENV);

    let message = loaded.unwrap_err().to_string();
    assert!(message.contains("wallet.address is required"));
    assert!(message.contains("wallet.private_key is required"));
    assert!(message.contains("node.url"));
}

#[test]
fn test_env_resolved_loading_validates_only_on_request() {
    let _guard = lock_env();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[payout]\nhour = 7\n").expect("write config");

    env::set_var(DATA_DIR_ENV, dir.path());
    env::set_var(CONFIG_PATH_ENV, &path);
    let unvalidated = load_unvalidated_app_config();
    let validated = load_app_config();
    env::remove_var(CONFIG_PATH_ENV);
    env::remove_var(DATA_DIR_ENV);

    assert_eq!(unvalidated.expect("read-only load").payout.hour, 7);
    let err = validated.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigError);
    assert!(err.to_string().contains("wallet.address is required"));
}
