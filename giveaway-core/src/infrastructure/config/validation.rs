use crate::foundation::Address;
use crate::infrastructure::config::types::AppConfig;
use secrecy::ExposeSecret;

const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;
const MAX_RPC_TIMEOUT_SECS: u64 = 600;

impl AppConfig {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let url = self.node.url.trim();
        if url.is_empty() {
            errors.push("node.url must not be empty".to_string());
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("node.url must be an http(s) url: {}", url));
        }
        if self.node.timeout_secs == 0 || self.node.timeout_secs > MAX_RPC_TIMEOUT_SECS {
            errors.push(format!("node.timeout_secs must be in 1..={}", MAX_RPC_TIMEOUT_SECS));
        }

        if self.wallet.address.is_empty() {
            errors.push("wallet.address is required".to_string());
        } else if let Err(err) = self.registration.address_rules().check(&Address::new(self.wallet.address.clone())) {
            errors.push(format!("wallet.address: {}", err));
        }
        if self.wallet.private_key.expose_secret().is_empty() {
            errors.push("wallet.private_key is required".to_string());
        }

        if self.prize.master.is_zero() {
            errors.push("prize.master must be > 0".to_string());
        }
        if self.prize.register.is_zero() {
            errors.push("prize.register must be > 0".to_string());
        }
        if !self.prize.ref_master.is_finite() || self.prize.ref_master < 0.0 {
            errors.push("prize.ref_master must be a non-negative ratio".to_string());
        }

        if self.payout.hour > 23 || self.payout.minute > 59 || self.payout.second > 59 {
            errors.push(format!(
                "payout time {:02}:{:02}:{:02} is not a valid time of day",
                self.payout.hour, self.payout.minute, self.payout.second
            ));
        }
        if self.payout.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            errors.push(format!("payout.utc_offset_minutes must be within +/-{}", MAX_UTC_OFFSET_MINUTES));
        }
        if self.payout.initial_fee.is_zero() {
            errors.push("payout.initial_fee must be > 0".to_string());
        }
        if self.payout.fee_step.is_zero() {
            errors.push("payout.fee_step must be > 0".to_string());
        }
        if self.payout.max_fee_attempts == 0 {
            errors.push("payout.max_fee_attempts must be > 0".to_string());
        }
        if self.payout.max_broadcast_attempts == 0 {
            errors.push("payout.max_broadcast_attempts must be > 0".to_string());
        }
        if self.payout.max_retry_delay_secs < self.payout.retry_delay_secs {
            errors.push("payout.max_retry_delay_secs must be >= payout.retry_delay_secs".to_string());
        }

        if self.registration.address_length == 0 {
            errors.push("registration.address_length must be > 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
