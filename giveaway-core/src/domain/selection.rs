use crate::domain::model::WinnerSelection;
use crate::foundation::{GiveawayError, ENTROPY_PREFIX_LEN};

/// Picks a 1-based winner position out of `candidate_count` from a public entropy source
/// (the best block hash at draw time).
///
/// The leading [`ENTROPY_PREFIX_LEN`] hex characters are read as `h`, scaled to
/// `r = h / 16^13` in `[0, 1)`, and mapped onto `[1, N]` by rounding `r * (N - 1) + 1`
/// half-to-even. Anyone holding the same hash and count can reproduce the result.
pub fn select_winner(entropy: &str, candidate_count: usize) -> Result<WinnerSelection, GiveawayError> {
    if candidate_count == 0 {
        return Err(GiveawayError::NoCandidates);
    }

    let prefix: String = entropy.chars().take(ENTROPY_PREFIX_LEN).collect();
    if prefix.chars().count() < ENTROPY_PREFIX_LEN {
        return Err(GiveawayError::InvalidEntropy {
            entropy: entropy.to_string(),
            reason: format!("need at least {} hex characters", ENTROPY_PREFIX_LEN),
        });
    }
    if !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(GiveawayError::InvalidEntropy { entropy: entropy.to_string(), reason: "non-hex characters in prefix".to_string() });
    }
    let h = u64::from_str_radix(&prefix, 16)
        .map_err(|err| GiveawayError::InvalidEntropy { entropy: entropy.to_string(), reason: err.to_string() })?;

    // 16^13 = 2^52, so `h` and the divisor are exact in an f64.
    let r = h as f64 / (1u64 << (4 * ENTROPY_PREFIX_LEN)) as f64;
    let max_index = candidate_count as f64;
    let raw = (r * (max_index - 1.0) + 1.0).round_ties_even();
    let selected_index = (raw as usize).clamp(1, candidate_count);

    Ok(WinnerSelection { entropy_source: entropy.to_string(), candidate_count, selected_index })
}
