use anchor_lang::prelude::*;

use crate::constants::{CLAIM_CAP_DIVISOR, REFERRAL_REWARD_PERCENT, SECONDS_PER_YEAR};
use crate::errors::StakingError;

/// Seconds between the last settlement and `now`, clamped at zero so a
/// clock that runs backwards never produces a negative accrual window.
pub fn elapsed_since(last_accrual_time: i64, now: i64) -> i64 {
    now.saturating_sub(last_accrual_time).max(0)
}

/// Reward owed for holding `staked` at `interest_rate` percent per year
/// over `elapsed_seconds`.
///
/// reward = staked * rate * elapsed / (SECONDS_PER_YEAR * 100), floored.
pub fn calculate_rewards(staked: u64, interest_rate: u8, elapsed_seconds: i64) -> Result<u64> {
    if staked == 0 || elapsed_seconds <= 0 {
        return Ok(0);
    }

    let reward = (staked as u128)
        .checked_mul(interest_rate as u128)
        .and_then(|v| v.checked_mul(elapsed_seconds as u128))
        .ok_or(StakingError::ArithmeticOverflow)?
        / (SECONDS_PER_YEAR * 100);

    u64::try_from(reward).map_err(|_| StakingError::ArithmeticOverflow.into())
}

/// Accrual for the window `[last_accrual_time, now]`
pub fn accrued_between(
    staked: u64,
    interest_rate: u8,
    last_accrual_time: i64,
    now: i64,
) -> Result<u64> {
    calculate_rewards(staked, interest_rate, elapsed_since(last_accrual_time, now))
}

/// Largest reward a single claim may pay out
pub fn claim_cap(staked: u64) -> u64 {
    staked / CLAIM_CAP_DIVISOR
}

/// Referrer's bookkeeping credit for a paid claim
pub fn referral_share(reward: u64) -> u64 {
    // reward * 10 never overflows u128
    ((reward as u128) * (REFERRAL_REWARD_PERCENT as u128) / 100) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = SECONDS_PER_YEAR as i64;

    #[test]
    fn test_full_year_at_ten_percent() {
        assert_eq!(calculate_rewards(1_000, 10, YEAR).unwrap(), 100);
    }

    #[test]
    fn test_small_stake_floors() {
        // 10 * 25% = 2.5
        assert_eq!(calculate_rewards(10, 25, YEAR).unwrap(), 2);
    }

    #[test]
    fn test_zero_elapsed_is_zero() {
        assert_eq!(calculate_rewards(1_000_000, 25, 0).unwrap(), 0);
        assert_eq!(accrued_between(1_000_000, 25, 500, 500).unwrap(), 0);
    }

    #[test]
    fn test_clock_skew_is_clamped() {
        assert_eq!(elapsed_since(1_000, 900), 0);
        assert_eq!(elapsed_since(i64::MAX, i64::MIN), 0);
        assert_eq!(accrued_between(1_000_000, 25, 1_000, 10).unwrap(), 0);
        assert_eq!(calculate_rewards(1_000_000, 25, -60).unwrap(), 0);
    }

    #[test]
    fn test_monotonic_in_time_and_stake() {
        let mut previous = 0;
        for days in 0..=730 {
            let reward = calculate_rewards(123_456_789, 17, days * 86_400).unwrap();
            assert!(reward >= previous);
            previous = reward;
        }

        let mut previous = 0;
        for staked in (0..1_000_000u64).step_by(7_919) {
            let reward = calculate_rewards(staked, 5, YEAR / 3).unwrap();
            assert!(reward >= previous);
            previous = reward;
        }
    }

    #[test]
    fn test_intermediate_overflow_is_reported() {
        let err = calculate_rewards(u64::MAX, 25, i64::MAX).unwrap_err();
        assert_eq!(err, StakingError::ArithmeticOverflow.into());
    }

    #[test]
    fn test_result_wider_than_u64_is_reported() {
        // 25% of u64::MAX for a century exceeds u64
        let err = calculate_rewards(u64::MAX, 25, YEAR * 100).unwrap_err();
        assert_eq!(err, StakingError::ArithmeticOverflow.into());
    }

    #[test]
    fn test_claim_cap_and_referral_share_floor() {
        assert_eq!(claim_cap(1_000), 500);
        assert_eq!(claim_cap(1), 0);
        assert_eq!(referral_share(100), 10);
        assert_eq!(referral_share(19), 1);
        assert_eq!(referral_share(9), 0);
        assert_eq!(referral_share(u64::MAX), u64::MAX / 10);
    }
}
