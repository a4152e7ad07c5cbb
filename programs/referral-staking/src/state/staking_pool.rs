use anchor_lang::prelude::*;

use crate::constants::{
    DEFAULT_CLAIM_COOLDOWN, DEFAULT_MAX_STAKE, MAX_INTEREST_RATE, MIN_INTEREST_RATE,
};
use crate::errors::StakingError;

/// Per-mint staking pool and its policy
/// PDA: ["staking-pool", mint]
#[account]
#[derive(Default)]
pub struct StakingPool {
    /// Sole account allowed to change policy or drain the vault.
    /// Fixed at pool creation.
    pub admin: Pubkey,

    /// Token mint staked and paid out by this pool
    pub mint: Pubkey,

    /// Token account holding staked principal and reward funds
    pub vault: Pubkey,

    /// Yearly interest in whole percent, always within [5, 25]
    pub interest_rate: u8,

    /// Minimum seconds between an account's last settlement and its next claim
    pub claim_cooldown: u64,

    /// Upper bound on any single account's stake
    pub max_stake: u64,

    /// Sum of all accounts' stakes
    pub total_staked: u64,

    /// Rewards paid out historically
    pub total_rewards_paid: u64,

    /// Accounts with a non-zero stake
    pub staker_count: u32,

    pub created_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed of the vault authority PDA
    pub authority_bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

impl StakingPool {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        32 + // mint
        32 + // vault
        1 +  // interest_rate
        8 +  // claim_cooldown
        8 +  // max_stake
        8 +  // total_staked
        8 +  // total_rewards_paid
        4 +  // staker_count
        8 +  // created_at
        1 +  // bump
        1 +  // authority_bump
        32;  // reserved

    /// Build a pool's policy. Optional knobs fall back to the defaults.
    pub fn configure(
        &mut self,
        admin: Pubkey,
        interest_rate: u8,
        claim_cooldown: Option<u64>,
        max_stake: Option<u64>,
    ) -> Result<()> {
        Self::check_interest_rate(interest_rate)?;
        let max_stake = max_stake.unwrap_or(DEFAULT_MAX_STAKE);
        require!(max_stake > 0, StakingError::InvalidAmount);

        self.admin = admin;
        self.interest_rate = interest_rate;
        self.claim_cooldown = claim_cooldown.unwrap_or(DEFAULT_CLAIM_COOLDOWN);
        self.max_stake = max_stake;
        Ok(())
    }

    pub fn check_interest_rate(rate: u8) -> Result<()> {
        require!(
            (MIN_INTEREST_RATE..=MAX_INTEREST_RATE).contains(&rate),
            StakingError::OutOfRange
        );
        Ok(())
    }

    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require!(*caller == self.admin, StakingError::Unauthorized);
        Ok(())
    }

    /// Returns the previous rate
    pub fn set_interest_rate(&mut self, caller: &Pubkey, new_rate: u8) -> Result<u8> {
        self.authorize(caller)?;
        Self::check_interest_rate(new_rate)?;

        let old_rate = self.interest_rate;
        self.interest_rate = new_rate;
        Ok(old_rate)
    }

    /// Returns the previous cooldown
    pub fn set_claim_cooldown(&mut self, caller: &Pubkey, seconds: u64) -> Result<u64> {
        self.authorize(caller)?;

        let old = self.claim_cooldown;
        self.claim_cooldown = seconds;
        Ok(old)
    }

    /// Returns the previous cap. Lowering the cap below existing stakes only
    /// blocks further stakes from those accounts.
    pub fn set_max_stake(&mut self, caller: &Pubkey, max_stake: u64) -> Result<u64> {
        self.authorize(caller)?;
        require!(max_stake > 0, StakingError::InvalidAmount);

        let old = self.max_stake;
        self.max_stake = max_stake;
        Ok(old)
    }

    /// First timestamp at which an account settled at `last_accrual_time`
    /// may claim again
    pub fn claim_ready_at(&self, last_accrual_time: i64) -> i64 {
        let cooldown = i64::try_from(self.claim_cooldown).unwrap_or(i64::MAX);
        last_accrual_time.saturating_add(cooldown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_pool(admin: Pubkey) -> StakingPool {
        let mut pool = StakingPool::default();
        pool.configure(admin, 10, None, None).unwrap();
        pool
    }

    #[test]
    fn test_configure_applies_defaults() {
        let admin = Pubkey::new_unique();
        let pool = create_test_pool(admin);

        assert_eq!(pool.admin, admin);
        assert_eq!(pool.interest_rate, 10);
        assert_eq!(pool.claim_cooldown, DEFAULT_CLAIM_COOLDOWN);
        assert_eq!(pool.max_stake, DEFAULT_MAX_STAKE);
    }

    #[test]
    fn test_configure_rejects_rate_outside_bounds() {
        let mut pool = StakingPool::default();
        let admin = Pubkey::new_unique();

        assert_eq!(
            pool.configure(admin, 4, None, None).unwrap_err(),
            StakingError::OutOfRange.into()
        );
        assert_eq!(
            pool.configure(admin, 26, None, None).unwrap_err(),
            StakingError::OutOfRange.into()
        );
        assert_eq!(pool.admin, Pubkey::default());
    }

    #[test]
    fn test_interest_rate_bounds_are_inclusive() {
        let admin = Pubkey::new_unique();
        let mut pool = create_test_pool(admin);

        assert_eq!(pool.set_interest_rate(&admin, 5).unwrap(), 10);
        assert_eq!(pool.set_interest_rate(&admin, 25).unwrap(), 5);
        assert_eq!(pool.interest_rate, 25);
    }

    #[test]
    fn test_out_of_range_rate_from_admin_leaves_rate() {
        let admin = Pubkey::new_unique();
        let mut pool = create_test_pool(admin);

        let err = pool.set_interest_rate(&admin, 30).unwrap_err();
        assert_eq!(err, StakingError::OutOfRange.into());
        let err = pool.set_interest_rate(&admin, 0).unwrap_err();
        assert_eq!(err, StakingError::OutOfRange.into());
        assert_eq!(pool.interest_rate, 10);
    }

    #[test]
    fn test_non_admin_cannot_change_policy() {
        let admin = Pubkey::new_unique();
        let intruder = Pubkey::new_unique();
        let mut pool = create_test_pool(admin);

        // authorization is checked before the range
        let err = pool.set_interest_rate(&intruder, 30).unwrap_err();
        assert_eq!(err, StakingError::Unauthorized.into());
        let err = pool.set_interest_rate(&intruder, 20).unwrap_err();
        assert_eq!(err, StakingError::Unauthorized.into());
        let err = pool.set_claim_cooldown(&intruder, 0).unwrap_err();
        assert_eq!(err, StakingError::Unauthorized.into());
        let err = pool.set_max_stake(&intruder, 1).unwrap_err();
        assert_eq!(err, StakingError::Unauthorized.into());

        assert_eq!(pool.interest_rate, 10);
        assert_eq!(pool.claim_cooldown, DEFAULT_CLAIM_COOLDOWN);
        assert_eq!(pool.max_stake, DEFAULT_MAX_STAKE);
    }

    #[test]
    fn test_admin_updates_cooldown_and_cap() {
        let admin = Pubkey::new_unique();
        let mut pool = create_test_pool(admin);

        assert_eq!(pool.set_claim_cooldown(&admin, 3_600).unwrap(), DEFAULT_CLAIM_COOLDOWN);
        assert_eq!(pool.claim_cooldown, 3_600);

        assert_eq!(pool.set_max_stake(&admin, 5_000).unwrap(), DEFAULT_MAX_STAKE);
        assert_eq!(pool.max_stake, 5_000);

        let err = pool.set_max_stake(&admin, 0).unwrap_err();
        assert_eq!(err, StakingError::InvalidAmount.into());
        assert_eq!(pool.max_stake, 5_000);
    }

    #[test]
    fn test_claim_ready_at_saturates() {
        let admin = Pubkey::new_unique();
        let mut pool = create_test_pool(admin);

        assert_eq!(pool.claim_ready_at(1_000), 1_300);

        pool.claim_cooldown = u64::MAX;
        assert_eq!(pool.claim_ready_at(1_000), i64::MAX);
    }
}
