use anchor_lang::prelude::*;

use crate::errors::StakingError;
use crate::rewards;

/// Individual account's stake in a pool
/// PDA: ["stake-account", pool, owner]
#[account]
#[derive(Default)]
pub struct StakeAccount {
    /// Owner of this stake account
    pub owner: Pubkey,

    /// The pool this stake belongs to
    pub pool: Pubkey,

    /// Amount of tokens currently locked
    pub staked: u64,

    /// Rewards settled at stake/unstake boundaries, not yet paid
    pub claimed_reward_balance: u64,

    /// Mirror of `claimed_reward_balance` credited by the same settlements.
    /// Kept separately for audit; a claim pays the settled amount once.
    pub pending_reward_balance: u64,

    /// Last time accrual was folded into the reward balances
    pub last_accrual_time: i64,

    /// Referrer recorded on first stake; `Pubkey::default()` when unset
    pub referrer: Pubkey,

    /// Rewards paid to this account historically
    pub total_claimed: u64,

    /// Timestamp of the first stake
    pub staked_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

/// Reward balances after folding accrual in, computed without touching the
/// account so the caller can commit only once external effects succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub accrued: u64,
    pub claimed_reward_balance: u64,
    pub pending_reward_balance: u64,
}

impl StakeAccount {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        32 + // pool
        8 +  // staked
        8 +  // claimed_reward_balance
        8 +  // pending_reward_balance
        8 +  // last_accrual_time
        32 + // referrer
        8 +  // total_claimed
        8 +  // staked_at
        1 +  // bump
        32;  // reserved

    pub fn has_referrer(&self) -> bool {
        self.referrer != Pubkey::default()
    }

    /// Unowned accounts are claimed by their first staker
    pub fn check_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(
            self.owner == Pubkey::default() || self.owner == *caller,
            StakingError::Unauthorized
        );
        Ok(())
    }

    /// Accrual owed since `last_accrual_time`
    pub fn accrued(&self, interest_rate: u8, now: i64) -> Result<u64> {
        rewards::accrued_between(self.staked, interest_rate, self.last_accrual_time, now)
    }

    /// Fold accrual since the last settlement into both reward buckets
    pub fn settle(&self, interest_rate: u8, now: i64) -> Result<Settlement> {
        let accrued = self.accrued(interest_rate, now)?;

        Ok(Settlement {
            accrued,
            claimed_reward_balance: self
                .claimed_reward_balance
                .checked_add(accrued)
                .ok_or(StakingError::ArithmeticOverflow)?,
            pending_reward_balance: self
                .pending_reward_balance
                .checked_add(accrued)
                .ok_or(StakingError::ArithmeticOverflow)?,
        })
    }

    /// Commit a settlement along with the new stake amount
    pub fn apply_settlement(&mut self, settlement: Settlement, staked: u64, now: i64) {
        self.claimed_reward_balance = settlement.claimed_reward_balance;
        self.pending_reward_balance = settlement.pending_reward_balance;
        self.staked = staked;
        self.last_accrual_time = now;
    }

    /// Reward a claim would owe right now, before the claim cap
    pub fn claimable(&self, interest_rate: u8, now: i64) -> Result<u64> {
        self.accrued(interest_rate, now)?
            .checked_add(self.pending_reward_balance)
            .ok_or(StakingError::ArithmeticOverflow.into())
    }

    /// What a claim would pay right now: `claimable` limited by the claim
    /// cap. Ignores the cooldown.
    pub fn capped_claimable(&self, interest_rate: u8, now: i64) -> Result<u64> {
        Ok(self
            .claimable(interest_rate, now)?
            .min(rewards::claim_cap(self.staked)))
    }

    /// Referrer that `set_referrer_if_unset` would record, if any.
    /// The first referrer wins; self-referral and the zero key are ignored.
    pub fn referrer_to_link(&self, owner: &Pubkey, candidate: Option<Pubkey>) -> Option<Pubkey> {
        if self.has_referrer() {
            return None;
        }
        candidate.filter(|referrer| *referrer != Pubkey::default() && referrer != owner)
    }

    /// Returns true when the link was recorded by this call
    pub fn set_referrer_if_unset(&mut self, owner: &Pubkey, candidate: Option<Pubkey>) -> bool {
        match self.referrer_to_link(owner, candidate) {
            Some(referrer) => {
                self.referrer = referrer;
                true
            }
            None => false,
        }
    }

    /// Zero both reward buckets and restart the accrual clock after a payout
    pub fn reset_rewards(&mut self, paid: u64, now: i64) {
        self.claimed_reward_balance = 0;
        self.pending_reward_balance = 0;
        self.last_accrual_time = now;
        self.total_claimed = self.total_claimed.saturating_add(paid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_YEAR;

    const YEAR: i64 = SECONDS_PER_YEAR as i64;

    fn create_test_account(staked: u64, last_accrual_time: i64) -> StakeAccount {
        StakeAccount {
            owner: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            staked,
            last_accrual_time,
            ..Default::default()
        }
    }

    #[test]
    fn test_settle_credits_both_buckets() {
        let mut account = create_test_account(1_000, 0);
        account.claimed_reward_balance = 7;
        account.pending_reward_balance = 7;

        let settlement = account.settle(10, YEAR).unwrap();
        assert_eq!(settlement.accrued, 100);
        assert_eq!(settlement.claimed_reward_balance, 107);
        assert_eq!(settlement.pending_reward_balance, 107);

        // computing a settlement does not mutate the account
        assert_eq!(account.claimed_reward_balance, 7);
        assert_eq!(account.last_accrual_time, 0);

        account.apply_settlement(settlement, 1_500, YEAR);
        assert_eq!(account.staked, 1_500);
        assert_eq!(account.pending_reward_balance, 107);
        assert_eq!(account.last_accrual_time, YEAR);
        assert_eq!(account.accrued(10, YEAR).unwrap(), 0);
    }

    #[test]
    fn test_settle_reports_bucket_overflow() {
        let mut account = create_test_account(1_000, 0);
        account.claimed_reward_balance = u64::MAX;

        let err = account.settle(10, YEAR).unwrap_err();
        assert_eq!(err, StakingError::ArithmeticOverflow.into());
    }

    #[test]
    fn test_claimable_counts_settled_reward_once() {
        let mut account = create_test_account(1_000, 0);
        account.claimed_reward_balance = 50;
        account.pending_reward_balance = 50;

        assert_eq!(account.claimable(10, YEAR).unwrap(), 150);
    }

    #[test]
    fn test_capped_claimable() {
        // 1000 at 10% for a year, under the cap of 500
        let account = create_test_account(1_000, 0);
        assert_eq!(account.capped_claimable(10, YEAR).unwrap(), 100);

        // 100 at 25% for ten years earns 250, capped at 50
        let account = create_test_account(100, 0);
        assert_eq!(account.claimable(25, 10 * YEAR).unwrap(), 250);
        assert_eq!(account.capped_claimable(25, 10 * YEAR).unwrap(), 50);

        // drained stake caps settled rewards at zero
        let mut account = create_test_account(0, 0);
        account.claimed_reward_balance = 80;
        account.pending_reward_balance = 80;
        assert_eq!(account.claimable(10, YEAR).unwrap(), 80);
        assert_eq!(account.capped_claimable(10, YEAR).unwrap(), 0);
    }

    #[test]
    fn test_first_referrer_wins() {
        let mut account = create_test_account(0, 0);
        let owner = account.owner;
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();

        assert!(account.set_referrer_if_unset(&owner, Some(first)));
        assert!(!account.set_referrer_if_unset(&owner, Some(second)));
        assert!(!account.set_referrer_if_unset(&owner, None));
        assert_eq!(account.referrer, first);
    }

    #[test]
    fn test_self_and_zero_referrers_are_ignored() {
        let mut account = create_test_account(0, 0);
        let owner = account.owner;

        assert!(!account.set_referrer_if_unset(&owner, Some(owner)));
        assert!(!account.set_referrer_if_unset(&owner, Some(Pubkey::default())));
        assert!(!account.set_referrer_if_unset(&owner, None));
        assert!(!account.has_referrer());
    }

    #[test]
    fn test_check_owner() {
        let mut account = StakeAccount::default();
        let user = Pubkey::new_unique();

        assert!(account.check_owner(&user).is_ok());
        account.owner = user;
        assert!(account.check_owner(&user).is_ok());
        assert_eq!(
            account.check_owner(&Pubkey::new_unique()).unwrap_err(),
            StakingError::Unauthorized.into()
        );
    }

    #[test]
    fn test_reset_rewards() {
        let mut account = create_test_account(1_000, 0);
        account.claimed_reward_balance = 40;
        account.pending_reward_balance = 40;
        account.total_claimed = 10;

        account.reset_rewards(40, 900);
        assert_eq!(account.claimed_reward_balance, 0);
        assert_eq!(account.pending_reward_balance, 0);
        assert_eq!(account.last_accrual_time, 900);
        assert_eq!(account.total_claimed, 50);
        assert_eq!(account.staked, 1_000);
    }
}
