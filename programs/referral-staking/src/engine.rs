//! Account-level state transitions for a staking pool.
//!
//! Every operation validates and computes its result on copies, performs its
//! single external transfer, and only then commits to the pool and account.
//! A failed transfer therefore leaves no ledger change behind.

use anchor_lang::prelude::*;

use crate::errors::StakingError;
use crate::rewards;
use crate::state::{ReferralAccount, StakeAccount, StakingPool};
use crate::transfer::AssetTransfer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeReceipt {
    /// Reward settled into the account's balances before the stake changed
    pub accrued: u64,
    /// Account stake after the operation
    pub staked: u64,
    /// Referrer recorded by this call, if the link was new
    pub linked_referrer: Option<Pubkey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnstakeReceipt {
    pub accrued: u64,
    pub staked: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferralCredit {
    pub referrer: Pubkey,
    pub amount: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub reward: u64,
    /// Earned reward above the claim cap, dropped by this claim
    pub forfeited: u64,
    pub referral: Option<ReferralCredit>,
}

pub struct StakingEngine<'a, T: AssetTransfer> {
    pool: &'a mut StakingPool,
    assets: T,
    now: i64,
}

fn transfer_failed(err: anchor_lang::error::Error) -> anchor_lang::error::Error {
    msg!("Asset transfer failed: {}", err);
    error!(StakingError::TransferFailed)
}

impl<'a, T: AssetTransfer> StakingEngine<'a, T> {
    pub fn new(pool: &'a mut StakingPool, assets: T, now: i64) -> Self {
        Self { pool, assets, now }
    }

    pub fn stake(
        &mut self,
        account: &mut StakeAccount,
        caller: &Pubkey,
        amount: u64,
        referrer: Option<Pubkey>,
    ) -> Result<StakeReceipt> {
        account.check_owner(caller)?;
        require!(amount > 0, StakingError::InvalidAmount);

        let staked = account
            .staked
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        require!(staked <= self.pool.max_stake, StakingError::StakeLimitExceeded);

        let total_staked = self
            .pool
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        let settlement = account.settle(self.pool.interest_rate, self.now)?;

        self.assets
            .deposit(caller, amount)
            .map_err(transfer_failed)?;

        if account.owner == Pubkey::default() {
            account.owner = *caller;
            account.staked_at = self.now;
        }
        if account.staked == 0 {
            self.pool.staker_count = self.pool.staker_count.saturating_add(1);
        }
        let linked_referrer = account
            .set_referrer_if_unset(caller, referrer)
            .then_some(account.referrer);
        account.apply_settlement(settlement, staked, self.now);
        self.pool.total_staked = total_staked;

        Ok(StakeReceipt {
            accrued: settlement.accrued,
            staked,
            linked_referrer,
        })
    }

    pub fn unstake(
        &mut self,
        account: &mut StakeAccount,
        caller: &Pubkey,
        amount: u64,
    ) -> Result<UnstakeReceipt> {
        account.check_owner(caller)?;
        require!(amount > 0, StakingError::InvalidAmount);
        require!(amount <= account.staked, StakingError::InsufficientBalance);

        let staked = account
            .staked
            .checked_sub(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        let total_staked = self
            .pool
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        let settlement = account.settle(self.pool.interest_rate, self.now)?;

        self.assets.pay(caller, amount).map_err(transfer_failed)?;

        account.apply_settlement(settlement, staked, self.now);
        self.pool.total_staked = total_staked;
        if staked == 0 {
            self.pool.staker_count = self.pool.staker_count.saturating_sub(1);
        }

        Ok(UnstakeReceipt {
            accrued: settlement.accrued,
            staked,
        })
    }

    /// Pay out fresh accrual plus settled rewards, capped at half the
    /// current stake. `referral` must be the claimant's referrer's entry
    /// whenever a referrer is recorded.
    ///
    /// A zero cap (drained stake) fails with `NoRewards` and keeps the reward
    /// buckets, rather than zeroing them and paying nothing.
    pub fn claim(
        &mut self,
        account: &mut StakeAccount,
        caller: &Pubkey,
        referral: Option<&mut ReferralAccount>,
    ) -> Result<ClaimReceipt> {
        account.check_owner(caller)?;
        require!(
            self.now >= self.pool.claim_ready_at(account.last_accrual_time),
            StakingError::CooldownActive
        );

        let earned = account.claimable(self.pool.interest_rate, self.now)?;
        require!(earned > 0, StakingError::NoRewards);

        // A drained stake caps the claim at zero; the settled balances stay
        // on the account until it stakes again.
        let reward = earned.min(rewards::claim_cap(account.staked));
        require!(reward > 0, StakingError::NoRewards);

        let referral = if account.has_referrer() {
            let referral = referral
                .filter(|entry| entry.is_for(&account.pool, &account.referrer))
                .ok_or(StakingError::InvalidReferralAccount)?;
            let share = rewards::referral_share(reward);
            referral.total_after(share)?;
            Some((referral, share))
        } else {
            None
        };

        self.assets.pay(caller, reward).map_err(transfer_failed)?;

        account.reset_rewards(reward, self.now);
        self.pool.total_rewards_paid = self.pool.total_rewards_paid.saturating_add(reward);

        let referral = match referral {
            Some((entry, amount)) => Some(ReferralCredit {
                referrer: account.referrer,
                amount,
                total: entry.credit(amount)?,
            }),
            None => None,
        };

        Ok(ClaimReceipt {
            reward,
            forfeited: earned - reward,
            referral,
        })
    }

    /// Send the vault's entire balance to the admin.
    ///
    /// Break-glass only: stakes and reward balances are left as they are,
    /// so the ledger no longer matches the vault afterwards.
    pub fn emergency_withdraw(&mut self, caller: &Pubkey) -> Result<u64> {
        self.pool.authorize(caller)?;

        let balance = self.assets.pool_balance()?;
        require!(balance > 0, StakingError::NothingToWithdraw);

        let admin = self.pool.admin;
        self.assets.pay(&admin, balance).map_err(transfer_failed)?;

        Ok(balance)
    }
}
