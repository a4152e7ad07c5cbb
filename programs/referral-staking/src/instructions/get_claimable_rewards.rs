use anchor_lang::prelude::*;

use crate::errors::StakingError;
use crate::state::{StakeAccount, StakingPool};

#[derive(Accounts)]
pub struct GetClaimableRewards<'info> {
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        constraint = stake_account.pool == staking_pool.key() @ StakingError::InvalidPool
    )]
    pub stake_account: Account<'info, StakeAccount>,
}

/// What a claim would pay right now, after the claim cap.
/// Ignores the cooldown.
pub fn handler(ctx: Context<GetClaimableRewards>) -> Result<u64> {
    let pool = &ctx.accounts.staking_pool;
    let account = &ctx.accounts.stake_account;
    let clock = Clock::get()?;

    account.capped_claimable(pool.interest_rate, clock.unix_timestamp)
}
