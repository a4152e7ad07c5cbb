use anchor_lang::prelude::*;

use crate::constants::STAKING_POOL_SEED;
use crate::events::{InterestRateChanged, PolicyUpdated};
use crate::state::StakingPool;

/// Policy changes. Admin rights are checked by the pool itself so a wrong
/// signer surfaces as `Unauthorized`.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    pub admin: Signer<'info>,
}

pub fn set_interest_rate_handler(ctx: Context<AdminControl>, new_rate: u8) -> Result<()> {
    let pool_key = ctx.accounts.staking_pool.key();
    let admin = ctx.accounts.admin.key();
    let pool = &mut ctx.accounts.staking_pool;
    let clock = Clock::get()?;

    let old_rate = pool.set_interest_rate(&admin, new_rate)?;

    emit!(InterestRateChanged {
        pool: pool_key,
        admin,
        old_rate,
        new_rate,
        timestamp: clock.unix_timestamp,
    });

    msg!("Interest rate changed from {}% to {}%", old_rate, new_rate);

    Ok(())
}

pub fn set_claim_cooldown_handler(ctx: Context<AdminControl>, seconds: u64) -> Result<()> {
    let pool_key = ctx.accounts.staking_pool.key();
    let admin = ctx.accounts.admin.key();
    let pool = &mut ctx.accounts.staking_pool;
    let clock = Clock::get()?;

    let old_value = pool.set_claim_cooldown(&admin, seconds)?;

    emit!(PolicyUpdated {
        pool: pool_key,
        admin,
        field: "claim_cooldown".to_string(),
        old_value,
        new_value: seconds,
        timestamp: clock.unix_timestamp,
    });

    msg!("Claim cooldown changed from {}s to {}s", old_value, seconds);

    Ok(())
}

pub fn set_max_stake_handler(ctx: Context<AdminControl>, max_stake: u64) -> Result<()> {
    let pool_key = ctx.accounts.staking_pool.key();
    let admin = ctx.accounts.admin.key();
    let pool = &mut ctx.accounts.staking_pool;
    let clock = Clock::get()?;

    let old_value = pool.set_max_stake(&admin, max_stake)?;

    emit!(PolicyUpdated {
        pool: pool_key,
        admin,
        field: "max_stake".to_string(),
        old_value,
        new_value: max_stake,
        timestamp: clock.unix_timestamp,
    });

    msg!("Max stake changed from {} to {}", old_value, max_stake);

    Ok(())
}
