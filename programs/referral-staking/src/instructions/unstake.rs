use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{POOL_AUTHORITY_SEED, STAKE_ACCOUNT_SEED, STAKING_POOL_SEED};
use crate::engine::StakingEngine;
use crate::errors::StakingError;
use crate::events::Unstaked;
use crate::state::{StakeAccount, StakingPool};
use crate::transfer::TokenVault;

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        mut,
        seeds = [STAKE_ACCOUNT_SEED, staking_pool.key().as_ref(), user.key().as_ref()],
        bump = stake_account.bump,
        constraint = stake_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        constraint = user_token_account.mint == staking_pool.mint @ StakingError::InvalidPool,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = staking_pool.vault @ StakingError::InvalidPool
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    /// CHECK: Pool authority for signing transfers
    #[account(
        seeds = [POOL_AUTHORITY_SEED, staking_pool.key().as_ref()],
        bump = staking_pool.authority_bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &mut *ctx.accounts;
    let user = accounts.user.key();
    let pool_key = accounts.staking_pool.key();

    let vault = TokenVault::new(
        &accounts.token_program,
        &accounts.pool_vault,
        &accounts.pool_authority,
        pool_key,
        accounts.staking_pool.authority_bump,
    )
    .with_recipient(&accounts.user_token_account);

    let receipt = StakingEngine::new(&mut accounts.staking_pool, vault, clock.unix_timestamp)
        .unstake(&mut accounts.stake_account, &user, amount)?;

    emit!(Unstaked {
        user,
        pool: pool_key,
        amount,
        accrued: receipt.accrued,
        remaining_stake: receipt.staked,
        timestamp: clock.unix_timestamp,
    });

    msg!("Unstaked {} tokens", amount);
    msg!("Remaining: {}", receipt.staked);

    Ok(())
}
