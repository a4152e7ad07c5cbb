use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{POOL_AUTHORITY_SEED, STAKE_ACCOUNT_SEED, STAKING_POOL_SEED};
use crate::engine::StakingEngine;
use crate::errors::StakingError;
use crate::events::{ReferrerLinked, Staked};
use crate::state::{StakeAccount, StakingPool};
use crate::transfer::TokenVault;

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        init_if_needed,
        payer = user,
        space = StakeAccount::SIZE,
        seeds = [STAKE_ACCOUNT_SEED, staking_pool.key().as_ref(), user.key().as_ref()],
        bump
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
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Stake>, amount: u64, referrer: Option<Pubkey>) -> Result<()> {
    let clock = Clock::get()?;
    let stake_bump = ctx.bumps.stake_account;
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
    .with_depositor(&accounts.user_token_account, &accounts.user);

    // Freshly created stake account
    if accounts.stake_account.pool == Pubkey::default() {
        accounts.stake_account.pool = pool_key;
        accounts.stake_account.bump = stake_bump;
    }

    let receipt = StakingEngine::new(&mut accounts.staking_pool, vault, clock.unix_timestamp)
        .stake(&mut accounts.stake_account, &user, amount, referrer)?;

    if let Some(referrer) = receipt.linked_referrer {
        emit!(ReferrerLinked {
            referee: user,
            referrer,
            pool: pool_key,
            timestamp: clock.unix_timestamp,
        });
        msg!("Referrer recorded: {}", referrer);
    }

    emit!(Staked {
        user,
        pool: pool_key,
        amount,
        accrued: receipt.accrued,
        new_total_staked: receipt.staked,
        timestamp: clock.unix_timestamp,
    });

    msg!("Staked {} tokens", amount);
    msg!("Total staked: {}", receipt.staked);
    msg!("Pool total staked: {}", accounts.staking_pool.total_staked);

    Ok(())
}
