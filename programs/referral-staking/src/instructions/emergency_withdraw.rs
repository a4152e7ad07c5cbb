use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{POOL_AUTHORITY_SEED, STAKING_POOL_SEED};
use crate::engine::StakingEngine;
use crate::errors::StakingError;
use crate::events::EmergencyWithdrawal;
use crate::state::StakingPool;
use crate::transfer::TokenVault;

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

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

    /// Receives the whole vault; must belong to the admin
    #[account(
        mut,
        constraint = admin_token_account.mint == staking_pool.mint @ StakingError::InvalidPool
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Break-glass drain of the pool vault. Stake and reward balances are not
/// reconciled.
pub fn handler(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &mut *ctx.accounts;
    let admin = accounts.admin.key();
    let pool_key = accounts.staking_pool.key();

    let vault = TokenVault::new(
        &accounts.token_program,
        &accounts.pool_vault,
        &accounts.pool_authority,
        pool_key,
        accounts.staking_pool.authority_bump,
    )
    .with_recipient(&accounts.admin_token_account);

    let amount = StakingEngine::new(&mut accounts.staking_pool, vault, clock.unix_timestamp)
        .emergency_withdraw(&admin)?;

    emit!(EmergencyWithdrawal {
        pool: pool_key,
        admin,
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!("Emergency withdrawal of {} tokens", amount);
    msg!("Ledger still records {} staked", accounts.staking_pool.total_staked);

    Ok(())
}
