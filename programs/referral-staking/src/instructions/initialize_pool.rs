use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{POOL_AUTHORITY_SEED, POOL_VAULT_SEED, STAKING_POOL_SEED};
use crate::state::StakingPool;

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = admin,
        space = StakingPool::SIZE,
        seeds = [STAKING_POOL_SEED, mint.key().as_ref()],
        bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// The token mint staked in this pool
    pub mint: Account<'info, Mint>,

    /// CHECK: PDA that owns the pool vault
    #[account(
        seeds = [POOL_AUTHORITY_SEED, staking_pool.key().as_ref()],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [POOL_VAULT_SEED, staking_pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool_authority
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    /// Becomes the pool's permanent admin
    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializePool>,
    interest_rate: u8,
    claim_cooldown: Option<u64>,
    max_stake: Option<u64>,
) -> Result<()> {
    let pool = &mut ctx.accounts.staking_pool;
    let clock = Clock::get()?;

    pool.configure(ctx.accounts.admin.key(), interest_rate, claim_cooldown, max_stake)?;
    pool.mint = ctx.accounts.mint.key();
    pool.vault = ctx.accounts.pool_vault.key();
    pool.total_staked = 0;
    pool.total_rewards_paid = 0;
    pool.staker_count = 0;
    pool.created_at = clock.unix_timestamp;
    pool.bump = ctx.bumps.staking_pool;
    pool.authority_bump = ctx.bumps.pool_authority;

    msg!("Created staking pool for mint: {}", pool.mint);
    msg!("Admin: {}", pool.admin);
    msg!(
        "Rate: {}%, Cooldown: {}s, Max stake: {}",
        pool.interest_rate,
        pool.claim_cooldown,
        pool.max_stake
    );

    Ok(())
}
