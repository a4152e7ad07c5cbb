use anchor_lang::prelude::*;

use crate::constants::{REFERRAL_ACCOUNT_SEED, STAKING_POOL_SEED};
use crate::state::{ReferralAccount, StakingPool};

/// Permissionless: anyone may open the ledger entry for a referrer
#[derive(Accounts)]
#[instruction(referrer: Pubkey)]
pub struct OpenReferralAccount<'info> {
    #[account(
        seeds = [STAKING_POOL_SEED, staking_pool.mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        init,
        payer = payer,
        space = ReferralAccount::SIZE,
        seeds = [REFERRAL_ACCOUNT_SEED, staking_pool.key().as_ref(), referrer.as_ref()],
        bump
    )]
    pub referral_account: Account<'info, ReferralAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<OpenReferralAccount>, referrer: Pubkey) -> Result<()> {
    let referral = &mut ctx.accounts.referral_account;

    referral.pool = ctx.accounts.staking_pool.key();
    referral.referrer = referrer;
    referral.total_rewards = 0;
    referral.credit_count = 0;
    referral.bump = ctx.bumps.referral_account;

    msg!("Opened referral account for {}", referrer);

    Ok(())
}
