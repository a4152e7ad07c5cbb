use anchor_lang::prelude::*;

use crate::state::{ReferralAccount, StakingPool};

#[derive(Accounts)]
pub struct GetReferralRewards<'info> {
    pub staking_pool: Account<'info, StakingPool>,

    /// Omitted for a referrer that has never been opened
    pub referral_account: Option<Account<'info, ReferralAccount>>,
}

/// Referral credit accumulated by `referrer`; zero when unknown
pub fn handler(ctx: Context<GetReferralRewards>, referrer: Pubkey) -> Result<u64> {
    let pool_key = ctx.accounts.staking_pool.key();

    ReferralAccount::total_for(ctx.accounts.referral_account.as_deref(), &pool_key, &referrer)
}
