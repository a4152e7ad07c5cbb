use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod rewards;
pub mod state;
pub mod transfer;

use instructions::*;

declare_id!("RefStak111111111111111111111111111111111111");

/// Referral Staking Program
///
/// Stakers lock a token in a pool and accrue rewards at an admin-set yearly
/// rate. Claims are rate-limited by a cooldown and capped at half the
/// current stake; a tenth of every claim is credited to the staker's
/// referrer.
#[program]
pub mod referral_staking {
    use super::*;

    /// Create a pool for a mint; the caller becomes its admin
    ///
    /// # Arguments
    /// * `interest_rate` - Yearly rate in whole percent (5..=25)
    /// * `claim_cooldown` - Seconds between claims (default 300)
    /// * `max_stake` - Per-account stake cap (default 1e18)
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        interest_rate: u8,
        claim_cooldown: Option<u64>,
        max_stake: Option<u64>,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, interest_rate, claim_cooldown, max_stake)
    }

    /// Stake tokens, optionally naming a referrer
    ///
    /// Creates the StakeAccount PDA on first stake. The referrer is only
    /// recorded once per account.
    pub fn stake(ctx: Context<Stake>, amount: u64, referrer: Option<Pubkey>) -> Result<()> {
        instructions::stake::handler(ctx, amount, referrer)
    }

    /// Withdraw staked principal
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, amount)
    }

    /// Claim accrued rewards once the cooldown has passed
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Admin: change the yearly interest rate
    pub fn set_interest_rate(ctx: Context<AdminControl>, new_rate: u8) -> Result<()> {
        instructions::admin::set_interest_rate_handler(ctx, new_rate)
    }

    /// Admin: change the claim cooldown
    pub fn set_claim_cooldown(ctx: Context<AdminControl>, seconds: u64) -> Result<()> {
        instructions::admin::set_claim_cooldown_handler(ctx, seconds)
    }

    /// Admin: change the per-account stake cap
    pub fn set_max_stake(ctx: Context<AdminControl>, max_stake: u64) -> Result<()> {
        instructions::admin::set_max_stake_handler(ctx, max_stake)
    }

    /// Admin: drain the whole vault. Does not touch account balances.
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw::handler(ctx)
    }

    /// Open the referral ledger entry for a referrer (permissionless)
    pub fn open_referral_account(ctx: Context<OpenReferralAccount>, referrer: Pubkey) -> Result<()> {
        instructions::open_referral_account::handler(ctx, referrer)
    }

    /// View: referral credit accumulated by a referrer
    pub fn get_referral_rewards(ctx: Context<GetReferralRewards>, referrer: Pubkey) -> Result<u64> {
        instructions::get_referral_rewards::handler(ctx, referrer)
    }

    /// View: reward a claim would pay now
    pub fn get_claimable_rewards(ctx: Context<GetClaimableRewards>) -> Result<u64> {
        instructions::get_claimable_rewards::handler(ctx)
    }
}
