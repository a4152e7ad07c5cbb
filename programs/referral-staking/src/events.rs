use anchor_lang::prelude::*;

/// Emitted when an account stakes into a pool
#[event]
pub struct Staked {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    /// Reward settled into the account's balances by this stake
    pub accrued: u64,
    pub new_total_staked: u64,
    pub timestamp: i64,
}

/// Emitted when an account withdraws principal
#[event]
pub struct Unstaked {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    pub accrued: u64,
    pub remaining_stake: u64,
    pub timestamp: i64,
}

/// Emitted when rewards are paid out
#[event]
pub struct Claimed {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    /// Reward above the claim cap that was dropped
    pub forfeited: u64,
    pub timestamp: i64,
}

/// Emitted when a claim credits the claimant's referrer
#[event]
pub struct ReferralReward {
    pub referrer: Pubkey,
    pub referee: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    pub total_referral_rewards: u64,
    pub timestamp: i64,
}

/// Emitted the first (and only) time an account records a referrer
#[event]
pub struct ReferrerLinked {
    pub referee: Pubkey,
    pub referrer: Pubkey,
    pub pool: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct InterestRateChanged {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub old_rate: u8,
    pub new_rate: u8,
    pub timestamp: i64,
}

/// Emitted when the admin changes the claim cooldown or the stake cap
#[event]
pub struct PolicyUpdated {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub field: String,
    pub old_value: u64,
    pub new_value: u64,
    pub timestamp: i64,
}

/// Emitted when the admin drains the vault. Account ledgers are not touched.
#[event]
pub struct EmergencyWithdrawal {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
