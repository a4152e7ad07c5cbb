/// PDA: ["staking-pool", mint]
pub const STAKING_POOL_SEED: &[u8] = b"staking-pool";

/// PDA: ["stake-account", pool, owner]
pub const STAKE_ACCOUNT_SEED: &[u8] = b"stake-account";

/// PDA: ["referral", pool, referrer]
pub const REFERRAL_ACCOUNT_SEED: &[u8] = b"referral";

/// PDA signing for the pool vault: ["pool-authority", pool]
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool-authority";

/// PDA: ["pool-vault", pool]
pub const POOL_VAULT_SEED: &[u8] = b"pool-vault";

pub const SECONDS_PER_YEAR: u128 = 365 * 24 * 60 * 60;

/// Interest rate bounds, whole percent per year
pub const MIN_INTEREST_RATE: u8 = 5;
pub const MAX_INTEREST_RATE: u8 = 25;

pub const DEFAULT_CLAIM_COOLDOWN: u64 = 300;

/// One billion tokens at 9 decimals
pub const DEFAULT_MAX_STAKE: u64 = 1_000_000_000_000_000_000;

/// Share of every claim credited to the claimant's referrer
pub const REFERRAL_REWARD_PERCENT: u64 = 10;

/// A claim never pays more than staked / CLAIM_CAP_DIVISOR
pub const CLAIM_CAP_DIVISOR: u64 = 2;
