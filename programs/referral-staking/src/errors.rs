use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Stake would exceed the pool's maximum stake per account")]
    StakeLimitExceeded,

    #[msg("Asset transfer failed")]
    TransferFailed,

    #[msg("Insufficient staked balance")]
    InsufficientBalance,

    #[msg("Claim cooldown has not elapsed")]
    CooldownActive,

    #[msg("No rewards to claim")]
    NoRewards,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Interest rate must be between 5 and 25 percent")]
    OutOfRange,

    #[msg("Pool vault is empty")]
    NothingToWithdraw,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Invalid pool for this account")]
    InvalidPool,

    #[msg("Referral account does not match the referrer")]
    InvalidReferralAccount,
}
