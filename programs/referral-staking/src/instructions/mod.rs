pub mod initialize_pool;
pub mod stake;
pub mod unstake;
pub mod claim;
pub mod admin;
pub mod emergency_withdraw;
pub mod open_referral_account;
pub mod get_referral_rewards;
pub mod get_claimable_rewards;

pub use initialize_pool::*;
pub use stake::*;
pub use unstake::*;
pub use claim::*;
pub use admin::*;
pub use emergency_withdraw::*;
pub use open_referral_account::*;
pub use get_referral_rewards::*;
pub use get_claimable_rewards::*;
