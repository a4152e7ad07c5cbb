use anchor_lang::prelude::*;

use crate::errors::StakingError;

/// Referral rewards credited to one referrer within a pool.
/// Informational: credits are recorded here, never transferred.
/// PDA: ["referral", pool, referrer]
#[account]
#[derive(Default)]
pub struct ReferralAccount {
    pub pool: Pubkey,

    pub referrer: Pubkey,

    /// Accumulated referral credit, only ever increases
    pub total_rewards: u64,

    /// Number of claims that credited this referrer
    pub credit_count: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl ReferralAccount {
    pub const SIZE: usize = 8 + // discriminator
        32 + // pool
        32 + // referrer
        8 +  // total_rewards
        8 +  // credit_count
        1;   // bump

    pub fn is_for(&self, pool: &Pubkey, referrer: &Pubkey) -> bool {
        self.pool == *pool && self.referrer == *referrer
    }

    /// Referral total for `referrer` in `pool`. A missing entry means the
    /// referrer was never opened and reads as zero.
    pub fn total_for(
        entry: Option<&ReferralAccount>,
        pool: &Pubkey,
        referrer: &Pubkey,
    ) -> Result<u64> {
        match entry {
            Some(referral) => {
                require!(
                    referral.is_for(pool, referrer),
                    StakingError::InvalidReferralAccount
                );
                Ok(referral.total_rewards)
            }
            None => Ok(0),
        }
    }

    /// Total after crediting `amount`, without committing it
    pub fn total_after(&self, amount: u64) -> Result<u64> {
        self.total_rewards
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow.into())
    }

    /// Returns the new total
    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        self.total_rewards = self.total_after(amount)?;
        self.credit_count = self.credit_count.saturating_add(1);
        Ok(self.total_rewards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_accumulates() {
        let mut referral = ReferralAccount::default();

        assert_eq!(referral.credit(10).unwrap(), 10);
        assert_eq!(referral.credit(0).unwrap(), 10);
        assert_eq!(referral.credit(5).unwrap(), 15);
        assert_eq!(referral.credit_count, 3);
    }

    #[test]
    fn test_credit_overflow_leaves_total() {
        let mut referral = ReferralAccount {
            total_rewards: u64::MAX - 1,
            ..Default::default()
        };

        let err = referral.credit(2).unwrap_err();
        assert_eq!(err, StakingError::ArithmeticOverflow.into());
        assert_eq!(referral.total_rewards, u64::MAX - 1);
        assert_eq!(referral.credit_count, 0);
    }

    #[test]
    fn test_total_for_unknown_referrer_is_zero() {
        let total =
            ReferralAccount::total_for(None, &Pubkey::new_unique(), &Pubkey::new_unique())
                .unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_total_for_matching_entry() {
        let pool = Pubkey::new_unique();
        let referrer = Pubkey::new_unique();
        let mut referral = ReferralAccount {
            pool,
            referrer,
            ..Default::default()
        };
        referral.credit(42).unwrap();

        let total = ReferralAccount::total_for(Some(&referral), &pool, &referrer).unwrap();
        assert_eq!(total, 42);
    }

    #[test]
    fn test_total_for_mismatched_entry() {
        let pool = Pubkey::new_unique();
        let referrer = Pubkey::new_unique();
        let referral = ReferralAccount {
            pool,
            referrer,
            total_rewards: 42,
            ..Default::default()
        };

        let err = ReferralAccount::total_for(Some(&referral), &pool, &Pubkey::new_unique())
            .unwrap_err();
        assert_eq!(err, StakingError::InvalidReferralAccount.into());
        let err = ReferralAccount::total_for(Some(&referral), &Pubkey::new_unique(), &referrer)
            .unwrap_err();
        assert_eq!(err, StakingError::InvalidReferralAccount.into());
    }

    #[test]
    fn test_is_for() {
        let pool = Pubkey::new_unique();
        let referrer = Pubkey::new_unique();
        let referral = ReferralAccount {
            pool,
            referrer,
            ..Default::default()
        };

        assert!(referral.is_for(&pool, &referrer));
        assert!(!referral.is_for(&pool, &Pubkey::new_unique()));
        assert!(!referral.is_for(&Pubkey::new_unique(), &referrer));
    }
}
