use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::POOL_AUTHORITY_SEED;
use crate::errors::StakingError;

/// Moves the pool's asset between the pool vault and accounts.
///
/// Implementations either move the full amount or return an error; the
/// engine never observes a partial transfer.
pub trait AssetTransfer {
    /// Pull `amount` from `from` into the pool
    fn deposit(&mut self, from: &Pubkey, amount: u64) -> Result<()>;

    /// Pay `amount` out of the pool to `to`
    fn pay(&mut self, to: &Pubkey, amount: u64) -> Result<()>;

    /// Amount currently held by the pool
    fn pool_balance(&self) -> Result<u64>;
}

impl<T: AssetTransfer + ?Sized> AssetTransfer for &mut T {
    fn deposit(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        (**self).deposit(from, amount)
    }

    fn pay(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        (**self).pay(to, amount)
    }

    fn pool_balance(&self) -> Result<u64> {
        (**self).pool_balance()
    }
}

/// The single token account on the other side of an instruction's transfer
struct Counterparty<'info> {
    token_account: AccountInfo<'info>,
    owner: Pubkey,
    /// Present only when the owner signed and may fund a deposit
    signer: Option<AccountInfo<'info>>,
}

/// SPL token vault owned by the pool authority PDA
pub struct TokenVault<'info> {
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    vault_authority: AccountInfo<'info>,
    pool: Pubkey,
    authority_bump: u8,
    /// Vault balance at load time, adjusted by transfers made through `self`
    balance: u64,
    counterparty: Option<Counterparty<'info>>,
}

impl<'info> TokenVault<'info> {
    pub fn new(
        token_program: &Program<'info, Token>,
        vault: &Account<'info, TokenAccount>,
        vault_authority: &UncheckedAccount<'info>,
        pool: Pubkey,
        authority_bump: u8,
    ) -> Self {
        Self {
            token_program: token_program.to_account_info(),
            vault: vault.to_account_info(),
            vault_authority: vault_authority.to_account_info(),
            pool,
            authority_bump,
            balance: vault.amount,
            counterparty: None,
        }
    }

    /// Allow deposits signed by `signer` out of `token_account`
    pub fn with_depositor(
        mut self,
        token_account: &Account<'info, TokenAccount>,
        signer: &Signer<'info>,
    ) -> Self {
        self.counterparty = Some(Counterparty {
            token_account: token_account.to_account_info(),
            owner: token_account.owner,
            signer: Some(signer.to_account_info()),
        });
        self
    }

    /// Allow payouts into `token_account`
    pub fn with_recipient(mut self, token_account: &Account<'info, TokenAccount>) -> Self {
        self.counterparty = Some(Counterparty {
            token_account: token_account.to_account_info(),
            owner: token_account.owner,
            signer: None,
        });
        self
    }

    fn counterparty_for(&self, owner: &Pubkey) -> Result<&Counterparty<'info>> {
        match &self.counterparty {
            Some(counterparty) if counterparty.owner == *owner => Ok(counterparty),
            _ => err!(StakingError::Unauthorized),
        }
    }
}

impl<'info> AssetTransfer for TokenVault<'info> {
    fn deposit(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        let counterparty = self.counterparty_for(from)?;
        let authority = counterparty
            .signer
            .clone()
            .ok_or(StakingError::Unauthorized)?;
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        let cpi_accounts = Transfer {
            from: counterparty.token_account.clone(),
            to: self.vault.clone(),
            authority,
        };
        let cpi_ctx = CpiContext::new(self.token_program.clone(), cpi_accounts);
        token::transfer(cpi_ctx, amount)?;

        self.balance = balance;
        Ok(())
    }

    fn pay(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let counterparty = self.counterparty_for(to)?;
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;

        let bump = [self.authority_bump];
        let seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, self.pool.as_ref(), &bump];
        let signer_seeds = &[seeds];

        let cpi_accounts = Transfer {
            from: self.vault.clone(),
            to: counterparty.token_account.clone(),
            authority: self.vault_authority.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            cpi_accounts,
            signer_seeds,
        );
        token::transfer(cpi_ctx, amount)?;

        self.balance = balance;
        Ok(())
    }

    fn pool_balance(&self) -> Result<u64> {
        Ok(self.balance)
    }
}
