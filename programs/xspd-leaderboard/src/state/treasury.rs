
use anchor_lang::prelude::*;

use crate::errors::*;

// custodial balance funding reward payouts
#[account]
#[derive(InitSpace, Default)]
pub struct Treasury {
    pub total_funded: u64,
    pub total_paid_out: u64,
    pub vault: Pubkey,
    pub bump: u8,
}

impl Treasury {
    pub fn available(&self) -> Result<u64> {
        Ok(self
            .total_funded
            .checked_sub(self.total_paid_out)
            .ok_or(LeaderboardError::Overflow)?)
    }

    pub fn record_funding(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LeaderboardError::InvalidAmount);
        self.total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(LeaderboardError::Overflow)?;
        Ok(())
    }

    /// Debits `amount` from the ledger. Both the recorded funding and the
    /// vault's actual balance must cover it; nothing is truncated.
    pub fn record_payout(&mut self, amount: u64, vault_balance: u64) -> Result<()> {
        require!(
            amount <= self.available()? && amount <= vault_balance,
            LeaderboardError::NoFundsAvailable
        );
        self.total_paid_out = self
            .total_paid_out
            .checked_add(amount)
            .ok_or(LeaderboardError::Overflow)?;
        Ok(())
    }
}
