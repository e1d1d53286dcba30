
use anchor_lang::prelude::*;

use crate::errors::*;

// one per trader, created on first deposit
#[account]
#[derive(InitSpace, Default)]
pub struct StakeRecord {
    pub trader: Pubkey,
    pub staked_amount: u64,
    pub last_deposit_at: i64,
    pub bump: u8,
}

// aggregate liability backing every StakeRecord
#[account]
#[derive(InitSpace, Default)]
pub struct StakingPool {
    pub total_staked: u64,
    pub stakers_count: u64,
    pub vault: Pubkey,
    pub bump: u8,
}

impl StakeRecord {
    pub fn is_initialized(&self) -> bool {
        self.trader != Pubkey::default()
    }

    /// Binds a freshly allocated record to its owner. Later calls only
    /// verify ownership.
    pub fn bind(&mut self, trader: Pubkey, bump: u8) -> Result<()> {
        if self.is_initialized() {
            require_keys_eq!(self.trader, trader, LeaderboardError::Unauthorized);
        } else {
            self.trader = trader;
            self.bump = bump;
        }
        Ok(())
    }

    /// Returns true when this deposit turned an empty record into a staker.
    pub fn deposit(&mut self, amount: u64, now: i64) -> Result<bool> {
        require!(amount > 0, LeaderboardError::InvalidAmount);

        let was_empty = self.staked_amount == 0;
        self.staked_amount = self
            .staked_amount
            .checked_add(amount)
            .ok_or(LeaderboardError::Overflow)?;
        self.last_deposit_at = now;

        Ok(was_empty)
    }

    /// Returns true when the record is empty afterwards.
    pub fn withdraw(&mut self, amount: u64, now: i64, lock_seconds: i64) -> Result<bool> {
        require!(amount > 0, LeaderboardError::InvalidAmount);
        require!(amount <= self.staked_amount, LeaderboardError::InsufficientStake);

        let unlocks_at = self
            .last_deposit_at
            .checked_add(lock_seconds)
            .ok_or(LeaderboardError::Overflow)?;
        require!(now >= unlocks_at, LeaderboardError::StakeLocked);

        self.staked_amount = self
            .staked_amount
            .checked_sub(amount)
            .ok_or(LeaderboardError::InsufficientStake)?;

        Ok(self.staked_amount == 0)
    }
}

impl StakingPool {
    pub fn record_deposit(&mut self, amount: u64, new_staker: bool) -> Result<()> {
        let total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(LeaderboardError::Overflow)?;
        let stakers_count = if new_staker {
            self.stakers_count.checked_add(1).ok_or(LeaderboardError::Overflow)?
        } else {
            self.stakers_count
        };

        self.total_staked = total_staked;
        self.stakers_count = stakers_count;
        Ok(())
    }

    pub fn record_release(&mut self, amount: u64, staker_exited: bool, vault_balance: u64) -> Result<()> {
        // the vault must still back the full liability being released
        require!(vault_balance >= amount, LeaderboardError::InsufficientStake);

        let total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(LeaderboardError::InsufficientStake)?;
        let stakers_count = if staker_exited {
            self.stakers_count.checked_sub(1).ok_or(LeaderboardError::Overflow)?
        } else {
            self.stakers_count
        };

        self.total_staked = total_staked;
        self.stakers_count = stakers_count;
        Ok(())
    }
}
