
use anchor_lang::prelude::*;

use crate::errors::*;

// per-trader performance counters and accrued reward entitlement
#[account]
#[derive(InitSpace, Default)]
pub struct TraderStats {
    pub trader: Pubkey,
    pub total_trades: u64,
    pub failed_trades: u64,
    pub total_volume: u64,
    pub total_notional: u64,
    // entitlement since the last payout
    pub unclaimed_trades: u64,
    pub unclaimed_notional: u64,
    pub total_rewards_received: u64,
    pub last_trade_at: i64,
    pub last_reward_at: i64,
    pub registered_at: i64,
    pub bump: u8,
}

impl TraderStats {
    pub fn is_registered(&self) -> bool {
        self.trader != Pubkey::default()
    }

    pub fn register(&mut self, trader: Pubkey, now: i64, bump: u8) -> Result<()> {
        require!(!self.is_registered(), LeaderboardError::AlreadyRegistered);

        *self = TraderStats {
            trader,
            registered_at: now,
            bump,
            ..TraderStats::default()
        };
        Ok(())
    }

    /// Records a successful trade. Every counter is computed before any is
    /// written, so a failing check leaves the record untouched.
    pub fn record_trade(&mut self, volume: u64, price: u64, now: i64, cooldown: i64) -> Result<u64> {
        require!(volume > 0 && price > 0, LeaderboardError::InvalidAmount);

        // the very first trade is never throttled
        if self.last_trade_at != 0 {
            let next_allowed = self
                .last_trade_at
                .checked_add(cooldown)
                .ok_or(LeaderboardError::Overflow)?;
            require!(now >= next_allowed, LeaderboardError::CooldownActive);
        }

        let notional = volume.checked_mul(price).ok_or(LeaderboardError::Overflow)?;

        let total_trades = self.total_trades.checked_add(1).ok_or(LeaderboardError::Overflow)?;
        let unclaimed_trades = self.unclaimed_trades.checked_add(1).ok_or(LeaderboardError::Overflow)?;
        let total_volume = self.total_volume.checked_add(volume).ok_or(LeaderboardError::Overflow)?;
        let total_notional = self
            .total_notional
            .checked_add(notional)
            .ok_or(LeaderboardError::Overflow)?;
        let unclaimed_notional = self
            .unclaimed_notional
            .checked_add(notional)
            .ok_or(LeaderboardError::Overflow)?;

        self.total_trades = total_trades;
        self.unclaimed_trades = unclaimed_trades;
        self.total_volume = total_volume;
        self.total_notional = total_notional;
        self.unclaimed_notional = unclaimed_notional;
        self.last_trade_at = now;

        Ok(notional)
    }

    /// `max_failed_trades == 0` disables the cap.
    pub fn record_failed_trade(&mut self, max_failed_trades: u64) -> Result<()> {
        require!(
            max_failed_trades == 0 || self.failed_trades < max_failed_trades,
            LeaderboardError::TooManyFailedTrades
        );
        self.failed_trades = self
            .failed_trades
            .checked_add(1)
            .ok_or(LeaderboardError::Overflow)?;
        Ok(())
    }

    /// Clears the accrued entitlement after `paid` left the treasury.
    /// Lifetime counters stay as leaderboard history.
    pub fn settle_rewards(&mut self, paid: u64, now: i64) -> Result<()> {
        self.total_rewards_received = self
            .total_rewards_received
            .checked_add(paid)
            .ok_or(LeaderboardError::Overflow)?;
        self.unclaimed_trades = 0;
        self.unclaimed_notional = 0;
        self.last_reward_at = now;
        Ok(())
    }
}
