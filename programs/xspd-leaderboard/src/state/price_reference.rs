
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;

// admin-published reference price that recorded trades are checked against
#[account]
#[derive(InitSpace, Default)]
pub struct PriceReference {
    pub price: u64,
    pub updated_at: i64,
    pub bump: u8,
}

impl PriceReference {
    pub fn publish(&mut self, price: u64, now: i64, bump: u8) -> Result<()> {
        require!(price > 0, LeaderboardError::InvalidAmount);
        self.price = price;
        self.updated_at = now;
        self.bump = bump;
        Ok(())
    }

    // |price - reference| / reference <= tolerance_bps / 10_000
    pub fn validate_trade_price(&self, price: u64, tolerance_bps: u16) -> Result<()> {
        require!(self.price > 0, LeaderboardError::PriceUnavailable);

        let deviation = (self.price.abs_diff(price) as u128)
            .checked_mul(BASIS_POINTS_DENOMINATOR as u128)
            .ok_or(LeaderboardError::Overflow)?;
        let allowed = (self.price as u128)
            .checked_mul(tolerance_bps as u128)
            .ok_or(LeaderboardError::Overflow)?;
        require!(deviation <= allowed, LeaderboardError::PriceDeviation);

        Ok(())
    }
}
