// Record Trade Instruction
//
// Validates the trade price against the reference, updates the trader's
// counters and refreshes the leaderboard.

use anchor_lang::prelude::*;

use crate::guard::{self, Operation};
use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct RecordTrade<'info> {
    pub trader: Signer<'info>,

    #[account(
        mut,
        seeds = [TRADER_STATS, trader.key().as_ref()],
        bump = trader_stats.bump,
    )]
    pub trader_stats: Account<'info, TraderStats>,

    // holds the leaderboard
    #[account(
        mut,
        seeds = [CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    // None until the admin publishes a first price
    #[account(
        seeds = [PRICE_REFERENCE, global_config.key().as_ref()],
        bump,
    )]
    pub price_reference: Option<Account<'info, PriceReference>>,
}

impl<'info> RecordTrade<'info> {
    pub fn record_trade(&mut self, volume: u64, price: u64) -> Result<()> {
        guard::authorize(
            Operation::RecordTrade,
            &[self.trader.key()],
            &self.global_config.admin,
            &self.trader_stats.trader,
        )?;

        // Price check first so a rejected trade touches nothing
        let reference = self
            .price_reference
            .as_ref()
            .ok_or(LeaderboardError::PriceUnavailable)?;
        reference.validate_trade_price(price, self.global_config.price_tolerance_bps)?;

        let now = Clock::get()?.unix_timestamp;
        let cooldown = self.global_config.trade_cooldown;
        let notional = self.trader_stats.record_trade(volume, price, now, cooldown)?;

        let rank = update_leaderboard(&mut self.global_config.leaderboard, &self.trader_stats);

        msg!(
            "Trade recorded for {}: volume {} price {} notional {} (trades {}, rank {:?})",
            self.trader_stats.trader,
            volume,
            price,
            notional,
            self.trader_stats.total_trades,
            rank
        );

        Ok(())
    }
}
