// Record Failed Trade Instruction
//
// Counts a failed attempt. Performance counters and the reward entitlement
// are left alone.

use anchor_lang::prelude::*;

use crate::guard::{self, Operation};
use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct RecordFailedTrade<'info> {
    pub trader: Signer<'info>,

    // record address is derived from the signer
    #[account(
        mut,
        seeds = [TRADER_STATS, trader.key().as_ref()],
        bump = trader_stats.bump,
    )]
    pub trader_stats: Account<'info, TraderStats>,

    // source of the failure cap
    #[account(seeds = [CONFIG], bump = global_config.bump)]
    pub global_config: Box<Account<'info, GlobalConfig>>,
}

impl<'info> RecordFailedTrade<'info> {
    pub fn record_failed_trade(&mut self) -> Result<()> {
        guard::authorize(
            Operation::RecordFailedTrade,
            &[self.trader.key()],
            &self.global_config.admin,
            &self.trader_stats.trader,
        )?;

        self.trader_stats
            .record_failed_trade(self.global_config.max_failed_trades)?;

        msg!(
            "Failed trade recorded for {} (failed {})",
            self.trader_stats.trader,
            self.trader_stats.failed_trades
        );

        Ok(())
    }
}
