use anchor_lang::prelude::*;

use crate::guard::{self, Operation};
use crate::{constants::*, state::*};

// Self-registration: the record address is derived from the signer, so a
// trader can only ever create their own stats account.
#[derive(Accounts)]
pub struct RegisterTrader<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

    // read for the admin key, which may not register
    #[account(seeds = [CONFIG], bump = global_config.bump)]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        init_if_needed,
        payer = trader,
        space = ANCHOR_DISCRIMINATOR + TraderStats::INIT_SPACE,
        seeds = [TRADER_STATS, trader.key().as_ref()],
        bump,
    )]
    pub trader_stats: Account<'info, TraderStats>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterTrader<'info> {
    pub fn register_trader(&mut self, bumps: &RegisterTraderBumps) -> Result<()> {
        let trader = self.trader.key();
        guard::authorize(
            Operation::RegisterTrader,
            &[trader],
            &self.global_config.admin,
            &trader,
        )?;

        let now = Clock::get()?.unix_timestamp;
        self.trader_stats.register(trader, now, bumps.trader_stats)?;

        msg!("Trader registered: {}", trader);

        Ok(())
    }
}
