use anchor_lang::prelude::*;

use crate::guard::{self, Operation};
use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct UpdateReferencePrice<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(seeds = [CONFIG], bump = global_config.bump)]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        init_if_needed,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + PriceReference::INIT_SPACE,
        seeds = [PRICE_REFERENCE, global_config.key().as_ref()],
        bump,
    )]
    pub price_reference: Account<'info, PriceReference>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpdateReferencePrice<'info> {
    pub fn update_reference_price(&mut self, price: u64, bumps: &UpdateReferencePriceBumps) -> Result<()> {
        guard::authorize(
            Operation::UpdateReferencePrice,
            &[self.admin.key()],
            &self.global_config.admin,
            &Pubkey::default(),
        )?;

        let now = Clock::get()?.unix_timestamp;
        self.price_reference.publish(price, now, bumps.price_reference)?;

        msg!("Reference price set to {} at {}", price, now);

        Ok(())
    }
}
