// Fund Treasury Instruction
//
// Anyone may top up the treasury vault. Funding never moves value out of
// custody.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::guard::{self, Operation};
use crate::helpers::transfer_tokens;
use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    pub funder: Signer<'info>,

    #[account(seeds = [CONFIG], bump = global_config.bump)]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [TREASURY, global_config.key().as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        address = treasury.vault @ LeaderboardError::InvalidTokenAccount,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_token_account.mint == global_config.token_mint @ LeaderboardError::InvalidTokenAccount,
        constraint = funder_token_account.owner == funder.key() @ LeaderboardError::InvalidTokenAccount,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> FundTreasury<'info> {
    pub fn fund_treasury(&mut self, amount: u64) -> Result<()> {
        let funder = self.funder.key();
        guard::authorize(Operation::FundTreasury, &[funder], &self.global_config.admin, &funder)?;

        self.treasury.record_funding(amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.funder_token_account.to_account_info(),
            &self.treasury_vault.to_account_info(),
            &self.funder.to_account_info(),
        )?;

        msg!(
            "Treasury funded with {} by {} (available {})",
            amount,
            funder,
            self.treasury.available()?
        );

        Ok(())
    }
}
