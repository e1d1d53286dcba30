// Stake Tokens Instruction
//
// Moves tokens from the trader into the staking vault and credits the
// trader's stake record.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::guard::{self, Operation};
use crate::helpers::transfer_tokens;
use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct StakeTokens<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

    #[account(seeds = [CONFIG], bump = global_config.bump)]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    // created on the first deposit
    #[account(
        init_if_needed,
        payer = trader,
        space = ANCHOR_DISCRIMINATOR + StakeRecord::INIT_SPACE,
        seeds = [STAKE_RECORD, trader.key().as_ref()],
        bump,
    )]
    pub stake_record: Account<'info, StakeRecord>,

    #[account(
        mut,
        seeds = [STAKING_POOL, global_config.key().as_ref()],
        bump = staking_pool.bump,
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        mut,
        address = staking_pool.vault @ LeaderboardError::InvalidTokenAccount,
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = trader_token_account.mint == global_config.token_mint @ LeaderboardError::InvalidTokenAccount,
        constraint = trader_token_account.owner == trader.key() @ LeaderboardError::InvalidTokenAccount,
    )]
    pub trader_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> StakeTokens<'info> {
    pub fn stake_tokens(&mut self, amount: u64, bumps: &StakeTokensBumps) -> Result<()> {
        let trader = self.trader.key();
        // A fresh record takes the signer as owner; an existing one must match
        self.stake_record.bind(trader, bumps.stake_record)?;

        guard::authorize(
            Operation::StakeTokens,
            &[trader],
            &self.global_config.admin,
            &self.stake_record.trader,
        )?;

        let now = Clock::get()?.unix_timestamp;
        let new_staker = self.stake_record.deposit(amount, now)?;
        self.staking_pool.record_deposit(amount, new_staker)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.trader_token_account.to_account_info(),
            &self.staking_vault.to_account_info(),
            &self.trader.to_account_info(),
        )?;

        msg!(
            "Staked {} for {} (balance {}, pool {})",
            amount,
            trader,
            self.stake_record.staked_amount,
            self.staking_pool.total_staked
        );

        Ok(())
    }
}
