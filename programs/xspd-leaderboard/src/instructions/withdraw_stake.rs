// Withdraw Stake Instruction
//
// Returns staked tokens from the staking vault to the trader.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::guard::{self, Operation};
use crate::helpers::release_from_vault;
use crate::{constants::*, errors::*, state::*};

// Two-party release: the trader and the admin both sign.
#[derive(Accounts)]
pub struct WithdrawStake<'info> {
    pub trader: Signer<'info>,

    // co-signer, must equal global_config.admin
    pub admin: Signer<'info>,

    #[account(seeds = [CONFIG], bump = global_config.bump)]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [STAKE_RECORD, trader.key().as_ref()],
        bump = stake_record.bump,
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

    /// CHECK: PDA signer for the staking vault
    #[account(
        seeds = [VAULT_AUTHORITY, global_config.key().as_ref()],
        bump = global_config.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = trader_token_account.mint == global_config.token_mint @ LeaderboardError::InvalidTokenAccount,
        constraint = trader_token_account.owner == trader.key() @ LeaderboardError::InvalidTokenAccount,
    )]
    pub trader_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> WithdrawStake<'info> {
    pub fn withdraw_stake(&mut self, amount: u64) -> Result<()> {
        guard::authorize(
            Operation::WithdrawStake,
            &[self.trader.key(), self.admin.key()],
            &self.global_config.admin,
            &self.stake_record.trader,
        )?;

        // Record first, then the pool aggregate, then the transfer
        let now = Clock::get()?.unix_timestamp;
        let exited = self
            .stake_record
            .withdraw(amount, now, self.global_config.stake_lock_seconds)?;
        self.staking_pool
            .record_release(amount, exited, self.staking_vault.amount)?;

        release_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.staking_vault.to_account_info(),
            &self.trader_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &self.global_config.key(),
            self.global_config.vault_authority_bump,
        )?;

        msg!(
            "Withdrew {} for {} (balance {}, pool {})",
            amount,
            self.stake_record.trader,
            self.stake_record.staked_amount,
            self.staking_pool.total_staked
        );

        Ok(())
    }
}
