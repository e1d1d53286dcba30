// Claim Rewards Instruction
//
// Pays one trader's accrued reward from the treasury and resets the
// entitlement counters.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::guard::{self, Operation};
use crate::helpers::release_from_vault;
use crate::{constants::*, errors::*, state::*};

// Individual claim. Funds leave custody, so the admin co-signs.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    pub trader: Signer<'info>,

    pub admin: Signer<'info>,

    #[account(seeds = [CONFIG], bump = global_config.bump)]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [TRADER_STATS, trader.key().as_ref()],
        bump = trader_stats.bump,
    )]
    pub trader_stats: Account<'info, TraderStats>,

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

    /// CHECK: PDA signer for the treasury vault
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
    // payout destination
    pub trader_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ClaimRewards<'info> {
    pub fn claim_rewards(&mut self) -> Result<()> {
        guard::authorize(
            Operation::ClaimRewards,
            &[self.trader.key(), self.admin.key()],
            &self.global_config.admin,
            &self.trader_stats.trader,
        )?;

        // Reward is derived from the entitlement since the last payout
        let reward = self
            .global_config
            .reward_policy
            .reward_for(self.trader_stats.unclaimed_trades, self.trader_stats.unclaimed_notional)?;
        require!(reward > 0, LeaderboardError::NothingToClaim);

        // Ledger and vault balance must both cover the payout
        self.treasury.record_payout(reward, self.treasury_vault.amount)?;

        release_from_vault(
            reward,
            &self.token_program.to_account_info(),
            &self.treasury_vault.to_account_info(),
            &self.trader_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &self.global_config.key(),
            self.global_config.vault_authority_bump,
        )?;

        let now = Clock::get()?.unix_timestamp;
        self.trader_stats.settle_rewards(reward, now)?;

        msg!(
            "Claimed {} for {} (treasury available {})",
            reward,
            self.trader_stats.trader,
            self.treasury.available()?
        );

        Ok(())
    }
}
