// Initialize Vaults Instruction
//
// Creates the treasury and staking pool ledgers and their token vaults.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::guard::{self, Operation};
use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct InitializeVaults<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump = global_config.bump,
        has_one = token_mint @ LeaderboardError::InvalidTokenAccount,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    pub token_mint: Box<Account<'info, Mint>>,

    /// CHECK: PDA signer for both vaults
    #[account(
        seeds = [VAULT_AUTHORITY, global_config.key().as_ref()],
        bump = global_config.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + Treasury::INIT_SPACE,
        seeds = [TREASURY, global_config.key().as_ref()],
        bump,
    )]
    pub treasury: Box<Account<'info, Treasury>>,

    // reward funds
    #[account(
        init,
        payer = admin,
        seeds = [TREASURY_VAULT, global_config.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub treasury_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + StakingPool::INIT_SPACE,
        seeds = [STAKING_POOL, global_config.key().as_ref()],
        bump,
    )]
    pub staking_pool: Box<Account<'info, StakingPool>>,

    // custodied stakes, kept apart from rewards
    #[account(
        init,
        payer = admin,
        seeds = [STAKING_VAULT, global_config.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub staking_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeVaults<'info> {
    pub fn initialize_vaults(&mut self, bumps: &InitializeVaultsBumps) -> Result<()> {
        guard::authorize(
            Operation::InitializeVaults,
            &[self.admin.key()],
            &self.global_config.admin,
            &Pubkey::default(),
        )?;

        self.treasury.set_inner(Treasury {
            total_funded: 0,
            total_paid_out: 0,
            vault: self.treasury_vault.key(),
            bump: bumps.treasury,
        });

        self.staking_pool.set_inner(StakingPool {
            total_staked: 0,
            stakers_count: 0,
            vault: self.staking_vault.key(),
            bump: bumps.staking_pool,
        });

        msg!(
            "Vaults created: treasury {} staking {}",
            self.treasury_vault.key(),
            self.staking_vault.key()
        );

        Ok(())
    }
}
