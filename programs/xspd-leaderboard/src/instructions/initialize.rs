use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::guard::{self, Operation};
use crate::{constants::*, state::*};

// Bootstraps the global configuration. Whoever signs first becomes admin;
// the config is a singleton, so a second call fails with AlreadyInitialized.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + GlobalConfig::INIT_SPACE,
        seeds = [CONFIG],
        bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    // mint used for stakes and rewards
    pub token_mint: Account<'info, Mint>,

    /// CHECK: PDA that will own the treasury and staking vaults
    #[account(
        seeds = [VAULT_AUTHORITY, global_config.key().as_ref()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, params: InitializeParams, bumps: &InitializeBumps) -> Result<()> {
        let admin = self.admin.key();
        guard::authorize(Operation::Initialize, &[admin], &admin, &Pubkey::default())?;

        self.global_config.apply(admin, self.token_mint.key(), &params)?;
        self.global_config.bump = bumps.global_config;
        self.global_config.vault_authority_bump = bumps.vault_authority;

        msg!(
            "Leaderboard initialized: admin {} mint {} policy {:?}",
            admin,
            self.global_config.token_mint,
            self.global_config.reward_policy
        );

        Ok(())
    }
}
