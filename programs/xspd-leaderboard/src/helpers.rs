// Leaderboard Helper Functions
//
// CPI helpers shared by the staking and rewards instructions.
// Both vaults are owned by the vault authority PDA, so every payout goes
// through `release_from_vault`.

use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Transfer};

use crate::constants::*;

// CPI HELPERS

// Transfer tokens with a user-provided signature
// The owner of `from` signs the transaction itself
// Used in stake_tokens and fund_treasury
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Transfer tokens out of a program vault
// Signs as the vault authority PDA with seeds [VAULT_AUTHORITY, config, bump]
// Used in withdraw_stake, claim_rewards and distribute_rewards
pub fn release_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    vault_authority: &AccountInfo<'info>,
    global_config: &Pubkey,
    vault_authority_bump: u8,
) -> Result<()> {
    let authority_seeds = &[
        VAULT_AUTHORITY,
        global_config.as_ref(),
        &[vault_authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: vault.clone(),
                to: destination.clone(),
                authority: vault_authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
