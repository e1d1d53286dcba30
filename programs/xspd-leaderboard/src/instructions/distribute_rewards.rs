// Distribute Rewards Instruction
//
// Admin-triggered batch payout from the treasury to every listed trader.
// The batch is all-or-nothing: validation and the treasury debit happen
// before the first transfer.

use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::token::{Token, TokenAccount};

use crate::guard::{self, Operation};
use crate::helpers::release_from_vault;
use crate::{constants::*, errors::*, state::*};

// Batch payout. Trader accounts are passed as remaining accounts in
// (trader_stats, trader_token_account) pairs, both writable.
#[derive(Accounts)]
pub struct DistributeRewards<'info> {
    // checked against global_config.admin by the guard
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    // ledger debited once for the whole batch
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

    pub token_program: Program<'info, Token>,
}

// One validated recipient of the batch
struct Payout<'info> {
    stats: Account<'info, TraderStats>,
    destination: &'info AccountInfo<'info>,
    amount: u64,
}

impl<'info> DistributeRewards<'info> {
    pub fn distribute_rewards(&mut self, trader_accounts: &'info [AccountInfo<'info>]) -> Result<()> {
        guard::authorize(
            Operation::DistributeRewards,
            &[self.admin.key()],
            &self.global_config.admin,
            &Pubkey::default(),
        )?;

        let now = Clock::get()?.unix_timestamp;
        self.global_config.assert_distribution_due(now)?;

        require!(
            trader_accounts.len() % 2 == 0,
            LeaderboardError::InvalidTraderAccounts
        );

        // Validate every pair before any funds move
        let mut payouts: Vec<Payout<'info>> = Vec::with_capacity(trader_accounts.len() / 2);
        for pair in trader_accounts.chunks_exact(2) {
            let payout = self.load_payout(&pair[0], &pair[1])?;
            require!(
                !payouts.iter().any(|p| p.stats.trader == payout.stats.trader),
                LeaderboardError::DuplicateTrader
            );
            payouts.push(payout);
        }

        // all-or-nothing: the treasury has to cover the whole batch up front
        let total = payouts.iter().try_fold(0u64, |acc, p| {
            acc.checked_add(p.amount).ok_or(LeaderboardError::Overflow)
        })?;
        self.treasury.record_payout(total, self.treasury_vault.amount)?;

        let config_key = self.global_config.key();
        let vault_authority_bump = self.global_config.vault_authority_bump;
        let mut paid_traders = 0u64;

        // Pay out and reset each entitlement
        // Remaining accounts are not persisted by Anchor, so each record is
        // written back with exit()
        for mut payout in payouts {
            if payout.amount == 0 {
                continue;
            }

            release_from_vault(
                payout.amount,
                &self.token_program.to_account_info(),
                &self.treasury_vault.to_account_info(),
                payout.destination,
                &self.vault_authority.to_account_info(),
                &config_key,
                vault_authority_bump,
            )?;

            payout.stats.settle_rewards(payout.amount, now)?;
            payout.stats.exit(&crate::ID)?;

            msg!("Reward {} paid to {}", payout.amount, payout.stats.trader);
            paid_traders = paid_traders.checked_add(1).ok_or(LeaderboardError::Overflow)?;
        }

        self.global_config.mark_distributed(now)?;

        msg!(
            "Distribution complete: {} paid to {} traders at {}",
            total,
            paid_traders,
            now
        );

        Ok(())
    }

    // Validates one (trader_stats, token_account) pair and computes its share.
    fn load_payout(
        &self,
        stats_info: &'info AccountInfo<'info>,
        token_info: &'info AccountInfo<'info>,
    ) -> Result<Payout<'info>> {
        require!(
            stats_info.is_writable && token_info.is_writable,
            LeaderboardError::InvalidTraderAccounts
        );

        // Account::try_from checks owner and discriminator; the address is
        // then re-derived from the stored trader and bump
        let stats = Account::<TraderStats>::try_from(stats_info)?;
        let expected = Pubkey::create_program_address(
            &[TRADER_STATS, stats.trader.as_ref(), &[stats.bump]],
            &crate::ID,
        )
        .map_err(|_| error!(LeaderboardError::InvalidTraderAccounts))?;
        require_keys_eq!(*stats_info.key, expected, LeaderboardError::InvalidTraderAccounts);

        // destination must hold the reward mint and belong to the trader
        let token = Account::<TokenAccount>::try_from(token_info)?;
        require_keys_eq!(
            token.mint,
            self.global_config.token_mint,
            LeaderboardError::InvalidTokenAccount
        );
        require_keys_eq!(token.owner, stats.trader, LeaderboardError::InvalidTokenAccount);

        let amount = self
            .global_config
            .reward_policy
            .reward_for(stats.unclaimed_trades, stats.unclaimed_notional)?;

        Ok(Payout {
            stats,
            destination: token_info,
            amount,
        })
    }
}
