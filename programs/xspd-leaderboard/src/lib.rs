// xSPD Trading Leaderboard
//
// Records trader performance, keeps a top-10 leaderboard, custodies staked
// tokens and pays rewards out of a funded treasury.
//
// Instructions:
// - initialize / initialize_vaults: global config, treasury and staking vaults
// - update_reference_price: admin-maintained price reference for trade checks
// - register_trader / record_trade / record_failed_trade: performance ledger
// - stake_tokens / withdraw_stake: custodial staking (withdrawal co-signed by admin)
// - fund_treasury / distribute_rewards / claim_rewards: reward payouts

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod guard;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;

declare_id!("HeZ5Ymsd6hZHFnq7mPXLwDzKQYRmeK4RFxadfDZG1gDi");

#[program]
pub mod xspd_leaderboard {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        ctx.accounts.initialize(params, &ctx.bumps)
    }

    pub fn initialize_vaults(ctx: Context<InitializeVaults>) -> Result<()> {
        ctx.accounts.initialize_vaults(&ctx.bumps)
    }

    pub fn update_reference_price(ctx: Context<UpdateReferencePrice>, price: u64) -> Result<()> {
        ctx.accounts.update_reference_price(price, &ctx.bumps)
    }

    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        ctx.accounts.fund_treasury(amount)
    }

    pub fn register_trader(ctx: Context<RegisterTrader>) -> Result<()> {
        ctx.accounts.register_trader(&ctx.bumps)
    }

    pub fn record_trade(ctx: Context<RecordTrade>, volume: u64, price: u64) -> Result<()> {
        ctx.accounts.record_trade(volume, price)
    }

    pub fn record_failed_trade(ctx: Context<RecordFailedTrade>) -> Result<()> {
        ctx.accounts.record_failed_trade()
    }

    pub fn distribute_rewards<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeRewards<'info>>,
    ) -> Result<()> {
        ctx.accounts.distribute_rewards(ctx.remaining_accounts)
    }

    pub fn stake_tokens(ctx: Context<StakeTokens>, amount: u64) -> Result<()> {
        ctx.accounts.stake_tokens(amount, &ctx.bumps)
    }

    pub fn withdraw_stake(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_stake(amount)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        ctx.accounts.claim_rewards()
    }
}
