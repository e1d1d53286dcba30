
use anchor_lang::prelude::borsh;
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;
use crate::state::LeaderboardEntry;

// program-wide configuration, one per deployment
#[account]
#[derive(InitSpace, Default)]
pub struct GlobalConfig {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub last_reward_distribution: i64, // 0 = never distributed
    pub distribution_interval: i64,
    pub trade_cooldown: i64,
    pub price_tolerance_bps: u16,
    pub stake_lock_seconds: i64,
    pub max_failed_trades: u64, // 0 = no cap
    pub reward_policy: RewardPolicy,
    pub leaderboard: [LeaderboardEntry; LEADERBOARD_SIZE],
    pub bump: u8,
    pub vault_authority_bump: u8,
}

impl GlobalConfig {
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn apply(&mut self, admin: Pubkey, token_mint: Pubkey, params: &InitializeParams) -> Result<()> {
        require!(!self.is_initialized(), LeaderboardError::AlreadyInitialized);
        params.validate()?;

        self.admin = admin;
        self.token_mint = token_mint;
        self.last_reward_distribution = 0;
        self.distribution_interval = params.distribution_interval;
        self.trade_cooldown = params.trade_cooldown;
        self.price_tolerance_bps = params.price_tolerance_bps;
        self.stake_lock_seconds = params.stake_lock_seconds;
        self.max_failed_trades = params.max_failed_trades;
        self.reward_policy = params.reward_policy;
        self.leaderboard = [LeaderboardEntry::default(); LEADERBOARD_SIZE];
        Ok(())
    }

    pub fn has_distributed(&self) -> bool {
        self.last_reward_distribution != 0
    }

    // The timestamp only ever moves forward, and no faster than the interval.
    pub fn assert_distribution_due(&self, now: i64) -> Result<()> {
        if !self.has_distributed() {
            return Ok(());
        }

        require!(now > self.last_reward_distribution, LeaderboardError::DistributionTooSoon);

        let next_allowed = self
            .last_reward_distribution
            .checked_add(self.distribution_interval)
            .ok_or(LeaderboardError::Overflow)?;
        require!(now >= next_allowed, LeaderboardError::DistributionTooSoon);

        Ok(())
    }

    pub fn mark_distributed(&mut self, now: i64) -> Result<()> {
        self.assert_distribution_due(now)?;
        // a zero clock would read back as "never distributed"
        require!(now > 0, LeaderboardError::DistributionTooSoon);
        self.last_reward_distribution = now;
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardPolicy {
    /// Fixed schedule: every trade since the last payout earns `amount`
    PerTrade { amount: u64 },
    /// Proportional: a share of the notional traded since the last payout
    NotionalShare { basis_points: u64 },
}

impl Space for RewardPolicy {
    const INIT_SPACE: usize = 1 + 8;
}

impl Default for RewardPolicy {
    fn default() -> Self {
        RewardPolicy::PerTrade { amount: DEFAULT_REWARD_PER_TRADE }
    }
}

impl RewardPolicy {
    pub fn is_valid(&self) -> bool {
        match *self {
            RewardPolicy::PerTrade { amount } => amount > 0,
            RewardPolicy::NotionalShare { basis_points } => {
                basis_points > 0 && basis_points <= BASIS_POINTS_DENOMINATOR
            }
        }
    }

    pub fn reward_for(&self, unclaimed_trades: u64, unclaimed_notional: u64) -> Result<u64> {
        match *self {
            RewardPolicy::PerTrade { amount } => Ok(unclaimed_trades
                .checked_mul(amount)
                .ok_or(LeaderboardError::Overflow)?),
            RewardPolicy::NotionalShare { basis_points } => {
                let share = (unclaimed_notional as u128)
                    .checked_mul(basis_points as u128)
                    .ok_or(LeaderboardError::Overflow)?
                    / BASIS_POINTS_DENOMINATOR as u128;
                Ok(u64::try_from(share).map_err(|_| LeaderboardError::Overflow)?)
            }
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeParams {
    pub distribution_interval: i64,
    pub trade_cooldown: i64,
    pub price_tolerance_bps: u16,
    pub stake_lock_seconds: i64,
    pub max_failed_trades: u64,
    pub reward_policy: RewardPolicy,
}

impl Default for InitializeParams {
    fn default() -> Self {
        Self {
            distribution_interval: DEFAULT_DISTRIBUTION_INTERVAL_SECONDS,
            trade_cooldown: DEFAULT_TRADE_COOLDOWN_SECONDS,
            price_tolerance_bps: DEFAULT_PRICE_TOLERANCE_BPS,
            stake_lock_seconds: 0,
            max_failed_trades: DEFAULT_MAX_FAILED_TRADES,
            reward_policy: RewardPolicy::default(),
        }
    }
}

impl InitializeParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.distribution_interval >= 0, LeaderboardError::InvalidConfig);
        require!(self.trade_cooldown >= 0, LeaderboardError::InvalidConfig);
        require!(self.stake_lock_seconds >= 0, LeaderboardError::InvalidConfig);
        require!(
            self.price_tolerance_bps <= MAX_PRICE_TOLERANCE_BPS,
            LeaderboardError::InvalidConfig
        );
        require!(self.reward_policy.is_valid(), LeaderboardError::InvalidConfig);
        Ok(())
    }
}
