pub const CONFIG: &[u8] = b"config";
pub const TRADER_STATS: &[u8] = b"trader_stats";
pub const STAKE_RECORD: &[u8] = b"stake_record";
pub const STAKING_POOL: &[u8] = b"staking_pool";
pub const STAKING_VAULT: &[u8] = b"staking_vault";
pub const TREASURY: &[u8] = b"treasury";
pub const TREASURY_VAULT: &[u8] = b"treasury_vault";
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";
pub const PRICE_REFERENCE: &[u8] = b"price_reference";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Number of ranked slots kept in the global config
pub const LEADERBOARD_SIZE: usize = 10;

pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

// Upper bound for the oracle tolerance (10%)
pub const MAX_PRICE_TOLERANCE_BPS: u16 = 1_000;

// Defaults used by clients when building InitializeParams
pub const DEFAULT_TRADE_COOLDOWN_SECONDS: i64 = 30;
pub const DEFAULT_DISTRIBUTION_INTERVAL_SECONDS: i64 = 3_600;
pub const DEFAULT_PRICE_TOLERANCE_BPS: u16 = 50; // 0.5%
pub const DEFAULT_MAX_FAILED_TRADES: u64 = 5;
pub const DEFAULT_REWARD_PER_TRADE: u64 = 10_000_000; // 0.01 token at 9 decimals
