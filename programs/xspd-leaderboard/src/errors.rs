use anchor_lang::prelude::*;

#[error_code]
pub enum LeaderboardError {
    // Authorization errors
    #[msg("Signer set does not satisfy the authorization rule for this instruction")]
    Unauthorized,

    // Lifecycle errors
    #[msg("Global configuration is already initialized")]
    AlreadyInitialized,

    #[msg("Trader is already registered")]
    AlreadyRegistered,

    #[msg("Invalid configuration parameters")]
    InvalidConfig,

    // Input errors
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    // Trading errors
    #[msg("Cooldown period between trades has not passed yet")]
    CooldownActive,

    #[msg("No reference price has been published")]
    PriceUnavailable,

    #[msg("Trade price deviates too far from the reference price")]
    PriceDeviation,

    #[msg("Too many failed trades recorded for this trader")]
    TooManyFailedTrades,

    // Staking errors
    #[msg("Insufficient staked amount")]
    InsufficientStake,

    #[msg("Stake is still locked")]
    StakeLocked,

    // Reward errors
    #[msg("Treasury cannot cover the computed payout")]
    NoFundsAvailable,

    #[msg("No rewards accrued to claim")]
    NothingToClaim,

    #[msg("Not enough time has passed since the last reward distribution")]
    DistributionTooSoon,

    #[msg("Trader accounts must be passed as (trader_stats, token_account) pairs")]
    InvalidTraderAccounts,

    #[msg("Trader appears more than once in the distribution list")]
    DuplicateTrader,

    #[msg("Token account does not match the configured mint or owner")]
    InvalidTokenAccount,

    // Arithmetic errors
    #[msg("Arithmetic overflow occurred")]
    Overflow,
}

#[cfg(test)]
pub(crate) fn error_code_of<T: std::fmt::Debug>(result: Result<T>) -> u32 {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => err.error_code_number,
        other => panic!("expected a program error, got {:?}", other),
    }
}
