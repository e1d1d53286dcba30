pub mod initialize;
pub mod initialize_vaults;
pub mod update_reference_price;
pub mod fund_treasury;
pub mod register_trader;
pub mod record_trade;
pub mod record_failed_trade;
pub mod distribute_rewards;
pub mod stake_tokens;
pub mod withdraw_stake;
pub mod claim_rewards;

pub use initialize::*;
pub use initialize_vaults::*;
pub use update_reference_price::*;
pub use fund_treasury::*;
pub use register_trader::*;
pub use record_trade::*;
pub use record_failed_trade::*;
pub use distribute_rewards::*;
pub use stake_tokens::*;
pub use withdraw_stake::*;
pub use claim_rewards::*;
