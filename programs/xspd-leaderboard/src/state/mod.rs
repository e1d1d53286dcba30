pub mod config;
pub mod leaderboard;
pub mod price_reference;
pub mod stake;
pub mod trader_stats;
pub mod treasury;

pub use config::*;
pub use leaderboard::*;
pub use price_reference::*;
pub use stake::*;
pub use trader_stats::*;
pub use treasury::*;
