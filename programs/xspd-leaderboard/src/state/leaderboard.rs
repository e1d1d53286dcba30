// Top traders ranked by notional volume, kept inside GlobalConfig

use anchor_lang::prelude::*;

use crate::constants::LEADERBOARD_SIZE;
use crate::state::TraderStats;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct LeaderboardEntry {
    pub trader: Pubkey,
    pub total_trades: u64,
    pub total_notional: u64,
}

impl LeaderboardEntry {
    pub fn is_empty(&self) -> bool {
        self.trader == Pubkey::default()
    }

    // occupied slots sort ahead of empty ones, then notional, then trade count
    fn rank_key(&self) -> (bool, u64, u64) {
        (!self.is_empty(), self.total_notional, self.total_trades)
    }

    fn from_stats(stats: &TraderStats) -> Self {
        Self {
            trader: stats.trader,
            total_trades: stats.total_trades,
            total_notional: stats.total_notional,
        }
    }
}

/// Inserts or refreshes `stats` and keeps the board sorted best-first.
/// Returns the trader's position, if ranked.
pub fn update_leaderboard(
    board: &mut [LeaderboardEntry; LEADERBOARD_SIZE],
    stats: &TraderStats,
) -> Option<usize> {
    if stats.total_trades == 0 {
        return None;
    }

    let candidate = LeaderboardEntry::from_stats(stats);

    if let Some(pos) = board.iter().position(|entry| entry.trader == stats.trader) {
        board[pos] = candidate;
    } else if let Some(pos) = board.iter().position(LeaderboardEntry::is_empty) {
        board[pos] = candidate;
    } else {
        // board is kept sorted, so the weakest entry is last
        let worst = LEADERBOARD_SIZE - 1;
        if candidate.rank_key() > board[worst].rank_key() {
            board[worst] = candidate;
        }
    }

    board.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
    board.iter().position(|entry| entry.trader == stats.trader)
}
