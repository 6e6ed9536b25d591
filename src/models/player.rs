//! Player identity and leaderboard rows.

use serde::{Deserialize, Serialize};

/// Players are identified by their display name, unique within the roster.
/// Roster order is insertion order and carries no meaning for scoring.
pub type PlayerName = String;

/// One row of a leaderboard projection (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// 1-based rank after sorting by points descending, name ascending.
    pub rank: usize,
    pub player: PlayerName,
    pub points: u32,
}
