use serde::{Deserialize, Serialize};

/// One ranked row of the community leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub points: u32,
    pub wins: u32,
    pub tournaments: u32,
    /// Percentage, 0-100
    pub win_rate: u32,
    pub badge: String,
    pub country: String,
    /// Points gained in the current period, e.g. "+150"
    pub recent_gain: String,
}
