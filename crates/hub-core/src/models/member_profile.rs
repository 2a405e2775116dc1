use serde::{Deserialize, Serialize};

/// Public profile card shown in the member directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub username: String,
    pub level: u32,
    pub tournaments: u32,
    pub wins: u32,
    /// Percentage, 0-100
    pub win_rate: u32,
}
