use crate::models::tournament_status::TournamentStatus;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub game: String,
    pub status: TournamentStatus,
    pub participants: u32,
    pub max_participants: u32,
    pub prize: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Tournament {
    /// Whether registration has filled every slot.
    pub fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }
}
