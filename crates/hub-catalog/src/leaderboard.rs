use hub_core::LeaderboardEntry;

/// Community rankings, ordered by rank.
#[derive(Debug)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Self { entries: seed() }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Case-insensitive username substring search.
    pub fn search(&self, term: &str) -> Vec<&LeaderboardEntry> {
        let term = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.username.to_lowercase().contains(&term))
            .collect()
    }

    /// Top three, rendered specially by the leaderboard page.
    pub fn podium(&self) -> &[LeaderboardEntry] {
        &self.entries[..self.entries.len().min(3)]
    }

    pub fn runners_up(&self) -> &[LeaderboardEntry] {
        &self.entries[self.entries.len().min(3)..]
    }
}

fn seed() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry {
            rank: 1,
            username: "ProGamer2024".to_string(),
            points: 2850,
            wins: 47,
            tournaments: 12,
            win_rate: 94,
            badge: "Champion".to_string(),
            country: "USA".to_string(),
            recent_gain: "+150".to_string(),
        },
        LeaderboardEntry {
            rank: 2,
            username: "EliteSniper".to_string(),
            points: 2720,
            wins: 43,
            tournaments: 11,
            win_rate: 91,
            badge: "Master".to_string(),
            country: "UK".to_string(),
            recent_gain: "+120".to_string(),
        },
        LeaderboardEntry {
            rank: 3,
            username: "TacticalAce".to_string(),
            points: 2690,
            wins: 41,
            tournaments: 10,
            win_rate: 89,
            badge: "Master".to_string(),
            country: "Canada".to_string(),
            recent_gain: "+90".to_string(),
        },
    ]
}
