use hub_core::{Tournament, TournamentStatus};

/// Fixed tournament listing with status filtering.
#[derive(Debug)]
pub struct TournamentCatalog {
    tournaments: Vec<Tournament>,
}

impl Default for TournamentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentCatalog {
    pub fn new() -> Self {
        Self { tournaments: seed() }
    }

    pub fn all(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn by_status(&self, status: TournamentStatus) -> Vec<&Tournament> {
        self.tournaments
            .iter()
            .filter(|t| t.status == status)
            .collect()
    }

    pub fn find(&self, id: i64) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }
}

fn seed() -> Vec<Tournament> {
    vec![
        Tournament {
            id: 1,
            name: "Spring Championship".to_string(),
            game: "Valorant".to_string(),
            status: TournamentStatus::Live,
            participants: 128,
            max_participants: 128,
            prize: "$5,000".to_string(),
            start_date: "2024-03-15".to_string(),
            end_date: "2024-03-20".to_string(),
            description: "The ultimate Valorant championship with the best teams competing for glory."
                .to_string(),
        },
        Tournament {
            id: 2,
            name: "Rocket League Masters".to_string(),
            game: "Rocket League".to_string(),
            status: TournamentStatus::Upcoming,
            participants: 45,
            max_participants: 64,
            prize: "$3,000".to_string(),
            start_date: "2024-03-25".to_string(),
            end_date: "2024-03-28".to_string(),
            description: "Fast-paced action and incredible saves in this Rocket League tournament."
                .to_string(),
        },
        Tournament {
            id: 3,
            name: "CS2 Pro League".to_string(),
            game: "Counter-Strike 2".to_string(),
            status: TournamentStatus::Upcoming,
            participants: 32,
            max_participants: 32,
            prize: "$10,000".to_string(),
            start_date: "2024-04-01".to_string(),
            end_date: "2024-04-07".to_string(),
            description: "Professional Counter-Strike 2 competition with the highest stakes."
                .to_string(),
        },
        Tournament {
            id: 4,
            name: "Fighting Game Festival".to_string(),
            game: "Street Fighter 6".to_string(),
            status: TournamentStatus::Completed,
            participants: 96,
            max_participants: 96,
            prize: "$2,500".to_string(),
            start_date: "2024-02-10".to_string(),
            end_date: "2024-02-15".to_string(),
            description: "The best fighters from around the world battled it out.".to_string(),
        },
    ]
}
