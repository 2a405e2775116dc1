use hub_core::MemberProfile;

/// Public member directory with username search.
#[derive(Debug)]
pub struct MemberDirectory {
    profiles: Vec<MemberProfile>,
}

impl Default for MemberDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberDirectory {
    pub fn new() -> Self {
        Self { profiles: seed() }
    }

    pub fn profiles(&self) -> &[MemberProfile] {
        &self.profiles
    }

    /// Case-insensitive username substring search.
    pub fn search(&self, term: &str) -> Vec<&MemberProfile> {
        let term = term.to_lowercase();
        self.profiles
            .iter()
            .filter(|p| p.username.to_lowercase().contains(&term))
            .collect()
    }

    pub fn find(&self, username: &str) -> Option<&MemberProfile> {
        self.profiles
            .iter()
            .find(|p| p.username.eq_ignore_ascii_case(username))
    }
}

fn profile(username: &str, level: u32, tournaments: u32, wins: u32, win_rate: u32) -> MemberProfile {
    MemberProfile {
        username: username.to_string(),
        level,
        tournaments,
        wins,
        win_rate,
    }
}

fn seed() -> Vec<MemberProfile> {
    vec![
        profile("ProGamer2024", 42, 24, 156, 68),
        profile("EliteSniper", 38, 18, 124, 72),
        profile("TacticalAce", 35, 15, 98, 65),
        profile("CyberNinja", 31, 12, 76, 63),
    ]
}
