use hub_core::Role;

/// Navigable views of the site, mirroring the client router paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Tournaments,
    Leaderboard,
    Members,
    Blog,
    BlogPost(i64),
    Login,
    Register,
    Profiles,
    Profile(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Tournaments => "/tournaments".to_string(),
            Self::Leaderboard => "/leaderboard".to_string(),
            Self::Members => "/members".to_string(),
            Self::Blog => "/blog".to_string(),
            Self::BlogPost(id) => format!("/blog/{id}"),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Profiles => "/profiles".to_string(),
            Self::Profile(username) => format!("/profile/{username}"),
        }
    }

    /// Parse a router path. Returns None for anything outside the route
    /// table.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] => Some(Self::Home),
            ["tournaments"] => Some(Self::Tournaments),
            ["leaderboard"] => Some(Self::Leaderboard),
            ["members"] => Some(Self::Members),
            ["blog"] => Some(Self::Blog),
            ["blog", id] => id.parse().ok().map(Self::BlogPost),
            ["login"] => Some(Self::Login),
            ["register"] => Some(Self::Register),
            ["profiles"] => Some(Self::Profiles),
            ["profile", username] if !username.is_empty() => {
                Some(Self::Profile(username.to_string()))
            }
            _ => None,
        }
    }

    /// Minimum role needed to view the route; None means public.
    ///
    /// Only the members area is gated; every other view reads the session
    /// for display purposes at most.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Members => Some(Role::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
