use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in (mock credentials: any non-empty pair succeeds)
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Create a new member account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Clear the current session
    Logout,

    /// Show the current identity
    Whoami,

    /// Navigate to a route path, applying the role guard
    Open {
        /// Route path, e.g. "/members" or "/blog/3"
        path: String,
    },

    /// List tournaments
    Tournaments {
        /// Filter by status: live, upcoming, completed
        #[arg(long)]
        status: Option<String>,
    },

    /// Show the community leaderboard
    Leaderboard {
        /// Username substring to search for
        #[arg(long)]
        search: Option<String>,
    },

    /// Browse blog posts
    Blog {
        /// Show a single post by id
        #[arg(long)]
        id: Option<i64>,
        /// Filter by category, e.g. guides, news
        #[arg(long)]
        category: Option<String>,
    },

    /// Browse the member directory
    Profiles {
        /// Username substring to search for
        #[arg(long)]
        search: Option<String>,
    },
}
