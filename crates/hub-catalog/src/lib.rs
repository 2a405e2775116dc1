//! In-memory content catalogs backing the presentation pages.
//!
//! Everything here is fixed demo data; the catalogs only add the filter and
//! search queries the pages run over it.

mod blog;
mod leaderboard;
mod member_directory;
mod tournament_catalog;

pub use blog::Blog;
pub use leaderboard::Leaderboard;
pub use member_directory::MemberDirectory;
pub use tournament_catalog::TournamentCatalog;
