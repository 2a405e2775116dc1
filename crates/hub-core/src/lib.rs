pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::blog_post::BlogPost;
pub use models::leaderboard_entry::LeaderboardEntry;
pub use models::member_profile::MemberProfile;
pub use models::role::Role;
pub use models::tournament::Tournament;
pub use models::tournament_status::TournamentStatus;
pub use models::user_identity::UserIdentity;

#[cfg(test)]
mod tests;
