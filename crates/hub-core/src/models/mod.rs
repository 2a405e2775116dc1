pub mod blog_post;
pub mod leaderboard_entry;
pub mod member_profile;
pub mod role;
pub mod tournament;
pub mod tournament_status;
pub mod user_identity;
