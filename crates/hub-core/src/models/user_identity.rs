use crate::models::role::Role;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The single locally-held record representing "who is logged in".
///
/// Fields serialize in camelCase because this struct IS the persisted
/// session record; the on-disk layout is part of the external interface.
/// The counters are display-only and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub level: u32,
    pub xp: u32,
    pub tournaments: u32,
    pub wins: u32,
    /// ISO-8601 date or datetime string
    pub join_date: String,
    #[serde(default)]
    pub role: Role,
}

impl UserIdentity {
    /// Demo identity issued by the mock login path.
    ///
    /// The stats are fixed display values; only the username, the derived
    /// email, and the role vary between logins.
    pub fn demo_login(username: &str, role: Role) -> Self {
        Self {
            id: 1,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            level: 7,
            xp: 2850,
            tournaments: 12,
            wins: 8,
            join_date: "2023-01-15".to_string(),
            role,
        }
    }

    /// Fresh identity for a new registration.
    ///
    /// The role is always `User`, the id comes from the current epoch millis
    /// (there is no backend to allocate one), and the counters start zeroed.
    pub fn register(username: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            username: username.to_string(),
            email: email.to_string(),
            level: 1,
            xp: 0,
            tournaments: 0,
            wins: 0,
            join_date: now.to_rfc3339(),
            role: Role::User,
        }
    }
}
