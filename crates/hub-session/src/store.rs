use crate::error::{Result as SessionErrorResult, SessionError};
use crate::session_load::SessionLoad;
use crate::storage::SessionStorage;

use hub_core::{Role, UserIdentity};

use log::{info, warn};

/// Storage key for the single persisted session record.
pub const SESSION_KEY: &str = "gameHubUser";

/// Reserved usernames the mock login maps to elevated roles.
const ADMIN_MARKER: &str = "admin";
const MODERATOR_MARKER: &str = "moderator";

/// Profile payload accepted by `register`.
#[derive(Debug, Clone)]
pub struct NewMemberProfile {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Single source of truth for "who is logged in".
///
/// Holds at most one identity. Every state change persists synchronously
/// under [`SESSION_KEY`]; presence of the identity is the sole
/// authentication signal (no token, no expiry - trust is purely local).
/// There is exactly one writer (the current UI event), so no locking.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    current: Option<UserIdentity>,
}

impl SessionStore {
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    /// Loads any persisted identity. Call once at startup, before the first
    /// guarded render, to avoid a flash of unauthenticated state.
    ///
    /// Never fails: a missing key, an unreadable store, and a corrupted
    /// record all resolve to "no session". Corruption is reported so the
    /// host can back up the record.
    pub fn init(&mut self) -> SessionLoad {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Session storage unavailable, starting unauthenticated: {e}");
                return SessionLoad::empty();
            }
        };

        let Some(raw) = raw else {
            info!("No persisted session under '{SESSION_KEY}' (first launch)");
            return SessionLoad::empty();
        };

        match serde_json::from_str::<UserIdentity>(&raw) {
            Ok(identity) => {
                info!(
                    "Restored session for '{}' (role {})",
                    identity.username, identity.role
                );
                self.current = Some(identity.clone());
                SessionLoad {
                    identity: Some(identity),
                    corruption: None,
                }
            }
            Err(e) => {
                warn!("Persisted session under '{SESSION_KEY}' is corrupted: {e}");
                SessionLoad {
                    identity: None,
                    corruption: Some(e.to_string()),
                }
            }
        }
    }

    /// Mock login: any non-empty username/password pair succeeds, the
    /// password is never checked against a credential store.
    ///
    /// The role comes only from the reserved username markers; callers
    /// cannot supply one. Overwrites any prior identity.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> SessionErrorResult<&UserIdentity> {
        if username.is_empty() {
            return Err(SessionError::validation("username must not be empty"));
        }
        if password.is_empty() {
            return Err(SessionError::validation("password must not be empty"));
        }

        let role = match username {
            ADMIN_MARKER => Role::Admin,
            MODERATOR_MARKER => Role::Moderator,
            _ => Role::User,
        };

        let identity = UserIdentity::demo_login(username, role);
        info!("Login for '{username}' as {role}");
        self.set_current(identity)
    }

    /// Registers a new member with role fixed to `User`.
    ///
    /// No username collision check - there is no backend to check against.
    pub fn register(&mut self, profile: &NewMemberProfile) -> SessionErrorResult<&UserIdentity> {
        if profile.username.is_empty() {
            return Err(SessionError::validation("username must not be empty"));
        }
        if profile.email.is_empty() {
            return Err(SessionError::validation("email must not be empty"));
        }
        if profile.password.is_empty() {
            return Err(SessionError::validation("password must not be empty"));
        }

        let identity = UserIdentity::register(&profile.username, &profile.email);
        info!("Registered new member '{}'", profile.username);
        self.set_current(identity)
    }

    /// Clears the session from memory and storage. Idempotent.
    pub fn logout(&mut self) -> SessionErrorResult<()> {
        self.current = None;
        self.storage.remove(SESSION_KEY)?;
        info!("Session cleared");
        Ok(())
    }

    pub fn current(&self) -> Option<&UserIdentity> {
        self.current.as_ref()
    }

    /// Pure role query: false with no identity, otherwise the capability
    /// order decides. No side effects.
    pub fn has_role(&self, required: Role) -> bool {
        self.current
            .as_ref()
            .is_some_and(|identity| identity.role.satisfies(required))
    }

    /// Persists first, then swaps the in-memory identity, so a storage
    /// failure leaves the session unchanged.
    fn set_current(&mut self, identity: UserIdentity) -> SessionErrorResult<&UserIdentity> {
        let record = serde_json::to_string(&identity)?;
        self.storage.set(SESSION_KEY, &record)?;
        Ok(self.current.insert(identity))
    }
}
