use hub_core::{Role, UserIdentity};

use serde::Serialize;

/// Outcome of a guarded navigation.
///
/// Neither denial state is an error: unauthenticated visits are the
/// expected logged-out path, and unauthorized ones are resolved by a
/// redirect to the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardDecision {
    /// Render the protected view unchanged
    Authorized,
    /// No identity present; redirect to the login entry point
    Unauthenticated,
    /// Identity present but insufficient role; redirect to the landing view
    Unauthorized,
}

impl GuardDecision {
    /// Pure function of (identity, required role), recomputed fresh at every
    /// navigation. Nothing is cached, so a logout while a protected view is
    /// open is observed on the next guarded check.
    pub fn evaluate(identity: Option<&UserIdentity>, required: Role) -> Self {
        match identity {
            None => Self::Unauthenticated,
            Some(identity) if identity.role.satisfies(required) => Self::Authorized,
            Some(_) => Self::Unauthorized,
        }
    }
}
