use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed role set forming a strict capability hierarchy.
///
/// Variant order is the capability order (`User < Moderator < Admin`), so the
/// derived `Ord` is the total order used for authorization decisions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Baseline member role, assigned whenever nothing grants more
    #[default]
    User,
    /// Community moderation powers, everything short of admin
    Moderator,
    /// Satisfies any requirement
    Admin,
}

impl Role {
    /// Whether this role meets `required` under the capability order.
    ///
    /// Higher roles are supersets of lower-role capability: admin satisfies
    /// everything, moderator satisfies everything but admin.
    pub fn satisfies(self, required: Role) -> bool {
        self >= required
    }

    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "user" => Ok(Self::User),
            "moderator" => Ok(Self::Moderator),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
