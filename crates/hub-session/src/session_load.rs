use hub_core::UserIdentity;

use serde::Serialize;

/// Result of loading the persisted session - distinguishes "not found" from
/// a corrupted record.
#[derive(Debug, Serialize)]
pub struct SessionLoad {
    pub identity: Option<UserIdentity>,
    /// Present if the record exists but could not be parsed
    pub corruption: Option<String>,
}

impl SessionLoad {
    pub(crate) fn empty() -> Self {
        Self {
            identity: None,
            corruption: None,
        }
    }
}
