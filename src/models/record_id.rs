use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a canonical record.
///
/// Whichever store persists a record first assigns its id: the remote
/// database hands out auto-increment integers, the local store a UUID token.
/// `Unassigned` is a record the API accepted without reporting its id; it
/// serializes as `null` and cannot be addressed until re-read from the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Remote(i64),
    Local(String),
    Unassigned,
}

impl RecordId {
    /// Fresh locally generated token.
    pub fn generate() -> Self {
        RecordId::Local(uuid::Uuid::new_v4().to_string())
    }

    pub fn is_local(&self) -> bool {
        matches!(self, RecordId::Local(_))
    }

    pub fn is_assigned(&self) -> bool {
        !matches!(self, RecordId::Unassigned)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Remote(id) => write!(f, "{}", id),
            RecordId::Local(token) => write!(f, "{}", token),
            RecordId::Unassigned => write!(f, "(unassigned)"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Remote(id)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(id) => RecordId::Remote(id),
            Err(_) => RecordId::Local(value.to_string()),
        }
    }
}
