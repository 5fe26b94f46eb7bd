use serde::{Deserialize, Serialize};

/// Represents the identifier of the user owning the catalog records.
/// The backend requires it on every product write; the client carries a
/// single configured value rather than a per-session one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(i64);

impl OwnerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner numeric identifier.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OwnerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
