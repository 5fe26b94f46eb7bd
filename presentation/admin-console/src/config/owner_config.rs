use business::domain::shared::value_objects::OwnerId;

const DEFAULT_OWNER_ID: i64 = 2;

/// The owning-user identifier stamped on every product write. The backend
/// has no session concept for this client, so the value is configuration,
/// not business state.
#[derive(Debug, Clone)]
pub struct OwnerConfig {
    pub owner_id: OwnerId,
}

impl OwnerConfig {
    /// Load owner configuration from environment variables
    ///
    /// Environment variables:
    /// - OWNER_ID: numeric owning-user identifier (default: 2)
    pub fn from_env() -> Self {
        Self {
            owner_id: parse_owner_id(std::env::var("OWNER_ID").ok()),
        }
    }
}

fn parse_owner_id(raw: Option<String>) -> OwnerId {
    raw.and_then(|v| v.parse::<i64>().ok())
        .map(OwnerId::new)
        .unwrap_or_else(|| OwnerId::new(DEFAULT_OWNER_ID))
}
