use super::api_config::ApiConfig;
use super::owner_config::OwnerConfig;

pub struct AppConfig {
    pub api: ApiConfig,
    pub owner: OwnerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            owner: OwnerConfig::from_env(),
        }
    }
}
