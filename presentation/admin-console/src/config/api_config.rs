use std::env;

/// Remote catalog API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - API_BASE_URL: backend base URL (default: "http://localhost:8080")
    pub fn from_env() -> Self {
        let base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self { base_url }
    }
}
