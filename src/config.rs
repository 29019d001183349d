use std::env;

pub const DEFAULT_MOCK_API_URL: &str = "https://67b6ce1507ba6e590841d413.mockapi.io";

/// Value of `MOCK_API_URL` that selects the in-process backend.
pub const MEMORY_BACKEND: &str = "memory";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mock_api_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub upstream_timeout_secs: u64,
    pub catalog_ttl_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mock_api_url =
            env::var("MOCK_API_URL").unwrap_or_else(|_| DEFAULT_MOCK_API_URL.to_string());
        let jwt_secret = env::var("JWT_SECRET")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let upstream_timeout_secs = env::var("MOCK_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);
        let catalog_ttl_secs = env::var("CATALOG_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);
        Ok(Self {
            mock_api_url,
            host,
            port,
            jwt_secret,
            upstream_timeout_secs,
            catalog_ttl_secs,
        })
    }

    pub fn uses_memory_backend(&self) -> bool {
        self.mock_api_url == MEMORY_BACKEND
    }
}
