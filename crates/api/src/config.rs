/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// Everything is read once at startup; there is no hot reload.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// OpenAI API key. `None` disables the LLM path entirely; insights
    /// then come from the pre-written fallback lines.
    pub openai_api_key: Option<String>,
    /// Alternate OpenAI-compatible base URL (proxies, test stubs).
    pub openai_base_url: Option<String>,
    /// Whether the daily insight cache is active (default: `true`).
    pub enable_caching: bool,
    /// Deployment environment name (`development` / `production`).
    pub app_env: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `OPENAI_API_KEY`       | unset (LLM path disabled)  |
    /// | `OPENAI_BASE_URL`      | unset (public endpoint)    |
    /// | `ENABLE_CACHING`       | `true`                     |
    /// | `APP_ENV`              | `production`               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let openai_base_url = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let enable_caching = std::env::var("ENABLE_CACHING")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true);

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "production".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            openai_api_key,
            openai_base_url,
            enable_caching,
            app_env,
        }
    }

    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
