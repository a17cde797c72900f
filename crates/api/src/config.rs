use crate::auth::jwt::JwtConfig;
use finlit_llm::OpenAiConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have sensible defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// CDN base URL joined onto stored image paths for display.
    pub cdn_base_url: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Chat-completion provider settings.
    pub llm: OpenAiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `3000`                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `CDN_BASE_URL`         | `http://localhost:9000`     |
    /// | `LLM_BASE_URL`         | `https://api.openai.com/v1` |
    /// | `LLM_API_KEY`          | **required**                |
    /// | `LLM_MODEL`            | `gpt-4o-mini`               |
    /// | `LLM_TIMEOUT_SECS`     | `60`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
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

        let cdn_base_url = std::env::var("CDN_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:9000".into())
            .trim_end_matches('/')
            .to_string();

        let jwt = JwtConfig::from_env();
        let llm = llm_config_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            cdn_base_url,
            jwt,
            llm,
        }
    }
}

/// Load chat-completion provider settings from environment variables.
///
/// # Panics
///
/// Panics if `LLM_API_KEY` is not set.
fn llm_config_from_env() -> OpenAiConfig {
    let base_url = std::env::var("LLM_BASE_URL")
        .unwrap_or_else(|_| "https://api.openai.com/v1".into())
        .trim_end_matches('/')
        .to_string();

    let api_key = std::env::var("LLM_API_KEY").expect("LLM_API_KEY must be set");

    let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());

    let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
        .unwrap_or_else(|_| "60".into())
        .parse()
        .expect("LLM_TIMEOUT_SECS must be a valid u64");

    OpenAiConfig {
        base_url,
        api_key,
        model,
        timeout_secs,
    }
}
