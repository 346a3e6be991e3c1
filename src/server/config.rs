use crate::server::error::config::ConfigError;

/// Runtime configuration resolved from environment variables
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Base URL of the identity provider's admin API
    pub identity_api_url: String,
    /// Public base URL signed media URLs are issued under
    pub media_base_url: String,
    /// Secret used to sign time-limited media URLs
    pub media_signing_secret: String,
    /// Base URL of the OpenAI-compatible chat completion API
    pub advisor_api_url: String,
    /// API key for the chat completion API
    pub advisor_api_key: String,
    /// Model identifier sent with each completion request
    pub advisor_model: String,
    /// Upper bound in seconds on a single model call
    pub advisor_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: var_or("BIND_ADDRESS", "0.0.0.0:8080"),
            identity_api_url: require_var("IDENTITY_API_URL")?,
            media_base_url: require_var("MEDIA_BASE_URL")?,
            media_signing_secret: require_var("MEDIA_SIGNING_SECRET")?,
            advisor_api_url: var_or("ADVISOR_API_URL", "https://api.openai.com"),
            advisor_api_key: require_var("ADVISOR_API_KEY")?,
            advisor_model: var_or("ADVISOR_MODEL", "gpt-4-1106-preview"),
            advisor_timeout_secs: parse_var_or("ADVISOR_TIMEOUT_SECS", 30)?,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var_or(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: name.to_string(),
                reason: format!("expected an integer, got {value:?}"),
            }),
        Err(_) => Ok(default),
    }
}
