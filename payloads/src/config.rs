/// Environment variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BACKEND_URL is not set")]
    MissingBaseUrl,
}

/// Client configuration. The base URL is the only environment-driven
/// setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the configuration from the process environment, loading a
    /// `.env` file first if one exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the configuration from a variable lookup. A blank base URL
    /// counts as missing.
    pub fn from_vars(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        lookup(BACKEND_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .ok_or(ConfigError::MissingBaseUrl)
    }
}
