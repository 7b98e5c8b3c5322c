//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPLOAD_BACKEND_URL: &str = "http://localhost:8001/upload";

/// Errors produced while reading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid UPLOAD_BACKEND_URL '{url}': {reason}")]
    InvalidUploadUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Absolute URL of the ingestion endpoint that uploads are forwarded to.
    pub upload_backend_url: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPLOAD_BACKEND_URL`: default `http://localhost:8001/upload`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or the upload
    /// URL is not an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. `from_env` delegates here.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let upload_backend_url = lookup("UPLOAD_BACKEND_URL")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_UPLOAD_BACKEND_URL.to_owned());
        reqwest::Url::parse(&upload_backend_url).map_err(|e| ConfigError::InvalidUploadUrl {
            url: upload_backend_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { port, upload_backend_url })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, upload_backend_url: DEFAULT_UPLOAD_BACKEND_URL.to_owned() }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
