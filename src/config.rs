use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PROVIDER_URL: &str = "https://api.elevenlabs.io";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

/// Server configuration, read once at startup and handed to the router.
#[derive(Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    /// Provider key. Absence is only reported when a request needs it.
    pub api_key: Option<String>,
    pub provider_url: String,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_key: None,
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            static_dir: PathBuf::from("./static"),
            max_upload_bytes: 25 * 1024 * 1024,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                name: "PORT",
                value,
            })?,
            None => defaults.port,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_MB") {
            Some(value) => {
                let mb: usize = value.parse().map_err(|_| ConfigError::InvalidNumber {
                    name: "MAX_UPLOAD_MB",
                    value,
                })?;
                mb * 1024 * 1024
            }
            None => defaults.max_upload_bytes,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            api_key: lookup("ELEVENLABS_API_KEY").filter(|key| !key.is_empty()),
            provider_url: lookup("ELEVENLABS_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.provider_url),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            max_upload_bytes,
        })
    }

    pub fn address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("provider_url", &self.provider_url)
            .field("static_dir", &self.static_dir)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}
