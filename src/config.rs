use serde::{Deserialize, Serialize};
use std::env;

use crate::error::AppError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub server: ServerConfig,
    pub sessions: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the remote AnimalDex API, without a trailing slash.
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                static_dir: "static".to_string(),
            },
            sessions: SessionConfig { capacity: 1000 },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let base_url = lookup("ANIMALDEX_API_URL")
            .unwrap_or(defaults.api.base_url)
            .trim()
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(AppError::Configuration("ANIMALDEX_API_URL must not be empty".into()).into());
        }

        let capacity = lookup("SESSION_CAPACITY")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.sessions.capacity);
        if capacity == 0 {
            return Err(AppError::Configuration("SESSION_CAPACITY must be at least 1".into()).into());
        }

        Ok(Self {
            api: ApiConfig { base_url },
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: lookup("SERVER_PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.server.port),
                static_dir: lookup("STATIC_DIR").unwrap_or(defaults.server.static_dir),
            },
            sessions: SessionConfig { capacity },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
