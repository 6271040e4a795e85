//! Runtime configuration loaded from environment variables.
//!
//! - `API_BASE_URL`: remote analysis API (default `http://localhost:5000/api`)
//! - `BIND_ADDR` / `PORT`: web frontend listener (default `0.0.0.0:3000`)

use std::{env, fmt::Display, net::IpAddr, str::FromStr};

use tracing::{info, warn};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Endpoint base of the remote analysis API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate and normalize a base URL (trailing slashes removed).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/').to_string();

        let parsed = reqwest::Url::parse(&trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self { base_url: trimmed })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(load_or("API_BASE_URL", DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an operation path (`/analyze-foods`) onto the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Listener settings for the web frontend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub client: ClientConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: try_load("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            port: try_load("PORT", &DEFAULT_PORT.to_string())?,
            client: ClientConfig::from_env()?,
        })
    }
}

fn load_or(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = load_or(key, default);
    value.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue { key, value }
    })
}
