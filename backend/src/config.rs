//! Server configuration loaded from `CAMP_FINDER_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const ADDR_VAR: &str = "CAMP_FINDER_ADDR";
pub const DATABASE_URL_VAR: &str = "CAMP_FINDER_DATABASE_URL";
pub const FRONTEND_ORIGIN_VAR: &str = "CAMP_FINDER_FRONTEND_ORIGIN";
pub const FRONTEND_DIST_VAR: &str = "CAMP_FINDER_FRONTEND_DIST";
pub const DEV_MODE_VAR: &str = "CAMP_FINDER_DEV_MODE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    /// Origin allowed by CORS, i.e. where the SPA is served from in development
    pub frontend_origin: String,
    /// Directory of the built SPA, served as the fallback route
    pub frontend_dist: PathBuf,
    /// Attach internal error detail to 500 responses
    pub dev_mode: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_url: "sqlite:camps.db".to_string(),
            frontend_origin: "http://localhost:8080".to_string(),
            frontend_dist: PathBuf::from("../frontend/dist"),
            dev_mode: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(ADDR_VAR) {
            config.bind_addr = raw.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: ADDR_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(url) = get(DATABASE_URL_VAR) {
            config.database_url = url;
        }
        if let Some(origin) = get(FRONTEND_ORIGIN_VAR) {
            config.frontend_origin = origin;
        }
        if let Some(dist) = get(FRONTEND_DIST_VAR) {
            config.frontend_dist = PathBuf::from(dist);
        }
        if let Some(raw) = get(DEV_MODE_VAR) {
            config.dev_mode = parse_flag(DEV_MODE_VAR, &raw)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
