//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::{Result, ServerError};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS; empty allows any origin.
    pub allowed_origins: Vec<String>,
    /// JSON array of recipes inserted at startup.
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Reads `COCKTAIL_HOST`, `COCKTAIL_PORT` (or `PORT`),
    /// `COCKTAIL_ALLOWED_ORIGINS` and `COCKTAIL_SEED_FILE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("COCKTAIL_HOST").filter(|v| !v.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("COCKTAIL_PORT").or_else(|| lookup("PORT")) {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| ServerError::Config(format!("Invalid port '{port}': {e}")))?;
        }

        if let Some(origins) = lookup("COCKTAIL_ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        config.seed_file = lookup("COCKTAIL_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid address: {e}")))
    }
}
