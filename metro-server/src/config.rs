//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the network description file.
pub const NETWORK_PATH_VAR: &str = "METRO_NETWORK_PATH";

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";

const DEFAULT_NETWORK_PATH: &str = "data/network.csv";

/// Error returned when a configuration value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Process-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path to the network description (CSV line/coordinate pairs).
    pub network_path: PathBuf,

    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network_path = lookup(NETWORK_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NETWORK_PATH));

        let bind_addr = match lookup(BIND_ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => value.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError {
                var: BIND_ADDR_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => default_bind_addr(),
        };

        Ok(Self {
            network_path,
            bind_addr,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            network_path: PathBuf::from(DEFAULT_NETWORK_PATH),
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}
