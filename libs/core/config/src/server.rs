use crate::{env_or_default, env_parse_or_default, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Listen address for the HTTP server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - SERVER_HOST: defaults to 0.0.0.0 (all interfaces)
    /// - SERVER_PORT: defaults to 8080
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("SERVER_HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse_or_default("SERVER_PORT", "8080")?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
        }
    }
}
