//! Runtime configuration for the Helios agent core service.
//!
//! Reads the HTTP listener settings from the environment with hard defaults,
//! so a bare `helios-server` run binds `0.0.0.0:8000`.

use std::env;

/// Environment variable overriding the bind host.
pub const ENV_HOST: &str = "HELIOS_HOST";

/// Environment variable overriding the bind port.
pub const ENV_PORT: &str = "HELIOS_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Errors produced when reading configuration from the environment.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The port variable was set to something that is not a TCP port.
    #[error("Invalid {var}: '{value}' is not a valid port number")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Network settings for the HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `0.0.0.0`.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads the listener settings from the environment.
    ///
    /// Unset variables fall back to the defaults; a set but unparseable
    /// port is an error so a misconfigured deployment fails fast instead
    /// of silently binding the default port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw.parse().map_err(|source| ConfigError::InvalidPort {
                var: ENV_PORT,
                value: raw,
                source,
            })?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Returns the bind address as `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
