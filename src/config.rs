//! Listener configuration loaded from the environment

use std::io;
use std::net::SocketAddr;

/// Port the relay listens on when nothing is configured
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    /// IP literal or hostname, resolved at bind time
    pub host: String,
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl RelayConfig {
    /// Load config from environment variables
    /// RELAY_HOST sets the bind host, RELAY_PORT (or PORT) the port
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = read_var("RELAY_HOST").unwrap_or(defaults.host);

        let port = match read_var("RELAY_PORT").or_else(|| read_var("PORT")) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid port, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        Self { host, port }
    }

    /// Resolve the configured host to the address to bind.
    /// A host that does not resolve is an error, never a wider bind.
    pub async fn resolve(&self) -> io::Result<SocketAddr> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("{} resolved to no addresses", self.host),
                )
            })
    }
}

fn read_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
