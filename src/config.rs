//! Server Configuration
//!
//! Command-line flags, each backed by an environment variable.

use clap::Parser;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// In-memory item store served over HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "item-store")]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(long, env = "ITEM_STORE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, env = "ITEM_STORE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "item_store=trace")
    #[arg(long, env = "ITEM_STORE_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_parse_flags() {
        let config = ServerConfig::try_parse_from([
            "item-store",
            "--host",
            "127.0.0.1",
            "--port",
            "5050",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:5050");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_non_numeric_port() {
        let result = ServerConfig::try_parse_from(["item-store", "--port", "http"]);
        assert!(result.is_err());
    }
}
