//! Configuration management for `bookshelf`.
//!
//! Settings come from command-line flags, each with an environment variable
//! fallback (`BOOKSHELF_HOST`, `BOOKSHELF_PORT`) handled by clap.

use crate::cli::Cli;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 9000;

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Answer with permissive CORS headers.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            cors: true,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            port: cli.port,
            cors: !cli.no_cors,
        }
    }

    /// `host:port` string suitable for socket address resolution.
    #[must_use]
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            // Bare IPv6 literal
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from(["bookshelf", "--host", "127.0.0.1", "--port", "3000", "--no-cors"])
            .unwrap();
        let config = ServerConfig::from_cli(&cli);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(!config.cors);
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "localhost:9000");

        let v6 = ServerConfig {
            host: "::1".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(v6.bind_address(), "[::1]:9000");
    }
}
