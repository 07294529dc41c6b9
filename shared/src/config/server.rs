//! HTTP listener and CORS settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;

/// Listener settings of the web server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Worker threads; unset uses one per CPU core
    #[serde(default)]
    pub workers: Option<usize>,

    #[serde(default = "default_keep_alive_secs")]
    pub keep_alive_secs: u64,

    /// Upper bound for the form body of `POST /validate`
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,

    /// Peers allowed to assert HTTPS through `X-Forwarded-Proto`
    #[serde(default)]
    pub trusted_proxies: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", DEFAULT_PORT)
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            workers: None,
            keep_alive_secs: default_keep_alive_secs(),
            max_payload_size: default_max_payload_size(),
            trusted_proxies: Vec::new(),
        }
    }

    /// `host:port` as accepted by `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }

    /// Configured worker count, ignoring zero
    pub fn worker_count(&self) -> Option<usize> {
        self.workers.filter(|&n| n > 0)
    }
}

/// Cross-origin access to the JSON API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Accept every origin; meant for local development
    #[serde(default)]
    pub allow_any_origin: bool,

    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Preflight cache lifetime in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: false,
            allowed_origins: Vec::new(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    pub fn development() -> Self {
        Self {
            allow_any_origin: true,
            max_age: 3600,
            ..Self::default()
        }
    }

    /// Configured origins, trimmed, without blanks
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_keep_alive_secs() -> u64 {
    75
}

fn default_max_payload_size() -> usize {
    16 * 1024
}

fn default_max_age() -> usize {
    86400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_defaults() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.keep_alive(), Duration::from_secs(75));
        assert_eq!(config.worker_count(), None);
        assert!(config.trusted_proxies.is_empty());
    }

    #[test]
    fn test_zero_workers_means_default() {
        let config = ServerConfig {
            workers: Some(0),
            ..ServerConfig::new("127.0.0.1", 3000)
        };
        assert_eq!(config.worker_count(), None);

        let config = ServerConfig {
            workers: Some(4),
            ..config
        };
        assert_eq!(config.worker_count(), Some(4));
    }

    #[test]
    fn test_origins_skip_blanks() {
        let config = CorsConfig {
            allowed_origins: vec![
                " https://phonevalidator.com ".to_string(),
                "".to_string(),
                "https://www.phonevalidator.com".to_string(),
            ],
            ..CorsConfig::default()
        };

        let origins: Vec<_> = config.origins().collect();
        assert_eq!(
            origins,
            vec!["https://phonevalidator.com", "https://www.phonevalidator.com"]
        );
        assert!(!config.allow_any_origin);
        assert!(CorsConfig::development().allow_any_origin);
    }
}
