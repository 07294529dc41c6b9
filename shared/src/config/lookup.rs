//! Phone lookup endpoint configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which lookup implementation serves validation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupProvider {
    /// Remote HTTP endpoint
    Http,
    /// In-process canned responses for local development
    Mock,
}

impl Default for LookupProvider {
    fn default() -> Self {
        LookupProvider::Http
    }
}

/// Outbound phone lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Lookup implementation
    #[serde(default)]
    pub provider: LookupProvider,

    /// Full URL of the lookup endpoint, without the query string
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Name of the query parameter carrying the phone number
    #[serde(default = "default_query_param")]
    pub query_param: String,

    /// Request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            provider: LookupProvider::default(),
            endpoint: default_endpoint(),
            query_param: default_query_param(),
            timeout_secs: None,
        }
    }
}

impl LookupConfig {
    /// Configuration pointing at the given endpoint
    pub fn http(endpoint: impl Into<String>) -> Self {
        Self {
            provider: LookupProvider::Http,
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Configuration for the in-process mock provider
    pub fn mock() -> Self {
        Self {
            provider: LookupProvider::Mock,
            ..Default::default()
        }
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_endpoint() -> String {
    String::from("http://localhost:5000/api/phone-lookup")
}

fn default_query_param() -> String {
    String::from("phone")
}
