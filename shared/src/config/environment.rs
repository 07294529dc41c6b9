//! Deployment environment and log output settings

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Variables consulted, in order, to pick the environment
pub const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Where the server runs; selects config defaults and the security posture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn name(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    /// First of [`ENVIRONMENT_VARS`] that is set and parses; development otherwise
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        ENVIRONMENT_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find_map(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// File overlaid on the built-in defaults, e.g. `staging.toml`
    pub fn config_file(self) -> String {
        format!("{}.toml", self.name())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment {:?}", other)),
        }
    }
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event, for log shippers
    Json,
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
}

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info,pv_infra=debug`. `RUST_LOG` wins when set.
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// ANSI colors; ignored by the JSON format
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Include file and line of each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            colored: default_colored(),
            source_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: "info,pv_api=debug,pv_core=debug,pv_infra=debug".to_string(),
                format: LogFormat::Pretty,
                colored: true,
                source_location: true,
            },
            Environment::Staging | Environment::Production => Self {
                level: "info".to_string(),
                format: LogFormat::Json,
                colored: false,
                source_location: false,
            },
        }
    }
}

fn default_colored() -> bool {
    true
}
