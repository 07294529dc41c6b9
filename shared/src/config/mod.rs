//! Layered application configuration
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `lookup` - Outbound phone lookup endpoint configuration
//! - `server` - HTTP server and CORS configuration
//!
//! Configuration is layered: built-in defaults for the detected environment,
//! then an optional `config/<environment>.toml` file, then `PV__`-prefixed
//! environment variables (`PV__SERVER__PORT=9000`).

pub mod environment;
pub mod lookup;
pub mod server;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// Re-export commonly used types
pub use ::config::ConfigError;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use lookup::{LookupConfig, LookupProvider};
pub use server::{CorsConfig, ServerConfig};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "PV";

/// Separator between nested keys in environment variable overrides
pub const ENV_SEPARATOR: &str = "__";

/// Default directory searched for per-environment configuration files
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Phone lookup endpoint configuration
    pub lookup: LookupConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::new("127.0.0.1", 8080),
            lookup: LookupConfig::default(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            lookup: LookupConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Built-in defaults for the given environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::production();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load configuration for the environment detected from the process
    /// environment, reading files from [`DEFAULT_CONFIG_DIR`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::from_env(), Path::new(DEFAULT_CONFIG_DIR), None)
    }

    /// Load configuration from explicit sources.
    ///
    /// `env_vars` replaces the process environment as the override source when
    /// given, which keeps loading deterministic in tests.
    pub fn load_from(
        env: Environment,
        config_dir: &Path,
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::for_environment(env);
        let file = config_dir.join(env.config_file());

        let overrides = ::config::Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(env_vars);

        let config: Self = ::config::Config::builder()
            .add_source(::config::Config::try_from(&defaults)?)
            .add_source(::config::File::from(file).required(false))
            .add_source(overrides)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup.provider == LookupProvider::Http && self.lookup.endpoint.trim().is_empty() {
            return Err(ConfigError::Message(
                "lookup.endpoint must be set when lookup.provider is \"http\"".to_string(),
            ));
        }
        if self.lookup.query_param.trim().is_empty() {
            return Err(ConfigError::Message(
                "lookup.query_param must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
