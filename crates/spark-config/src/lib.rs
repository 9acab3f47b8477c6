//! # spark-config
//!
//! Layered configuration loading for Spark Assembly Lab using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SPARK_*` prefix, `__` as separator)
//! 2. Project-level `.spark-lab/config.toml`
//! 3. User-level `~/.config/spark-lab/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SPARK_GITHUB__TOKEN` -> `github.token`,
//! `SPARK_RELAY__CACHE_TTL_SECS` -> `relay.cache_ttl_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use spark_config::SparkConfig;
//!
//! let config = SparkConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! if config.github.is_configured() {
//!     println!("authenticated against {}", config.github.api_base);
//! }
//! ```

mod error;
mod github;
mod relay;

pub use error::ConfigError;
pub use github::GithubConfig;
pub use relay::RelayConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".spark-lab/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SparkConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub relay: RelayConfig,
}

impl SparkConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a source cannot be read or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SPARK_").split("__"))
    }

    /// Reject values that would make the relay misbehave.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relay.cache_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "relay.cache_ttl_secs".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        if self.relay.default_repo_parts().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "relay.default_repo".into(),
                reason: format!("expected owner/repo, got '{}'", self.relay.default_repo),
            });
        }
        if self.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "github.timeout_secs".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }

    /// Error for commands that need a GitHub token when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] when `github.token` is empty.
    pub fn require_github_token(&self) -> Result<&str, ConfigError> {
        self.github.token().ok_or(ConfigError::MissingToken)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("spark-lab").join("config.toml"))
    }

    /// Load `.env` from the workspace root, then the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SparkConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.github.is_configured());
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let mut config = SparkConfig::default();
        config.relay.cache_ttl_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("relay.cache_ttl_secs"));
    }

    #[test]
    fn bad_repo_is_rejected() {
        let mut config = SparkConfig::default();
        config.relay.default_repo = "not-a-repo".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "relay.default_repo"
        ));
    }

    #[test]
    fn missing_token_is_reported() {
        let config = SparkConfig::default();
        assert!(matches!(
            config.require_github_token(),
            Err(ConfigError::MissingToken)
        ));
    }
}
