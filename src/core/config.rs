//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order (first match wins):
//! 1. `$SNAPCI_CONFIG` if set
//! 2. `<root>/.snapci.toml`
//!
//! When no config file exists, built-in defaults apply. CLI flags are
//! resolved by the command layer and always take precedence over file
//! values.
//!
//! # Example
//!
//! ```toml
//! skip = ["e2e", "examples"]
//! max_depth = 2
//! endpoint = "https://api.dev.devrev-eng.ai/internal/snap-in-versions.validate-manifest"
//! token_env = "ACTOR_JWT"
//!
//! [tools]
//! depcheck = "depcheck"
//! npm = "npm"
//! npx = "npx"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name looked up under the repository root.
pub const CONFIG_FILE: &str = ".snapci.toml";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SNAPCI_CONFIG";

/// Default package roots excluded from change-driven selection.
pub const DEFAULT_SKIP: &[&str] = &["e2e", "examples"];

/// Default depth bound for manifest discovery.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Default manifest validation endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.dev.devrev-eng.ai/internal/snap-in-versions.validate-manifest";

/// Default environment variable holding the validation auth token.
pub const DEFAULT_TOKEN_ENV: &str = "ACTOR_JWT";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Repository configuration.
///
/// All fields have defaults; a missing config file is not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Package roots excluded from change-driven selection.
    pub skip: Vec<String>,

    /// Depth bound for manifest discovery, in directories below the root.
    pub max_depth: usize,

    /// Manifest validation endpoint URL.
    pub endpoint: String,

    /// Name of the environment variable holding the validation auth token.
    pub token_env: String,

    /// External tool program names.
    pub tools: Tools,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP.iter().map(|s| s.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            tools: Tools::default(),
        }
    }
}

/// External tool program names.
///
/// Overridable so CI images can pin wrapper scripts, and so tests can stand
/// in stub executables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Tools {
    /// Dependency analyzer program.
    pub depcheck: String,

    /// Package manager program.
    pub npm: String,

    /// Package runner program (invokes the test runner).
    pub npx: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            depcheck: "depcheck".to_string(),
            npm: "npm".to_string(),
            npx: "npx".to_string(),
        }
    }
}

impl Config {
    /// Load configuration for a repository root.
    ///
    /// Returns defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a config file exists but cannot be read or
    /// parsed, or when a value fails validation.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = match std::env::var(CONFIG_ENV) {
            Ok(p) => PathBuf::from(p),
            Err(_) => root.join(CONFIG_FILE),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let config = Self::load_file(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a specific config file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::InvalidValue(
                "endpoint cannot be empty".into(),
            ));
        }
        if self.token_env.is_empty() {
            return Err(ConfigError::InvalidValue(
                "token_env cannot be empty".into(),
            ));
        }
        if self.tools.depcheck.is_empty()
            || self.tools.npm.is_empty()
            || self.tools.npx.is_empty()
        {
            return Err(ConfigError::InvalidValue(
                "tool program names cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
