//! Configuration for the clk application.
//!
//! clk keeps no configuration file of its own. Everything it needs comes from
//! environment variables, optionally seeded from a `.env` file:
//!
//! - **`CLICKUP_API_KEY`**: personal API token, required
//! - **`CLICKUP_API_URL`**: base URL override, defaults to the public API v2
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use clk::libs::config::Config;
//!
//! # fn main() -> Result<(), clk::libs::config::ConfigError> {
//! // `.env` in the working directory, then the process environment
//! let config = Config::load(None)?;
//!
//! // An explicit env file wins over the process environment
//! let config = Config::load(Some(std::path::Path::new("work.env")))?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the ClickUp personal API token.
pub const API_KEY_VAR: &str = "CLICKUP_API_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "CLICKUP_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.clickup.com/api/v2";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not defined in environment variables")]
    MissingApiKey(&'static str),

    #[error("Failed to read env file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },
}

/// Settings resolved once at startup, before any command runs.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    /// Loads the configuration for this process.
    ///
    /// Without `env_file`, a `.env` file in the working directory is merged into
    /// the process environment when present. With `env_file`, the variables are
    /// read from that file and take precedence over the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `env_file` cannot be read or parsed
    /// - `CLICKUP_API_KEY` is missing or empty
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        match env_file {
            Some(path) => {
                let vars = read_env_file(path)?;
                Self::from_lookup(|key| vars.get(key).cloned().or_else(|| env::var(key).ok()))
            }
            None => {
                let _ = dotenv::dotenv();
                Self::from_lookup(|key| env::var(key).ok())
            }
        }
    }

    /// Builds the configuration from a variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;

        let api_url = lookup(API_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self { api_key, api_url })
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let env_file_error = |message: String| ConfigError::EnvFile {
        path: path.to_path_buf(),
        message,
    };

    dotenv::from_path_iter(path)
        .map_err(|e| env_file_error(e.to_string()))?
        .map(|item| item.map_err(|e| env_file_error(e.to_string())))
        .collect()
}
