use serde::{Deserialize, Serialize};
use std::fs;

use crate::ci_output::DEFAULT_OUTPUT_ENV;
use crate::error::{ReleaseOutputError, Result};

/// Schema path read when no configuration overrides it
pub const DEFAULT_INPUT_PATH: &str = "./temp/schema.json";

/// Key prefix shared by all three output lines
pub const DEFAULT_KEY_PREFIX: &str = "release_";

/// Represents the complete configuration for release-outputs.
///
/// The default value reproduces the stock GitHub Actions behaviour: read
/// `./temp/schema.json` and append `release_*` lines to `$GITHUB_OUTPUT`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_input_path() -> String {
    DEFAULT_INPUT_PATH.to_string()
}

fn default_env_var() -> String {
    DEFAULT_OUTPUT_ENV.to_string()
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

/// Where the schema file is read from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            path: default_input_path(),
        }
    }
}

/// Where and how output lines are written.
///
/// `env_var` names the environment variable holding the output file path;
/// `key_prefix` is prepended to `title`, `description_b64` and `tag`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_env_var")]
    pub env_var: String,

    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            env_var: default_env_var(),
            key_prefix: default_key_prefix(),
        }
    }
}

impl Config {
    /// Reject settings that would produce unreadable output.
    pub fn validate(&self) -> Result<()> {
        if self.input.path.trim().is_empty() {
            return Err(ReleaseOutputError::config("input.path must not be empty"));
        }
        if self.output.env_var.trim().is_empty() {
            return Err(ReleaseOutputError::config(
                "output.env_var must not be empty",
            ));
        }
        if self.output.key_prefix.contains(|c: char| matches!(c, '=' | '\n' | '\r')) {
            return Err(ReleaseOutputError::config(format!(
                "output.key_prefix must not contain '=' or line breaks: {:?}",
                self.output.key_prefix
            )));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Only an explicitly supplied path is read; there is no implicit lookup, so
/// running without `--config` always uses [`Config::default`].
///
/// # Arguments
/// * `config_path` - Optional path to a TOML configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated configuration
/// * `Err` - If the file cannot be read, parsed, or fails validation
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config = match config_path {
        Some(path) => {
            let config_str = fs::read_to_string(path)?;
            toml::from_str::<Config>(&config_str)
                .map_err(|e| ReleaseOutputError::config(format!("{}: {}", path, e)))?
        }
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}
