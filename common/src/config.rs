//! Runtime configuration shared by callers of the comparison engine.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. The loaded [`Config`] can be installed once as a process-wide
//! singleton with [`Config::init`] and read back with [`Config::get`].

use once_cell::sync::OnceCell;
use std::{env, fmt};

/// Number of fractional digits compared when `JUDGE_PRECISION` is not set.
pub const DEFAULT_PRECISION: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    /// Log file to append to, in addition to stdout.
    pub log_file: Option<String>,
    /// Significant fractional digits when comparing floating-point lexemes.
    pub precision: u32,
}

/// Errors raised while reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be parsed.
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: "judge".into(),
            log_level: "info".into(),
            log_file: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// Builds a config from an arbitrary key lookup. Missing keys fall back to
    /// the defaults; empty `LOG_FILE` disables file logging.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let precision = match lookup("JUDGE_PRECISION") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "JUDGE_PRECISION",
                    value: raw.clone(),
                })?,
            None => defaults.precision,
        };

        Ok(Config {
            project_name: lookup("PROJECT_NAME").unwrap_or(defaults.project_name),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: lookup("LOG_FILE").filter(|f| !f.is_empty()),
            precision,
        })
    }

    /// Loads `env_path` (if it exists) into the environment, then reads the
    /// configuration from environment variables. Variables already set in the
    /// process take priority over the file.
    pub fn load(env_path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = env_path {
            dotenvy::from_filename(path).ok();
        }

        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration and installs it as the process-wide singleton.
    /// Later calls return the already installed config.
    pub fn init(env_path: Option<&str>) -> Result<&'static Self, ConfigError> {
        CONFIG.get_or_try_init(|| Config::load(env_path))
    }

    /// The singleton installed by [`Config::init`], if any.
    pub fn get() -> Option<&'static Self> {
        CONFIG.get()
    }
}
