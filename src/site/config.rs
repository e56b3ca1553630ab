//! Site-wide configuration and environment overrides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chatbot::{ChatbotConfig, ReplyOrdering};
use crate::resume::ResumeConfig;

use super::contact::ContactInfo;

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds an unusable value.
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
    /// A setting is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience result alias for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level site configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Listening port.
    pub port: u16,
    /// Directory with the static pages.
    pub static_dir: PathBuf,
    /// Resume document settings.
    pub resume: ResumeConfig,
    /// Contact card.
    pub contact: ContactInfo,
    /// Chat widget settings.
    pub chatbot: ChatbotConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("public"),
            resume: ResumeConfig::default(),
            contact: ContactInfo::default(),
            chatbot: ChatbotConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the static directory.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Set the resume settings.
    #[must_use]
    pub fn with_resume(mut self, resume: ResumeConfig) -> Self {
        self.resume = resume;
        self
    }

    /// Defaults overridden by `PORTFOLIO_*` environment variables.
    ///
    /// # Errors
    /// Returns an error if a variable cannot be parsed.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by values from `lookup`.
    ///
    /// # Errors
    /// Returns an error if a value cannot be parsed or the result is invalid.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PORTFOLIO_PORT") {
            config.port = value.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PORTFOLIO_PORT",
                value,
            })?;
        }
        if let Some(value) = lookup("PORTFOLIO_STATIC_DIR") {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("PORTFOLIO_RESUME_PATH") {
            config.resume.path = PathBuf::from(value);
        }
        if let Some(value) = lookup("PORTFOLIO_REPLY_DELAY_MS") {
            config.chatbot.reply_delay_ms =
                value.parse().map_err(|_| ConfigError::InvalidEnv {
                    name: "PORTFOLIO_REPLY_DELAY_MS",
                    value,
                })?;
        }
        if let Some(value) = lookup("PORTFOLIO_REPLY_ORDERING") {
            config.chatbot.ordering =
                value
                    .parse::<ReplyOrdering>()
                    .map_err(|value| ConfigError::InvalidEnv {
                        name: "PORTFOLIO_REPLY_ORDERING",
                        value,
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any value is out of range.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }
        if self.resume.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "resume.file_name must not be empty".to_string(),
            ));
        }
        self.chatbot
            .validate()
            .map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}
