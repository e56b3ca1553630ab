//! Configuration for the chat widget.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ChatbotError, ChatbotResult};
use super::resolver::DEFAULT_FALLBACK;

/// Simulated "thinking" latency before a reply lands.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// How replies of overlapping turns are ordered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyOrdering {
    /// Every reply lands when its own timer expires.
    #[default]
    Independent,
    /// A reply also waits for the previous turn's reply.
    Fifo,
}

impl ReplyOrdering {
    /// Stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Fifo => "fifo",
        }
    }
}

impl fmt::Display for ReplyOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplyOrdering {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "independent" => Ok(Self::Independent),
            "fifo" => Ok(Self::Fifo),
            _ => Err(value.to_string()),
        }
    }
}

/// Chat widget settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatbotConfig {
    /// Delay between a submission and its reply, in milliseconds.
    pub reply_delay_ms: u64,
    /// Ordering of overlapping replies.
    pub ordering: ReplyOrdering,
    /// Reply used for unknown questions.
    pub fallback: String,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            ordering: ReplyOrdering::Independent,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl ChatbotConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reply delay.
    #[must_use]
    pub const fn with_reply_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reply_delay_ms = delay_ms;
        self
    }

    /// Set the reply ordering.
    #[must_use]
    pub const fn with_ordering(mut self, ordering: ReplyOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Set the fallback reply.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Reply delay as a [`Duration`].
    #[must_use]
    pub const fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if the reply delay is zero or the fallback text is blank.
    pub fn validate(&self) -> ChatbotResult<()> {
        if self.reply_delay_ms == 0 {
            return Err(ChatbotError::InvalidConfig(
                "reply_delay_ms must be > 0".to_string(),
            ));
        }
        if self.fallback.trim().is_empty() {
            return Err(ChatbotError::InvalidConfig(
                "fallback must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatbotConfig::default();
        assert_eq!(config.reply_delay(), Duration::from_millis(1000));
        assert_eq!(config.ordering, ReplyOrdering::Independent);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ChatbotConfig::new()
            .with_reply_delay_ms(250)
            .with_ordering(ReplyOrdering::Fifo)
            .with_fallback("Sorry!");

        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.ordering, ReplyOrdering::Fifo);
        assert_eq!(config.fallback, "Sorry!");
    }

    #[test]
    fn test_blank_fallback_rejected() {
        let config = ChatbotConfig::new().with_fallback("   ");
        assert!(matches!(
            config.validate(),
            Err(ChatbotError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_delay_rejected() {
        let config = ChatbotConfig::new().with_reply_delay_ms(0);
        assert_eq!(
            config.validate(),
            Err(ChatbotError::InvalidConfig(
                "reply_delay_ms must be > 0".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_ordering() {
        assert_eq!("fifo".parse::<ReplyOrdering>(), Ok(ReplyOrdering::Fifo));
        assert!("lifo".parse::<ReplyOrdering>().is_err());
    }
}
