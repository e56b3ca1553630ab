//! Error types for the chat widget.

use thiserror::Error;

/// Errors raised while assembling the chat widget.
///
/// The reply path itself is infallible; these only surface at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatbotError {
    /// Two catalog entries share the same question key.
    #[error("duplicate catalog question: {0:?}")]
    DuplicateQuestion(String),

    /// A suggestion triggers a question the catalog cannot answer.
    #[error("suggestion {id} triggers unknown question {question:?}")]
    UnmatchedSuggestion {
        /// Suggestion identifier.
        id: String,
        /// Trigger question with no catalog entry.
        question: String,
    },

    /// Invalid widget configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience result alias for chat widget operations.
pub type ChatbotResult<T> = Result<T, ChatbotError>;
