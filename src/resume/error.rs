//! Error types for resume delivery.

use thiserror::Error;

/// Errors raised while serving or mailing the resume.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// The resume file does not exist.
    #[error("Resume file not found. Please contact the administrator.")]
    NotFound,

    /// The resume file exists but could not be read.
    #[error("Failed to download resume. Please try again later.")]
    Read(#[source] std::io::Error),

    /// No email address was given.
    #[error("Please enter your email address")]
    MissingEmail,

    /// The email address is malformed.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// The delivery backend failed.
    #[error("Failed to submit request. Please try again. ({0})")]
    Delivery(String),
}

impl ResumeError {
    /// Whether the caller supplied bad input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound | Self::MissingEmail | Self::InvalidEmail)
    }
}

/// Convenience result alias for resume operations.
pub type ResumeResult<T> = Result<T, ResumeError>;
