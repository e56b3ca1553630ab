//! Resume-by-email requests.

use std::future::Future;
use std::pin::Pin;
use std::sync::{LazyLock, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{ResumeError, ResumeResult};

/// Boxed future type for delivery operations.
pub type DeliveryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

// `local@domain.tld`, no whitespace, exactly one `@` per part.
static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Check that `email` has the `local@domain.tld` shape.
///
/// # Errors
/// Returns [`ResumeError::MissingEmail`] for blank input and
/// [`ResumeError::InvalidEmail`] for malformed addresses.
pub fn validate_email(email: &str) -> ResumeResult<()> {
    if email.trim().is_empty() {
        return Err(ResumeError::MissingEmail);
    }
    match EMAIL_RE.as_ref() {
        Ok(re) if re.is_match(email) => Ok(()),
        _ => Err(ResumeError::InvalidEmail),
    }
}

/// Body of a resume-by-email request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResumeEmailRequest {
    /// Recipient address. Missing reads as blank.
    #[serde(default)]
    pub email: String,
}

/// A validated request handed to the delivery backend.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResumeDeliveryRequest {
    /// Recipient address.
    pub email: String,
    /// When the request was accepted.
    pub requested_at: DateTime<Utc>,
}

/// Sends the resume to a visitor.
pub trait ResumeDelivery: Send + Sync {
    /// Deliver the resume.
    ///
    /// # Errors
    /// Returns [`ResumeError::Delivery`] if the backend fails.
    fn deliver(&self, request: ResumeDeliveryRequest) -> DeliveryFuture<'_, ResumeResult<()>>;
}

/// Delivery backend that queues requests in memory for an operator to
/// process.
#[derive(Debug, Default)]
pub struct OutboxDelivery {
    queued: Mutex<Vec<ResumeDeliveryRequest>>,
}

impl OutboxDelivery {
    /// Create an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests queued so far.
    #[must_use]
    pub fn queued(&self) -> Vec<ResumeDeliveryRequest> {
        self.queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResumeDelivery for OutboxDelivery {
    fn deliver(&self, request: ResumeDeliveryRequest) -> DeliveryFuture<'_, ResumeResult<()>> {
        Box::pin(async move {
            info!(email = %request.email, "Queued resume email");
            self.queued
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(request);
            Ok(())
        })
    }
}

/// Validate and deliver a resume request.
///
/// # Errors
/// Returns a validation error before touching the backend, or the backend's
/// delivery error.
pub async fn request_resume(
    delivery: &dyn ResumeDelivery,
    request: ResumeEmailRequest,
) -> ResumeResult<()> {
    validate_email(&request.email)?;
    delivery
        .deliver(ResumeDeliveryRequest {
            email: request.email,
            requested_at: Utc::now(),
        })
        .await
}
