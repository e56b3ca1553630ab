//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::resume::{OutboxDelivery, ResumeDelivery};
use crate::site::SiteConfig;

/// Shared application state.
pub struct AppState {
    /// Site configuration.
    pub config: SiteConfig,
    /// Backend for resume-by-email requests.
    pub delivery: Arc<dyn ResumeDelivery>,
}

impl AppState {
    /// Create state with the in-memory outbox as delivery backend.
    #[must_use]
    pub fn new(config: SiteConfig) -> Arc<Self> {
        Self::with_delivery(config, Arc::new(OutboxDelivery::new()))
    }

    /// Create state with an explicit delivery backend.
    #[must_use]
    pub fn with_delivery(config: SiteConfig, delivery: Arc<dyn ResumeDelivery>) -> Arc<Self> {
        Arc::new(Self { config, delivery })
    }
}
