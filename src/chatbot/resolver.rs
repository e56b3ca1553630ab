//! Question resolution against the catalog.

use std::sync::Arc;

use serde::Serialize;

use super::action::ActionTag;
use super::catalog::ResponseCatalog;

/// Reply used when no catalog entry matches.
pub const DEFAULT_FALLBACK: &str =
    "Thanks for your message! I can only answer the questions listed in this panel for now.";

/// Outcome of resolving one question.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Resolution {
    /// Reply body.
    pub content: String,
    /// Optional follow-up action.
    pub action: Option<ActionTag>,
}

/// Resolves questions to canned replies.
#[derive(Clone, Debug)]
pub struct ResponseResolver {
    catalog: Arc<ResponseCatalog>,
    fallback: String,
}

impl ResponseResolver {
    /// Create a resolver with the default fallback text.
    #[must_use]
    pub fn new(catalog: Arc<ResponseCatalog>) -> Self {
        Self::with_fallback(catalog, DEFAULT_FALLBACK)
    }

    /// Create a resolver with a custom fallback text.
    #[must_use]
    pub fn with_fallback(catalog: Arc<ResponseCatalog>, fallback: impl Into<String>) -> Self {
        Self {
            catalog,
            fallback: fallback.into(),
        }
    }

    /// Resolve `question`: the catalog entry when one matches exactly,
    /// the fallback otherwise.
    #[must_use]
    pub fn resolve(&self, question: &str) -> Resolution {
        self.catalog.lookup(question).map_or_else(
            || Resolution {
                content: self.fallback.clone(),
                action: None,
            },
            |entry| Resolution {
                content: entry.content.clone(),
                action: entry.action,
            },
        )
    }
}
