//! Starter questions shown while a conversation is empty.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::ResponseCatalog;
use super::error::{ChatbotError, ChatbotResult};
use super::message::MessageId;
use super::scheduler::TurnScheduler;
use super::store::ConversationState;

/// Topic a suggestion belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    /// General portfolio questions.
    Portfolio,
    /// Project questions.
    Projects,
    /// Skill questions.
    Skills,
    /// Contact questions.
    Contact,
}

impl SuggestionCategory {
    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portfolio => "portfolio",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A starter question.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    /// Stable identifier.
    pub id: String,
    /// Text shown on the card.
    pub label: String,
    /// Question submitted on selection; must be a catalog key.
    pub trigger_question: String,
    /// Card icon.
    pub icon: String,
    /// Topic.
    pub category: SuggestionCategory,
}

impl SuggestionItem {
    /// Build an item whose label differs from its trigger question.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        trigger_question: impl Into<String>,
        icon: impl Into<String>,
        category: SuggestionCategory,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            trigger_question: trigger_question.into(),
            icon: icon.into(),
            category,
        }
    }

    /// Build an item whose label is its trigger question.
    #[must_use]
    pub fn asking(
        id: impl Into<String>,
        question: &str,
        icon: impl Into<String>,
        category: SuggestionCategory,
    ) -> Self {
        Self::new(id, question, question, icon, category)
    }
}

/// Fixed set of starter questions.
#[derive(Clone, Debug)]
pub struct SuggestionPresenter {
    items: Vec<SuggestionItem>,
}

impl SuggestionPresenter {
    /// Presenter over explicit items.
    #[must_use]
    pub const fn new(items: Vec<SuggestionItem>) -> Self {
        Self { items }
    }

    /// The site's starter questions.
    #[must_use]
    pub fn builtin() -> Self {
        use SuggestionCategory::{Contact, Portfolio, Projects, Skills};

        Self::new(vec![
            SuggestionItem::asking("1", "Tell me about Jalaj's experience", "👤", Portfolio),
            SuggestionItem::asking("2", "What are his technical skills?", "⚡", Skills),
            SuggestionItem::asking("3", "Can I see his resume?", "📄", Portfolio),
            SuggestionItem::asking("4", "Is he available for work?", "💼", Contact),
            SuggestionItem::asking("5", "What are Jalaj's achievements?", "🏆", Portfolio),
            SuggestionItem::new(
                "6",
                "Show me his projects",
                "What projects has Jalaj built?",
                "🚀",
                Projects,
            ),
        ])
    }

    /// All configured items.
    #[must_use]
    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    /// Items to render for `state`: all of them while the conversation is
    /// empty, none afterwards.
    #[must_use]
    pub fn visible_items(&self, state: &ConversationState) -> &[SuggestionItem] {
        if state.messages.is_empty() {
            &self.items
        } else {
            &[]
        }
    }

    /// Find an item by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&SuggestionItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Submit the item's trigger question.
    pub fn select(&self, item: &SuggestionItem, scheduler: &TurnScheduler) -> Option<MessageId> {
        debug!(suggestion = %item.id, category = %item.category, "Suggestion selected");
        scheduler.submit(&item.trigger_question)
    }

    /// Ensure every trigger question has a catalog entry.
    ///
    /// # Errors
    /// Returns [`ChatbotError::UnmatchedSuggestion`] for the first item whose
    /// trigger question is not a catalog key.
    pub fn check_against(&self, catalog: &ResponseCatalog) -> ChatbotResult<()> {
        match self
            .items
            .iter()
            .find(|item| !catalog.contains(&item.trigger_question))
        {
            Some(item) => Err(ChatbotError::UnmatchedSuggestion {
                id: item.id.clone(),
                question: item.trigger_question.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::chatbot::config::ChatbotConfig;
    use crate::chatbot::message::Message;
    use crate::chatbot::resolver::{DEFAULT_FALLBACK, ResponseResolver};

    #[test]
    fn test_builtin_suggestions_match_catalog() {
        let catalog = ResponseCatalog::builtin();
        let presenter = SuggestionPresenter::builtin();
        assert!(presenter.check_against(&catalog).is_ok());

        let resolver = ResponseResolver::new(Arc::new(catalog));
        for item in presenter.items() {
            let resolution = resolver.resolve(&item.trigger_question);
            assert_ne!(resolution.content, DEFAULT_FALLBACK, "{}", item.id);
        }
    }

    #[test]
    fn test_unmatched_suggestion_detected() {
        let presenter = SuggestionPresenter::new(vec![SuggestionItem::asking(
            "x",
            "Does he like cats?",
            "🐈",
            SuggestionCategory::Portfolio,
        )]);
        let err = presenter
            .check_against(&ResponseCatalog::builtin())
            .unwrap_err();
        assert_eq!(
            err,
            ChatbotError::UnmatchedSuggestion {
                id: "x".to_string(),
                question: "Does he like cats?".to_string(),
            }
        );
    }

    #[test]
    fn test_visible_only_when_empty() {
        let presenter = SuggestionPresenter::builtin();
        let mut state = ConversationState::default();
        assert_eq!(presenter.visible_items(&state).len(), 6);

        state.messages.push(Message::user("hi"));
        assert!(presenter.visible_items(&state).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_submits_trigger_question() {
        let presenter = SuggestionPresenter::builtin();
        let resolver = ResponseResolver::new(Arc::new(ResponseCatalog::builtin()));
        let scheduler = TurnScheduler::new(Arc::new(resolver), &ChatbotConfig::default());

        let item = presenter.find("6").unwrap();
        presenter.select(item, &scheduler).unwrap();

        let state = scheduler.state();
        assert_eq!(state.messages[0].content, "What projects has Jalaj built?");
    }
}
