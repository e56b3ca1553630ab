//! Preset-response chat widget.
//!
//! The widget answers a closed set of authored questions:
//! - [`ResponseCatalog`]: exact question → canned answer table
//! - [`ResponseResolver`]: catalog lookup with a generic fallback
//! - [`TurnScheduler`]: user message, simulated delay, assistant reply
//! - [`SuggestionPresenter`]: starter questions for an empty conversation
//! - [`ActionDispatcher`]: follow-up controls that navigate the site
//! - [`WidgetShell`]: visibility and history clearing
//!
//! [`ChatWidget`] wires them together for one visitor.

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod message;
pub mod resolver;
pub mod scheduler;
pub mod store;
pub mod suggestions;
pub mod widget;

pub use action::{ActionControl, ActionDispatcher, ActionTag, Navigator};
pub use catalog::{CatalogEntry, ResponseCatalog};
pub use config::{ChatbotConfig, ReplyOrdering};
pub use error::{ChatbotError, ChatbotResult};
pub use message::{Message, MessageId, Role};
pub use resolver::{Resolution, ResponseResolver};
pub use scheduler::TurnScheduler;
pub use store::{ConversationState, ConversationStore};
pub use suggestions::{SuggestionCategory, SuggestionItem, SuggestionPresenter};
pub use widget::{EphemeralHistory, HISTORY_STORAGE_KEY, HistoryStorage, WidgetShell};

use std::sync::Arc;

use tracing::{debug, info};

/// A fully assembled chat widget for a single visitor.
#[derive(Debug)]
pub struct ChatWidget {
    shell: WidgetShell,
    suggestions: SuggestionPresenter,
    dispatcher: ActionDispatcher,
}

impl ChatWidget {
    /// Assemble the widget from the built-in catalog and suggestions.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(
        config: &ChatbotConfig,
        navigator: Arc<dyn Navigator>,
        history: Arc<dyn HistoryStorage>,
    ) -> ChatbotResult<Self> {
        Self::with_parts(
            Arc::new(ResponseCatalog::builtin()),
            SuggestionPresenter::builtin(),
            config,
            navigator,
            history,
        )
    }

    /// Assemble the widget from explicit parts.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or a suggestion has
    /// no catalog entry.
    pub fn with_parts(
        catalog: Arc<ResponseCatalog>,
        suggestions: SuggestionPresenter,
        config: &ChatbotConfig,
        navigator: Arc<dyn Navigator>,
        history: Arc<dyn HistoryStorage>,
    ) -> ChatbotResult<Self> {
        config.validate()?;
        suggestions.check_against(&catalog)?;

        info!(
            questions = catalog.len(),
            suggestions = suggestions.items().len(),
            delay_ms = config.reply_delay_ms,
            ordering = %config.ordering,
            "Chat widget ready"
        );

        let resolver = ResponseResolver::with_fallback(catalog, config.fallback.clone());
        let scheduler = TurnScheduler::new(Arc::new(resolver), config);

        Ok(Self {
            shell: WidgetShell::new(Arc::new(scheduler), history),
            suggestions,
            dispatcher: ActionDispatcher::new(navigator),
        })
    }

    /// Visibility and clearing controls.
    #[must_use]
    pub const fn shell(&self) -> &WidgetShell {
        &self.shell
    }

    /// Mutable visibility and clearing controls.
    pub const fn shell_mut(&mut self) -> &mut WidgetShell {
        &mut self.shell
    }

    /// Submit free text.
    pub fn submit(&self, question: &str) -> Option<MessageId> {
        self.shell.scheduler().submit(question)
    }

    /// Snapshot of the conversation.
    #[must_use]
    pub fn state(&self) -> ConversationState {
        self.shell.scheduler().state()
    }

    /// Resolve once no reply is pending.
    pub async fn wait_idle(&self) {
        self.shell.scheduler().wait_idle().await;
    }

    /// Starter questions to render right now.
    #[must_use]
    pub fn visible_suggestions(&self) -> Vec<SuggestionItem> {
        self.suggestions.visible_items(&self.state()).to_vec()
    }

    /// All configured starter questions.
    #[must_use]
    pub const fn suggestions(&self) -> &SuggestionPresenter {
        &self.suggestions
    }

    /// Select a starter question by id. Returns `None` for unknown ids.
    pub fn select_suggestion(&self, id: &str) -> Option<MessageId> {
        let item = self.suggestions.find(id)?;
        self.suggestions.select(item, self.shell.scheduler())
    }

    /// Activate the follow-up control of a message.
    ///
    /// Returns whether a navigation was dispatched.
    pub fn activate_action(&self, message_id: MessageId) -> bool {
        let tag = self
            .state()
            .messages
            .iter()
            .find(|message| message.id == message_id)
            .and_then(Message::follow_up);

        match tag {
            Some(tag) => {
                self.dispatcher.dispatch(tag);
                true
            }
            None => {
                debug!(message_id = %message_id, "No follow-up action on message");
                false
            }
        }
    }
}
