//! Widget visibility and history-clear semantics.

use std::sync::Arc;

use tracing::{debug, info};

use super::scheduler::TurnScheduler;

/// Client-side key under which cached history would live.
pub const HISTORY_STORAGE_KEY: &str = "chatbot-messages";

/// Storage local to the visitor (browser local storage or similar).
pub trait HistoryStorage: Send + Sync {
    /// Remove a value if present.
    fn remove(&self, key: &str);
}

/// [`HistoryStorage`] for hosts that never cache history.
#[derive(Clone, Copy, Debug, Default)]
pub struct EphemeralHistory;

impl HistoryStorage for EphemeralHistory {
    fn remove(&self, key: &str) {
        debug!(key, "Nothing cached to remove");
    }
}

/// Open/closed state of the widget.
///
/// Closing discards the conversation, so reopening always starts from the
/// suggestion panel.
pub struct WidgetShell {
    open: bool,
    scheduler: Arc<TurnScheduler>,
    history: Arc<dyn HistoryStorage>,
}

impl WidgetShell {
    /// Create a closed shell.
    #[must_use]
    pub fn new(scheduler: Arc<TurnScheduler>, history: Arc<dyn HistoryStorage>) -> Self {
        Self {
            open: false,
            scheduler,
            history,
        }
    }

    /// Whether the chat window is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip visibility. Closing this way also clears history.
    pub fn toggle_open(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            debug!("Chat widget opened");
        }
    }

    /// Hide the window and discard the conversation.
    pub fn close(&mut self) {
        self.open = false;
        self.clear_history();
        debug!("Chat widget closed");
    }

    /// Discard the conversation without closing.
    pub fn clear_history(&self) {
        self.scheduler.clear();
        self.history.remove(HISTORY_STORAGE_KEY);
        info!("Chat history cleared");
    }

    /// Whether the clear control should be offered.
    #[must_use]
    pub fn can_clear_history(&self) -> bool {
        !self.scheduler.is_empty()
    }

    /// The scheduler driving this widget's conversation.
    #[must_use]
    pub fn scheduler(&self) -> &Arc<TurnScheduler> {
        &self.scheduler
    }
}

impl std::fmt::Debug for WidgetShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetShell")
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::chatbot::catalog::ResponseCatalog;
    use crate::chatbot::config::ChatbotConfig;
    use crate::chatbot::resolver::ResponseResolver;

    /// Storage that records removed keys.
    #[derive(Default)]
    struct RecordingHistory {
        removed: Mutex<Vec<String>>,
    }

    impl HistoryStorage for RecordingHistory {
        fn remove(&self, key: &str) {
            self.removed.lock().unwrap().push(key.to_string());
        }
    }

    fn shell() -> (WidgetShell, Arc<RecordingHistory>) {
        let resolver = ResponseResolver::new(Arc::new(ResponseCatalog::builtin()));
        let scheduler = TurnScheduler::new(Arc::new(resolver), &ChatbotConfig::default());
        let history = Arc::new(RecordingHistory::default());
        (WidgetShell::new(Arc::new(scheduler), history.clone()), history)
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_and_close() {
        let (mut shell, _) = shell();
        assert!(!shell.is_open());
        shell.toggle_open();
        assert!(shell.is_open());
        shell.toggle_open();
        assert!(!shell.is_open());

        shell.toggle_open();
        shell.scheduler().submit("Is he available for work?").unwrap();
        assert!(shell.can_clear_history());
        shell.close();
        assert!(!shell.is_open());
        assert!(!shell.can_clear_history());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_removes_cached_history() {
        let (mut shell, history) = shell();
        shell.toggle_open();
        shell.close();
        assert_eq!(
            *history.removed.lock().unwrap(),
            vec![HISTORY_STORAGE_KEY.to_string()]
        );

        shell.clear_history();
        assert_eq!(history.removed.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopen_after_close_mid_turn_is_empty() {
        let (mut shell, _) = shell();
        shell.toggle_open();
        shell.scheduler().submit("Can I see his resume?").unwrap();
        shell.close();

        tokio::time::sleep(Duration::from_millis(1500)).await;
        shell.toggle_open();
        assert!(shell.scheduler().state().messages.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopen_after_reply_landed_is_empty() {
        let (mut shell, _) = shell();
        shell.toggle_open();
        shell.scheduler().submit("Can I see his resume?").unwrap();
        shell.scheduler().wait_idle().await;
        assert_eq!(shell.scheduler().state().messages.len(), 2);

        shell.close();
        shell.toggle_open();
        assert!(shell.scheduler().state().messages.is_empty());
    }
}
