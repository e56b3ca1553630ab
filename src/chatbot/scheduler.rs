//! Turn orchestration: user message, simulated delay, assistant reply.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::{Notify, oneshot};
use tracing::debug;

use super::config::{ChatbotConfig, ReplyOrdering};
use super::message::{Message, MessageId};
use super::resolver::ResponseResolver;
use super::store::{ConversationState, ConversationStore};

/// Drives turns against a single conversation.
///
/// Each accepted submission appends the user message immediately and spawns
/// one timer task that appends the reply when it fires. Nothing is cancelled;
/// a `clear` only makes older replies land nowhere.
#[derive(Debug)]
pub struct TurnScheduler {
    store: Arc<Mutex<ConversationStore>>,
    resolver: Arc<ResponseResolver>,
    delay: Duration,
    ordering: ReplyOrdering,
    last_reply: Mutex<Option<oneshot::Receiver<()>>>,
    idle: Arc<Notify>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TurnScheduler {
    /// Create a scheduler over a fresh, empty conversation.
    #[must_use]
    pub fn new(resolver: Arc<ResponseResolver>, config: &ChatbotConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(ConversationStore::new())),
            resolver,
            delay: config.reply_delay(),
            ordering: config.ordering,
            last_reply: Mutex::new(None),
            idle: Arc::new(Notify::new()),
        }
    }

    /// Submit a question.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the user message
    /// is appended right away and its id returned; the reply follows after
    /// the configured delay. Must be called from within a tokio runtime.
    pub fn submit(&self, question: &str) -> Option<MessageId> {
        if question.trim().is_empty() {
            debug!("Ignoring blank chat submission");
            return None;
        }

        let user_message = Message::user(question);
        let id = user_message.id;
        let ticket = {
            let mut store = lock(&self.store);
            store.push(user_message);
            store.begin_reply()
        };

        let (previous, done) = match self.ordering {
            ReplyOrdering::Independent => (None, None),
            ReplyOrdering::Fifo => {
                let (tx, rx) = oneshot::channel();
                let previous = lock(&self.last_reply).replace(rx);
                (previous, Some(tx))
            }
        };

        let store = Arc::clone(&self.store);
        let resolver = Arc::clone(&self.resolver);
        let idle = Arc::clone(&self.idle);
        let delay = self.delay;
        let question = question.to_string();

        debug!(message_id = %id, ?delay, "Scheduled chat reply");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(previous) = previous {
                // A dropped sender means the previous reply is settled too.
                let _ = previous.await;
            }

            let resolution = resolver.resolve(&question);
            let reply = Message::assistant(resolution.content, resolution.action);
            let reply_id = reply.id;

            let (appended, responding) = {
                let mut store = lock(&store);
                let appended = store.finish_reply(ticket, reply);
                (appended, store.responding())
            };

            if appended {
                debug!(message_id = %reply_id, in_reply_to = %id, "Chat reply appended");
            } else {
                debug!(in_reply_to = %id, "Chat reply discarded after clear");
            }

            if let Some(done) = done {
                let _ = done.send(());
            }
            if !responding {
                idle.notify_waiters();
            }
        });

        Some(id)
    }

    /// Empty the conversation. Pending replies are discarded when they land.
    pub fn clear(&self) {
        lock(&self.store).clear();
    }

    /// Snapshot of the conversation.
    #[must_use]
    pub fn state(&self) -> ConversationState {
        lock(&self.store).snapshot()
    }

    /// Whether the conversation has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.store).is_empty()
    }

    /// Whether a reply is pending.
    #[must_use]
    pub fn responding(&self) -> bool {
        lock(&self.store).responding()
    }

    /// Resolve once no reply is pending.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            let _ = notified.as_mut().enable();
            if !self.responding() {
                return;
            }
            notified.await;
        }
    }
}
