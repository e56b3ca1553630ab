//! Conversation state owned by a single widget instance.

use serde::Serialize;

use super::message::Message;

/// Snapshot of a conversation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ConversationState {
    /// Messages in insertion order.
    pub messages: Vec<Message>,
    /// Whether a reply is pending.
    pub responding: bool,
}

/// Ticket for a pending reply, tied to the conversation epoch it started in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ReplyTicket {
    epoch: u64,
}

/// Ordered message list plus the pending-reply counter.
///
/// Every `clear` starts a new epoch; replies begun in an older epoch are
/// dropped when they land.
#[derive(Debug, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
    pending: usize,
    epoch: u64,
}

impl ConversationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been exchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether at least one reply is pending.
    #[must_use]
    pub const fn responding(&self) -> bool {
        self.pending > 0
    }

    /// Copy out the current state.
    #[must_use]
    pub fn snapshot(&self) -> ConversationState {
        ConversationState {
            messages: self.messages.clone(),
            responding: self.responding(),
        }
    }

    /// Drop every message. Pending replies stay pending but will be discarded.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn begin_reply(&mut self) -> ReplyTicket {
        self.pending += 1;
        ReplyTicket { epoch: self.epoch }
    }

    /// Settle a pending reply. Returns whether `reply` was appended.
    pub(crate) fn finish_reply(&mut self, ticket: ReplyTicket, reply: Message) -> bool {
        self.pending = self.pending.saturating_sub(1);
        if ticket.epoch != self.epoch {
            return false;
        }
        self.messages.push(reply);
        true
    }
}
