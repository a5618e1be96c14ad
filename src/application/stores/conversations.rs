//! Inbox conversation list

use std::collections::BTreeMap;

use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use super::store::Store;
use crate::domain::conversation::{Conversation, ConversationStatus};

/// Inbox filter bar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationFilter {
    /// Only show conversations in this status. `None` shows all.
    pub status: Option<ConversationStatus>,
    /// Free-text search over customer name and message preview
    pub query: String,
}

impl ConversationFilter {
    pub fn accepts(&self, conversation: &Conversation) -> bool {
        self.status.map_or(true, |s| conversation.status == s) && conversation.matches(&self.query)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InboxState {
    pub conversations: Vec<Conversation>,
    pub filter: ConversationFilter,
    pub selected: Option<Uuid>,
}

impl InboxState {
    fn position(&self, id: Uuid) -> Option<usize> {
        self.conversations.iter().position(|c| c.id == id)
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    store: Store<InboxState>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list, e.g. after a fetch. A selection that no
    /// longer exists is cleared.
    pub fn replace_all(&self, conversations: Vec<Conversation>) {
        self.store.update(|state| {
            info!(count = conversations.len(), "conversation list replaced");
            state.conversations = conversations;
            if let Some(id) = state.selected {
                if state.position(id).is_none() {
                    state.selected = None;
                }
            }
            true
        });
    }

    /// Insert or replace by id. Returns `true` when it was a new conversation.
    pub fn upsert(&self, conversation: Conversation) -> bool {
        let mut inserted = false;
        self.store.update(|state| {
            match state.position(conversation.id) {
                Some(index) => state.conversations[index] = conversation,
                None => {
                    state.conversations.push(conversation);
                    inserted = true;
                }
            }
            true
        });
        inserted
    }

    pub fn remove(&self, id: Uuid) -> Option<Conversation> {
        let mut removed = None;
        self.store.update(|state| {
            let Some(index) = state.position(id) else {
                return false;
            };
            removed = Some(state.conversations.remove(index));
            if state.selected == Some(id) {
                state.selected = None;
            }
            debug!(%id, "conversation removed");
            true
        });
        removed
    }

    /// Select a conversation, or clear with `None`. Unknown ids are ignored.
    pub fn select(&self, id: Option<Uuid>) -> bool {
        self.store.update(|state| {
            if state.selected == id {
                return false;
            }
            if let Some(id) = id {
                if state.position(id).is_none() {
                    return false;
                }
            }
            state.selected = id;
            true
        })
    }

    /// Record an incoming message on an existing conversation.
    pub fn receive(&self, id: Uuid, message: impl Into<String>) -> bool {
        self.store.update(|state| match state.find_mut(id) {
            Some(conversation) => {
                conversation.receive(message);
                true
            }
            None => false,
        })
    }

    pub fn mark_read(&self, id: Uuid) -> bool {
        self.store.update(|state| match state.find_mut(id) {
            Some(conversation) if conversation.unread > 0 => {
                conversation.mark_read();
                true
            }
            _ => false,
        })
    }

    pub fn set_status(&self, id: Uuid, status: ConversationStatus) -> bool {
        self.store.update(|state| match state.find_mut(id) {
            Some(conversation) if conversation.status != status => {
                debug!(%id, %status, "conversation status changed");
                conversation.status = status;
                true
            }
            _ => false,
        })
    }

    pub fn set_filter(&self, filter: ConversationFilter) {
        self.store.update(|state| {
            if state.filter == filter {
                return false;
            }
            state.filter = filter;
            true
        });
    }

    /// Conversations passing the current filter, most recently updated first.
    pub fn visible(&self) -> Vec<Conversation> {
        self.store.select(|state| {
            let mut visible: Vec<Conversation> = state
                .conversations
                .iter()
                .filter(|c| state.filter.accepts(c))
                .cloned()
                .collect();
            visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
            visible
        })
    }

    pub fn selected(&self) -> Option<Conversation> {
        self.store.select(|state| {
            let id = state.selected?;
            state.conversations.iter().find(|c| c.id == id).cloned()
        })
    }

    pub fn unread_total(&self) -> u32 {
        self.store
            .select(|state| state.conversations.iter().map(|c| c.unread).sum())
    }

    /// Number of conversations per status, ignoring the filter.
    pub fn status_counts(&self) -> BTreeMap<ConversationStatus, usize> {
        self.store.select(|state| {
            let mut counts: BTreeMap<_, _> =
                ConversationStatus::ALL.into_iter().map(|s| (s, 0)).collect();
            for conversation in &state.conversations {
                *counts.entry(conversation.status).or_default() += 1;
            }
            counts
        })
    }

    pub fn len(&self) -> usize {
        self.store.select(|state| state.conversations.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self) -> watch::Receiver<InboxState> {
        self.store.subscribe()
    }
}
