//! Conversation domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Channel the customer wrote in on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Web,
    WhatsApp,
    Email,
    Messenger,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::WhatsApp => "whats_app",
            Self::Email => "email",
            Self::Messenger => "messenger",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Conversation status in the inbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    /// Waiting on an agent
    Open,
    /// Waiting on the customer
    Pending,
    /// Closed by an agent or the bot
    Resolved,
}

impl ConversationStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::Pending, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "open" => Self::Open,
            "pending" => Self::Pending,
            "resolved" => Self::Resolved,
            _ => Self::Open,
        }
    }
}

impl std::fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Customer conversation as shown in the inbox list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    /// Customer display name
    pub customer: String,
    pub channel: Channel,
    pub status: ConversationStatus,
    /// Preview of the latest message
    pub last_message: String,
    /// Messages the agent has not opened yet
    pub unread: u32,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(
        customer: impl Into<String>,
        channel: Channel,
        last_message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer: customer.into(),
            channel,
            status: ConversationStatus::Open,
            last_message: last_message.into(),
            unread: 1,
            updated_at: Utc::now(),
        }
    }

    /// Record an incoming customer message. Resolved conversations reopen.
    pub fn receive(&mut self, message: impl Into<String>) {
        self.last_message = message.into();
        self.unread = self.unread.saturating_add(1);
        self.updated_at = Utc::now();
        if self.status == ConversationStatus::Resolved {
            self.status = ConversationStatus::Open;
        }
    }

    pub fn mark_read(&mut self) {
        self.unread = 0;
    }

    /// Case-insensitive match against the customer name and message preview.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.customer.to_lowercase().contains(&query)
            || self.last_message.to_lowercase().contains(&query)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Conversation {
        Conversation::new("Amira Haddad", Channel::WhatsApp, "Where is my order?")
    }

    #[test]
    fn new_conversation_is_open_and_unread() {
        let c = sample();
        assert_eq!(c.status, ConversationStatus::Open);
        assert_eq!(c.unread, 1);
    }

    #[test]
    fn receive_reopens_resolved() {
        let mut c = sample();
        c.status = ConversationStatus::Resolved;
        c.mark_read();

        c.receive("Still waiting");
        assert_eq!(c.status, ConversationStatus::Open);
        assert_eq!(c.unread, 1);
        assert_eq!(c.last_message, "Still waiting");
    }

    #[test]
    fn matches_customer_or_message() {
        let c = sample();
        assert!(c.matches("amira"));
        assert!(c.matches("ORDER"));
        assert!(c.matches("   "));
        assert!(!c.matches("refund"));
    }

    #[test]
    fn unknown_status_defaults_to_open() {
        assert_eq!(ConversationStatus::from_str("archived"), ConversationStatus::Open);
        for status in ConversationStatus::ALL {
            assert_eq!(ConversationStatus::from_str(status.as_str()), status);
        }
    }
}
