//! Dashboard feature flags

use serde::{Deserialize, Serialize};

/// Optional dashboard modules an account can switch on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Automated first-line replies
    Chatbot,
    /// Human agent chat
    LiveChat,
    /// Help-center articles the bot can cite
    KnowledgeBase,
    /// Order lookup inside conversations
    Orders,
    /// Reporting dashboards
    Analytics,
}

impl Feature {
    pub const ALL: [Self; 5] = [
        Self::Chatbot,
        Self::LiveChat,
        Self::KnowledgeBase,
        Self::Orders,
        Self::Analytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chatbot => "chatbot",
            Self::LiveChat => "live_chat",
            Self::KnowledgeBase => "knowledge_base",
            Self::Orders => "orders",
            Self::Analytics => "analytics",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    /// Whether a fresh account has this feature on.
    pub fn enabled_by_default(&self) -> bool {
        !matches!(self, Self::Analytics)
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_name() {
        for feature in Feature::ALL {
            assert_eq!(Feature::parse(feature.as_str()), Some(feature));
        }
        assert_eq!(Feature::parse("billing"), None);
    }

    #[test]
    fn serde_name_matches_as_str() {
        let json = serde_json::to_string(&Feature::KnowledgeBase).unwrap();
        assert_eq!(json, "\"knowledge_base\"");
    }
}
