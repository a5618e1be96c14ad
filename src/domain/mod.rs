pub mod conversation;
pub mod feature;
pub mod pagination;

// Re-export commonly used types
pub use conversation::{Channel, Conversation, ConversationStatus};
pub use feature::Feature;
pub use pagination::{Control, PageCell, Paginator};
