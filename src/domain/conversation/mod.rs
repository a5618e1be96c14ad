pub mod model;

pub use model::{Channel, Conversation, ConversationStatus};
