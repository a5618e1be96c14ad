pub mod stores;

pub use stores::{ConversationFilter, ConversationStore, FeatureStore, PaginationStore, Store};
