//! Reactive client-side stores behind the dashboard list views

pub mod conversations;
pub mod features;
pub mod pagination;
pub mod store;

pub use conversations::{ConversationFilter, ConversationStore, InboxState};
pub use features::FeatureStore;
pub use pagination::{PageBinding, PageState, PaginationStore, SizeBinding};
pub use store::Store;
