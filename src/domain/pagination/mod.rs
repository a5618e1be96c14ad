//! Client-side pagination
//!
//! - [`window`]: page arithmetic and the page-number button row
//! - [`control`]: who owns the page number and the page size
//! - [`engine`]: the [`Paginator`] and its per-dataset [`Page`] view

pub mod control;
pub mod engine;
pub mod window;

pub use control::{Control, OnChange, PageCell};
pub use engine::{Page, PageView, PaginationConfig, Paginator, DEFAULT_PAGE_SIZE};
pub use window::PageLink;
