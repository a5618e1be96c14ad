//! # desk-pager
//!
//! Client-side list state for the customer-service dashboard.
//!
//! ## Architecture
//!
//! - **domain**: pagination engine, conversation and feature models
//! - **application**: reactive stores (inbox, feature toggles, pagination)
//! - **infrastructure**: JSON dataset loading
//! - **shared**: error types and tracing setup
//! - **config**: TOML configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export the engine for easy access
pub use domain::pagination::{Page, PageLink, PageView, PaginationConfig, Paginator};

// Re-export stores
pub use application::stores::{ConversationStore, FeatureStore, PaginationStore, Store};
