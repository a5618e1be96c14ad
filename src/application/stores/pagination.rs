//! Shared pagination state for controlled mode
//!
//! A [`PaginationStore`] owns the `(page, page_size)` pair for one list.
//! Hand its [`PageBinding`] and [`SizeBinding`] to
//! [`Paginator::controlled`](crate::domain::pagination::Paginator::controlled)
//! and every page/size request lands in the store.

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use super::store::Store;
use crate::domain::pagination::{window, PageCell};

/// Page number and page size owned by a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: i64) -> Self {
        Self {
            page: 1,
            page_size: window::effective_page_size(page_size),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginationStore {
    store: Store<PageState>,
}

impl PaginationStore {
    pub fn new(page_size: i64) -> Self {
        Self {
            store: Store::new(PageState::new(page_size)),
        }
    }

    pub fn state(&self) -> PageState {
        self.store.get()
    }

    /// Set the page. Only the lower bound is enforced here; the upper bound
    /// depends on the dataset, see [`Self::clamp_to`].
    pub fn set_page(&self, page: usize) {
        let page = page.max(1);
        self.store.update(|state| {
            if state.page == page {
                return false;
            }
            debug!(from = state.page, to = page, "page changed");
            state.page = page;
            true
        });
    }

    /// Set the page size and move to the page holding the previously first
    /// visible item.
    pub fn set_page_size(&self, page_size: usize) {
        let page_size = page_size.max(1);
        self.store.update(|state| {
            if state.page_size == page_size {
                return false;
            }
            let first = window::first_visible_item(state.page, state.page_size);
            state.page = window::page_containing(first, page_size);
            state.page_size = page_size;
            debug!(page_size, page = state.page, "page size changed");
            true
        });
    }

    /// Pull the page back inside a dataset of `total_items`.
    ///
    /// Call after the list shrinks. Returns `true` when the page moved.
    pub fn clamp_to(&self, total_items: usize) -> bool {
        self.store.update(|state| {
            let last = window::total_pages(total_items, state.page_size);
            if state.page <= last {
                return false;
            }
            info!(from = state.page, to = last, total_items, "page clamped after list shrank");
            state.page = last;
            true
        })
    }

    /// Back to the first page, keeping the page size.
    pub fn reset(&self) {
        self.set_page(1);
    }

    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.store.subscribe()
    }

    pub fn page_cell(&self) -> PageBinding {
        PageBinding {
            store: self.clone(),
        }
    }

    pub fn size_cell(&self) -> SizeBinding {
        SizeBinding {
            store: self.clone(),
        }
    }
}

/// Page number cell backed by a [`PaginationStore`]
#[derive(Debug, Clone)]
pub struct PageBinding {
    store: PaginationStore,
}

impl PageCell for PageBinding {
    fn read(&self) -> usize {
        self.store.state().page
    }

    fn request(&mut self, value: usize) {
        self.store.set_page(value);
    }

    fn is_delegated(&self) -> bool {
        true
    }
}

/// Page size cell backed by a [`PaginationStore`]
#[derive(Debug, Clone)]
pub struct SizeBinding {
    store: PaginationStore,
}

impl PageCell for SizeBinding {
    fn read(&self) -> usize {
        self.store.state().page_size
    }

    fn request(&mut self, value: usize) {
        self.store.set_page_size(value);
    }

    fn is_delegated(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::Paginator;

    #[test]
    fn new_store_clamps_page_size() {
        assert_eq!(PaginationStore::new(0).state(), PageState { page: 1, page_size: 1 });
    }

    #[test]
    fn resize_keeps_first_visible_item() {
        let store = PaginationStore::new(5);
        store.set_page(3);
        store.set_page_size(10);
        assert_eq!(store.state(), PageState { page: 2, page_size: 10 });
    }

    #[test]
    fn clamp_to_heals_after_shrink() {
        let store = PaginationStore::new(5);
        store.set_page(5);
        assert!(store.clamp_to(12));
        assert_eq!(store.state().page, 3);
        assert!(!store.clamp_to(12));
        assert!(store.clamp_to(0));
        assert_eq!(store.state().page, 1);
    }

    #[test]
    fn engine_drives_store_through_bindings() {
        let data: Vec<u32> = (1..=23).collect();
        let store = PaginationStore::new(5);
        let mut pager = Paginator::controlled(store.page_cell(), store.size_cell());

        let mut page = pager.paginate(&data);
        page.go_to_page(3);
        assert_eq!(page.items(), &[11, 12, 13, 14, 15]);

        page.set_page_size(10);
        assert_eq!(page.current_page(), 2);
        assert_eq!(page.items().first(), Some(&11));

        page.go_to_page(-1);
        assert_eq!(store.state(), PageState { page: 1, page_size: 10 });
    }

    #[test]
    fn store_owner_heals_page_after_delete() {
        let mut data: Vec<u32> = (1..=25).collect();
        let store = PaginationStore::new(5);
        let mut pager = Paginator::controlled(store.page_cell(), store.size_cell());
        pager.paginate(&data).go_to_page(5);

        data.truncate(7);
        assert_eq!(pager.paginate(&data).current_page(), 2);
        assert_eq!(store.state().page, 5, "engine does not rewrite delegated state");

        store.clamp_to(data.len());
        assert_eq!(store.state().page, 2);
    }

    #[tokio::test]
    async fn subscribers_wake_on_page_change() {
        let store = PaginationStore::new(10);
        let mut rx = store.subscribe();
        store.set_page(4);
        rx.changed().await.expect("store dropped");
        assert_eq!(rx.borrow().page, 4);
    }
}
