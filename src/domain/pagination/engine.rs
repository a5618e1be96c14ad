//! Pagination engine
//!
//! [`Paginator`] holds the `(page, page_size)` pair in two [`PageCell`]s and
//! derives a [`Page`] from a borrowed dataset on demand. Nothing is cached:
//! every accessor recomputes from the cells and the slice, so derived values
//! can never drift from their inputs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::control::{Control, PageCell};
use super::window::{self, PageLink};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Construction parameters for an uncontrolled [`Paginator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Requested items per page. Values below 1 are treated as 1.
    pub page_size: i64,
    /// Starting page. Clamped against the dataset on first use.
    #[serde(default = "default_initial_page")]
    pub initial_page: i64,
}

fn default_initial_page() -> i64 {
    1
}

impl PaginationConfig {
    pub fn new(page_size: i64) -> Self {
        Self {
            page_size,
            initial_page: default_initial_page(),
        }
    }

    pub fn with_initial_page(mut self, page: i64) -> Self {
        self.initial_page = page;
        self
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Page/size state plus the rules for moving it.
#[derive(Debug)]
pub struct Paginator<P = Control, S = Control> {
    page: P,
    size: S,
}

impl Paginator {
    /// Uncontrolled paginator: owns both the page number and the page size.
    pub fn new(config: PaginationConfig) -> Self {
        let initial_page = usize::try_from(config.initial_page.max(1)).unwrap_or(usize::MAX);
        Self {
            page: Control::owned(initial_page),
            size: Control::owned(window::effective_page_size(config.page_size)),
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}

impl<P: PageCell, S: PageCell> Paginator<P, S> {
    /// Paginator whose page and size live wherever the given cells put them.
    pub fn controlled(page: P, size: S) -> Self {
        Self { page, size }
    }

    pub fn page_cell(&self) -> &P {
        &self.page
    }

    pub fn page_cell_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn size_cell(&self) -> &S {
        &self.size
    }

    pub fn size_cell_mut(&mut self) -> &mut S {
        &mut self.size
    }

    fn page_size(&self) -> usize {
        self.size.read().max(1)
    }

    /// Derive the current page of `data`.
    ///
    /// An owned page number that no longer fits (the dataset shrank, or the
    /// initial page was past the end) is written back clamped. A delegated
    /// one is only clamped for display; its owner has to heal it.
    pub fn paginate<'a, T>(&'a mut self, data: &'a [T]) -> Page<'a, T, P, S> {
        let total = window::total_pages(data.len(), self.page_size());
        let stored = self.page.read();
        let clamped = stored.clamp(1, total);
        if clamped != stored && !self.page.is_delegated() {
            debug!(stored, total_pages = total, "clamping page to dataset bounds");
            self.page.request(clamped);
        }
        Page { pager: self, data }
    }
}

/// One page of a dataset plus the operations that move between pages.
pub struct Page<'a, T, P = Control, S = Control> {
    pager: &'a mut Paginator<P, S>,
    data: &'a [T],
}

impl<'a, T, P: PageCell, S: PageCell> Page<'a, T, P, S> {
    /// Items visible on the current page.
    pub fn items(&self) -> &'a [T] {
        let data: &'a [T] = self.data;
        &data[window::slice_bounds(self.current_page(), self.page_size(), data.len())]
    }

    pub fn current_page(&self) -> usize {
        self.pager.page.read().clamp(1, self.total_pages())
    }

    pub fn total_pages(&self) -> usize {
        window::total_pages(self.data.len(), self.page_size())
    }

    pub fn total_items(&self) -> usize {
        self.data.len()
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page() > 1
    }

    /// 1-indexed position of the first visible item, 0 when empty.
    pub fn start_item(&self) -> usize {
        window::start_item(self.current_page(), self.page_size(), self.data.len())
    }

    /// 1-indexed position of the last visible item, 0 when empty.
    pub fn end_item(&self) -> usize {
        window::end_item(self.current_page(), self.page_size(), self.data.len())
    }

    pub fn page_links(&self, siblings: usize) -> Vec<PageLink> {
        window::page_links(self.current_page(), self.total_pages(), siblings)
    }

    /// Status line for the list footer.
    pub fn summary(&self) -> String {
        if self.data.is_empty() {
            return "No items found".to_string();
        }
        format!(
            "Showing {}–{} of {}",
            self.start_item(),
            self.end_item(),
            self.total_items()
        )
    }

    /// Jump to `page`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: i64) {
        let target = window::clamp_page(page, self.total_pages());
        if target as i64 != page {
            debug!(requested = page, target, "clamped page request");
        }
        self.request_page(target);
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.request_page(self.current_page() + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.request_page(self.current_page() - 1);
        }
    }

    /// Change the page size while keeping the first visible item on screen.
    ///
    /// With a delegated size only the new size is requested; the owner is
    /// responsible for moving the page.
    pub fn set_page_size(&mut self, size: i64) {
        let new_size = window::effective_page_size(size);
        if self.pager.size.is_delegated() {
            debug!(page_size = new_size, "forwarding page size change");
            self.pager.size.request(new_size);
            return;
        }

        let first = window::first_visible_item(self.current_page(), self.page_size());
        self.pager.size.request(new_size);
        let target = window::page_containing(first, new_size).min(self.total_pages());
        debug!(page_size = new_size, first_item = first, target, "page size changed");
        self.request_page(target);
    }

    fn request_page(&mut self, target: usize) {
        if self.pager.page.is_delegated() || self.pager.page.read() != target {
            self.pager.page.request(target);
        }
    }
}

impl<'a, T: Clone, P: PageCell, S: PageCell> Page<'a, T, P, S> {
    /// Owned copy of the full output contract.
    pub fn snapshot(&self) -> PageView<T> {
        PageView {
            items: self.items().to_vec(),
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            total_items: self.total_items(),
            page_size: self.page_size(),
            has_next_page: self.has_next_page(),
            has_previous_page: self.has_previous_page(),
            start_item: self.start_item(),
            end_item: self.end_item(),
        }
    }
}

/// Serializable snapshot of a [`Page`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_item: usize,
    pub end_item: usize,
}
