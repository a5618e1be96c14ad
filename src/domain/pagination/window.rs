//! Page window arithmetic
//!
//! Pure functions shared by the engine and the stores. Every function is
//! total: out-of-range input is clamped, never rejected.

use std::ops::Range;

use serde::Serialize;

/// Effective page size for a requested value (minimum 1).
pub fn effective_page_size(requested: i64) -> usize {
    usize::try_from(requested.max(1)).unwrap_or(usize::MAX)
}

/// Number of pages needed for `total_items`. An empty dataset still has one page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page number into `[1, total_pages]`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let upper = total_pages.max(1);
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(upper, |page| page.min(upper))
}

/// Zero-based slice bounds of `page` within a dataset of `total_items`.
pub fn slice_bounds(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// First item shown on `page`, 1-indexed. Zero for an empty dataset.
pub fn start_item(page: usize, page_size: usize, total_items: usize) -> usize {
    if total_items == 0 {
        return 0;
    }
    slice_bounds(page, page_size, total_items).start + 1
}

/// Last item shown on `page`, 1-indexed and inclusive. Zero for an empty dataset.
pub fn end_item(page: usize, page_size: usize, total_items: usize) -> usize {
    if total_items == 0 {
        return 0;
    }
    slice_bounds(page, page_size, total_items).end
}

/// 1-indexed position of the first item on `page`, independent of the dataset.
pub fn first_visible_item(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1)
        .saturating_mul(page_size)
        .saturating_add(1)
}

/// Page that contains the 1-indexed `item` at the given page size.
pub fn page_containing(item: usize, page_size: usize) -> usize {
    item.div_ceil(page_size.max(1)).max(1)
}

/// One entry of the page-number button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Page-number buttons around `current`.
///
/// The first and last page are always present, with `siblings` pages on
/// either side of the current one. Collapsed gaps become [`PageLink::Ellipsis`].
/// Short ranges are listed in full.
pub fn page_links(current: usize, total: usize, siblings: usize) -> Vec<PageLink> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    // first + last + current + two ellipses
    let slots = siblings.saturating_mul(2).saturating_add(5);
    if total <= slots {
        return (1..=total).map(PageLink::Page).collect();
    }

    let left = current.saturating_sub(siblings).max(1);
    let right = current.saturating_add(siblings).min(total);
    let left_gap = left > 2;
    let right_gap = right < total - 2;
    let edge_run = siblings * 2 + 3;

    let mut links = Vec::with_capacity(slots);
    match (left_gap, right_gap) {
        (false, true) => {
            links.extend((1..=edge_run).map(PageLink::Page));
            links.push(PageLink::Ellipsis);
            links.push(PageLink::Page(total));
        }
        (true, false) => {
            links.push(PageLink::Page(1));
            links.push(PageLink::Ellipsis);
            links.extend((total - edge_run + 1..=total).map(PageLink::Page));
        }
        _ => {
            links.push(PageLink::Page(1));
            links.push(PageLink::Ellipsis);
            links.extend((left..=right).map(PageLink::Page));
            links.push(PageLink::Ellipsis);
            links.push(PageLink::Page(total));
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn page_size_never_below_one() {
        assert_eq!(effective_page_size(0), 1);
        assert_eq!(effective_page_size(-20), 1);
        assert_eq!(effective_page_size(25), 25);
    }

    #[test]
    fn empty_dataset_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 5), 5);
    }

    #[test]
    fn clamp_out_of_range_pages() {
        assert_eq!(clamp_page(999, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(-5, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(i64::MAX, 7), 7);
    }

    #[test]
    fn item_range_on_last_page() {
        assert_eq!(slice_bounds(3, 5, 12), 10..12);
        assert_eq!(start_item(3, 5, 12), 11);
        assert_eq!(end_item(3, 5, 12), 12);
    }

    #[test]
    fn item_range_is_zero_when_empty() {
        assert_eq!(slice_bounds(1, 5, 0), 0..0);
        assert_eq!(start_item(1, 5, 0), 0);
        assert_eq!(end_item(1, 5, 0), 0);
    }

    #[test]
    fn resize_keeps_first_visible_item() {
        let first = first_visible_item(3, 5);
        assert_eq!(first, 11);
        assert_eq!(page_containing(first, 10), 2);
        assert_eq!(page_containing(first, 1), 11);
        assert_eq!(page_containing(first, 50), 1);
    }

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(page_links(2, 4, 1), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(page_links(1, 1, 1), vec![Page(1)]);
    }

    #[test]
    fn links_collapse_right_side_near_start() {
        assert_eq!(
            page_links(1, 10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn links_collapse_left_side_near_end() {
        assert_eq!(
            page_links(10, 10, 1),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn links_collapse_both_sides_in_middle() {
        assert_eq!(
            page_links(5, 10, 1),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn links_clamp_current_page() {
        assert_eq!(page_links(0, 10, 1), page_links(1, 10, 1));
        assert_eq!(page_links(50, 10, 1), page_links(10, 10, 1));
    }
}
