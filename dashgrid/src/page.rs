//! Pagination slicer.

use std::ops::Range;

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable 1-based page number.
    Page(usize),
    /// A gap in the strip.
    Ellipsis,
}

/// Strips with this many pages or fewer show every page.
const MAX_UNWINDOWED: usize = 5;

/// Number of pages needed for `count` items. Zero when there are no items.
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    count.div_ceil(items_per_page)
}

/// Clamps a 1-based page index into `1..=max(1, total_pages)`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of the current page within the filtered sequence.
///
/// Out-of-range pages yield an empty range rather than panicking.
pub fn page_range(count: usize, items_per_page: usize, current_page: usize) -> Range<usize> {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .min(count);
    let end = start.saturating_add(items_per_page).min(count);
    start..end
}

/// Slices the filtered sequence down to the current page.
///
/// With pagination disabled the whole sequence is returned.
pub fn slice<T>(items: &[T], items_per_page: usize, current_page: usize, enabled: bool) -> &[T] {
    if !enabled {
        return items;
    }
    &items[page_range(items.len(), items_per_page, current_page)]
}

/// Page-number strip with ellipses.
///
/// # Example
///
/// ```
/// use dashgrid::page::{page_numbers, PageItem::*};
///
/// assert_eq!(page_numbers(5, 10), vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]);
/// ```
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= MAX_UNWINDOWED {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = Vec::with_capacity(7);
    if current_page <= 3 {
        items.extend((1..=4).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((total_pages - 3..=total_pages).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current_page - 1..=current_page + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total_pages));
    }
    items
}

/// Footer summary for the current page ("Showing 11-20 of 42").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    /// 1-based index of the first item shown; 0 when nothing is shown.
    pub start_item: usize,
    /// 1-based index of the last item shown; 0 when nothing is shown.
    pub end_item: usize,
    pub total_items: usize,
}

impl PageWindow {
    pub fn new(count: usize, items_per_page: usize, current_page: usize, enabled: bool) -> Self {
        if !enabled {
            return Self {
                current_page: 1,
                total_pages: usize::from(count > 0),
                start_item: usize::from(count > 0),
                end_item: count,
                total_items: count,
            };
        }

        let range = page_range(count, items_per_page, current_page);
        let (start_item, end_item) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };
        Self {
            current_page,
            total_pages: total_pages(count, items_per_page),
            start_item,
            end_item,
            total_items: count,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::*;
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_slice_last_partial_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(slice(&items, 10, 3, true), &[21, 22, 23, 24, 25]);
        assert!(slice(&items, 10, 9, true).is_empty());
        assert_eq!(slice(&items, 10, 3, false).len(), 25);
    }

    #[test]
    fn test_page_numbers_windows() {
        assert_eq!(page_numbers(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_numbers(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_numbers(9, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(page_numbers(1, 0), vec![]);
    }

    #[test]
    fn test_window_summary() {
        let w = PageWindow::new(42, 10, 2, true);
        assert_eq!((w.start_item, w.end_item, w.total_pages), (11, 20, 5));
        assert!(w.has_previous() && w.has_next());

        let empty = PageWindow::new(0, 10, 1, true);
        assert_eq!((empty.start_item, empty.end_item), (0, 0));
        assert!(!empty.has_next());
    }
}
