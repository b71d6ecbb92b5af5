// Pagination over the display list
//
// A Pager holds the 1-based current page and the responsive page size; the
// page list itself is derived on demand from the item count. Invariant:
// after any operation `current_page` lies in `[1, total_pages]`, where
// `total_pages` has a floor of 1 so an empty list still has a valid page.

/// Maximum number of page buttons shown in the pagination bar
pub const MAX_PAGE_BUTTONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Current page, 1-based
    pub current_page: usize,
    /// Items per page (responsive, at least 1)
    pub page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Total number of pages for `item_count` items (never 0)
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size).max(1)
    }

    /// Jump to a page, clamping into `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize, item_count: usize) {
        self.current_page = page.clamp(1, self.total_pages(item_count));
    }

    pub fn next_page(&mut self, item_count: usize) {
        self.go_to_page(self.current_page + 1, item_count);
    }

    pub fn prev_page(&mut self, item_count: usize) {
        self.go_to_page(self.current_page.saturating_sub(1), item_count);
    }

    /// Back to page 1 - called whenever the underlying list changes
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Adjust the page size (terminal resize), keeping the page in range
    pub fn set_page_size(&mut self, page_size: usize, item_count: usize) {
        let page_size = page_size.max(1);
        if page_size != self.page_size {
            self.page_size = page_size;
            self.go_to_page(self.current_page, item_count);
        }
    }

    /// Half-open index range `start..end` of the current page's items
    pub fn page_bounds(&self, item_count: usize) -> (usize, usize) {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(item_count);
        (start.min(end), end)
    }

    /// Page-number window for the pagination bar
    pub fn window(&self, item_count: usize) -> Vec<usize> {
        page_window(self.current_page, self.total_pages(item_count))
    }
}

/// Compute the window of up to `MAX_PAGE_BUTTONS` page numbers centered on
/// `current_page`, shifted toward the boundary when the center would push it
/// out of `[1, total_pages]`.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let mut start = current_page
        .saturating_sub(MAX_PAGE_BUTTONS / 2)
        .max(1);
    let end = (start + MAX_PAGE_BUTTONS - 1).min(total_pages);

    if (end + 1).saturating_sub(start) < MAX_PAGE_BUTTONS {
        start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1);
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_at_first_page() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_at_last_page() {
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_centered_mid_range() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_with_fewer_pages_than_buttons() {
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn go_to_page_clamps_both_ends() {
        let mut pager = Pager::new(4);
        pager.go_to_page(99, 9); // 9 items, size 4 -> 3 pages
        assert_eq!(pager.current_page, 3);
        pager.go_to_page(0, 9);
        assert_eq!(pager.current_page, 1);
    }

    #[test]
    fn nine_items_page_size_four() {
        let mut pager = Pager::new(4);
        assert_eq!(pager.total_pages(9), 3);

        pager.go_to_page(3, 9);
        // Page 3 holds only the ninth item (indices 8..9)
        assert_eq!(pager.page_bounds(9), (8, 9));
    }

    #[test]
    fn prev_from_first_page_stays_put() {
        let mut pager = Pager::new(4);
        pager.prev_page(9);
        assert_eq!(pager.current_page, 1);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let pager = Pager::new(4);
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.page_bounds(0), (0, 0));
    }

    #[test]
    fn shrinking_page_size_keeps_page_in_range() {
        let mut pager = Pager::new(4);
        pager.go_to_page(3, 9); // 3 pages at size 4
        pager.set_page_size(2, 9); // now 5 pages; page 3 still valid
        assert_eq!(pager.current_page, 3);

        let mut pager = Pager::new(1);
        pager.go_to_page(9, 9); // 9 pages at size 1
        pager.set_page_size(4, 9); // now 3 pages; clamp down
        assert_eq!(pager.current_page, 3);
    }
}
