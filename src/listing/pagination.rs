//! Client-side pagination over an already fetched collection

use serde::Serialize;

/// Page selection (0-indexed page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Default rows per page on listing screens
    pub const DEFAULT_PAGE_SIZE: usize = 5;

    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// The slice of `rows` this page covers; empty past the end.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.offset().min(rows.len());
        let end = start.saturating_add(self.page_size).min(rows.len());
        &rows[start..end]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_PAGE_SIZE)
    }
}

/// Pagination metadata for the footer ("Showing 6-10 of 15")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
    /// 1-based position of the first row shown, 0 when the page is empty
    pub first_row: usize,
    /// 1-based position of the last row shown, 0 when the page is empty
    pub last_row: usize,
}

impl PageInfo {
    pub fn new(request: &PageRequest, total_items: usize) -> Self {
        let page_size = request.page_size.max(1);
        let page = request.page;
        let total_pages = total_items.div_ceil(page_size);
        let shown = (total_items - request.offset().min(total_items)).min(page_size);
        let first_row = if shown == 0 { 0 } else { request.offset() + 1 };

        Self {
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page + 1 < total_pages,
            has_prev: page > 0,
            first_row,
            last_row: if shown == 0 { 0 } else { first_row + shown - 1 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_pages_in_order() {
        let rows: Vec<u32> = (1..=12).collect();
        assert_eq!(PageRequest::new(0, 5).slice(&rows), &[1, 2, 3, 4, 5]);
        assert_eq!(PageRequest::new(2, 5).slice(&rows), &[11, 12]);
        assert!(PageRequest::new(3, 5).slice(&rows).is_empty());
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).page_size, 1);
    }

    #[test]
    fn meta_describes_partial_last_page() {
        let info = PageInfo::new(&PageRequest::new(2, 5), 12);
        assert_eq!(info.total_pages, 3);
        assert!(!info.has_next);
        assert!(info.has_prev);
        assert_eq!((info.first_row, info.last_row), (11, 12));
    }

    #[test]
    fn meta_for_empty_collection() {
        let info = PageInfo::new(&PageRequest::default(), 0);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next && !info.has_prev);
        assert_eq!((info.first_row, info.last_row), (0, 0));
    }
}
