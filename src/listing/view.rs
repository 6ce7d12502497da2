use std::future::Future;
use tracing::{debug, warn};

use super::pagination::{PageInfo, PageRequest};
use super::Filterable;
use crate::error::ApiResult;

/// State behind a listing screen: the fetched rows, the search box and the
/// pager. Filtering and paging never touch the network; only
/// [`ListView::refresh`] does.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    rows: Vec<T>,
    query: String,
    page: PageRequest,
    stale: bool,
    loading: bool,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self::new(PageRequest::DEFAULT_PAGE_SIZE)
    }
}

impl<T> ListView<T> {
    /// Empty view. It starts stale so the first `refresh_if_stale` fetches.
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            query: String::new(),
            page: PageRequest::new(0, page_size),
            stale: true,
            loading: false,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Mark the rows outdated, typically after a successful mutation.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_request(&self) -> PageRequest {
        self.page
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page = PageRequest::new(0, page_size);
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page.page > 0 {
            self.page.page -= 1;
            true
        } else {
            false
        }
    }
}

impl<T: Filterable> ListView<T> {
    /// Set the search text. Paging restarts at the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page.page = 0;
    }

    /// Rows matching the search text (case-insensitive substring of the
    /// entity's filter field), in fetch order.
    pub fn filtered(&self) -> Vec<&T> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.iter().collect();
        }
        self.rows
            .iter()
            .filter(|row| row.filter_key().to_lowercase().contains(&needle))
            .collect()
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&T> {
        let filtered = self.filtered();
        self.page.slice(&filtered).to_vec()
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(&self.page, self.filtered().len())
    }

    pub fn next_page(&mut self) -> bool {
        if self.page_info().has_next {
            self.page.page += 1;
            true
        } else {
            false
        }
    }

    /// Replace the rows with a fresh fetch, keeping fetch order.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.stale = false;
        self.clamp_page();
    }

    /// Jump to a page, clamped to the last page of the filtered rows.
    pub fn set_page(&mut self, page: usize) {
        self.page.page = page;
        self.clamp_page();
    }

    /// Fetch the collection through `fetch`. On failure the previous rows
    /// stay on screen and the view remains stale.
    pub async fn refresh<F, Fut>(&mut self, fetch: F) -> ApiResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<Vec<T>>>,
    {
        self.loading = true;
        let result = fetch().await;
        self.loading = false;
        match result {
            Ok(rows) => {
                debug!(rows = rows.len(), "List refreshed");
                self.set_rows(rows);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "List refresh failed");
                Err(e)
            }
        }
    }

    /// Refetch only when invalidated (or never loaded). Returns whether a
    /// fetch happened.
    pub async fn refresh_if_stale<F, Fut>(&mut self, fetch: F) -> ApiResult<bool>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<Vec<T>>>,
    {
        if !self.stale {
            return Ok(false);
        }
        self.refresh(fetch).await.map(|()| true)
    }

    fn clamp_page(&mut self) {
        let total = self.filtered().len();
        let last = total.div_ceil(self.page.page_size).saturating_sub(1);
        self.page.page = self.page.page.min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        n: usize,
        name: String,
    }

    impl Filterable for Row {
        fn filter_key(&self) -> &str {
            &self.name
        }
    }

    fn rows(count: usize) -> Vec<Row> {
        (1..=count)
            .map(|n| Row {
                n,
                name: if n % 3 == 0 {
                    format!("Wind Site {}", n)
                } else {
                    format!("Solar Park {}", n)
                },
            })
            .collect()
    }

    fn numbers(rows: Vec<&Row>) -> Vec<usize> {
        rows.into_iter().map(|r| r.n).collect()
    }

    #[test]
    fn empty_filter_pages_in_fetch_order() {
        let mut view = ListView::default();
        view.set_rows(rows(15));

        assert_eq!(numbers(view.page_rows()), vec![1, 2, 3, 4, 5]);
        assert!(view.next_page());
        assert_eq!(numbers(view.page_rows()), vec![6, 7, 8, 9, 10]);
        assert_eq!(view.page_info().total_pages, 3);
    }

    #[test]
    fn filter_is_case_insensitive_and_resets_page() {
        let mut view = ListView::new(2);
        view.set_rows(rows(15));
        view.set_page(4);

        view.set_query("wIND");
        assert_eq!(view.page_request().page, 0);
        assert_eq!(numbers(view.filtered()), vec![3, 6, 9, 12, 15]);
        assert_eq!(numbers(view.page_rows()), vec![3, 6]);
    }

    #[test]
    fn paging_stops_at_the_ends() {
        let mut view = ListView::default();
        view.set_rows(rows(6));
        assert!(!view.prev_page());
        assert!(view.next_page());
        assert!(!view.next_page());
        assert_eq!(numbers(view.page_rows()), vec![6]);
    }

    #[test]
    fn shrinking_rows_clamps_page() {
        let mut view = ListView::default();
        view.set_rows(rows(15));
        view.set_page(2);
        view.set_rows(rows(4));
        assert_eq!(view.page_request().page, 0);
    }

    #[test]
    fn page_jump_is_clamped_to_filtered_rows() {
        let mut view = ListView::default();
        view.set_rows(rows(15));
        view.set_query("wind site 15");
        assert_eq!(view.filtered().len(), 1);

        view.set_page(2);
        assert_eq!(view.page_request().page, 0);
        assert_eq!(numbers(view.page_rows()), vec![15]);
        assert_eq!(view.page_info().total_pages, 1);
    }

    #[test]
    fn refetch_clamps_page_to_matches_under_current_query() {
        let mut view = ListView::new(2);
        view.set_rows(rows(15));
        view.set_query("wind");
        view.set_page(2);
        assert_eq!(numbers(view.page_rows()), vec![15]);

        view.set_rows(rows(9));
        assert_eq!(view.page_request().page, 1);
        assert_eq!(numbers(view.page_rows()), vec![9]);
    }

    #[tokio::test]
    async fn refresh_if_stale_fetches_only_after_invalidation() {
        let mut view: ListView<Row> = ListView::default();
        let mut calls = 0;

        assert!(view
            .refresh_if_stale(|| {
                calls += 1;
                async { Ok(rows(3)) }
            })
            .await
            .unwrap());
        assert!(!view
            .refresh_if_stale(|| {
                calls += 1;
                async { Ok(rows(3)) }
            })
            .await
            .unwrap());

        view.invalidate();
        view.refresh_if_stale(|| {
            calls += 1;
            async { Ok(rows(7)) }
        })
        .await
        .unwrap();

        assert_eq!(calls, 2);
        assert_eq!(view.rows().len(), 7);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_rows() {
        let mut view = ListView::default();
        view.set_rows(rows(3));
        view.invalidate();

        let result = view
            .refresh(|| async { Err(ClientError::Decode("bad".into())) })
            .await;

        assert!(result.is_err());
        assert_eq!(view.rows().len(), 3);
        assert!(view.is_stale());
        assert!(!view.is_loading());
    }
}
