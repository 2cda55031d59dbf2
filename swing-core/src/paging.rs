use std::sync::Arc;

use crate::{PagingError, Subject, sa};

/// The index of a page. Page 0 is the initial load.
pub type PageKey = usize;

/// The sort a listing is requested in. Fixed for the lifetime of a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub sort_by: String,
    pub sort_order: sa::SortOrder,
}
impl Default for SortSpec {
    fn default() -> Self {
        Self {
            sort_by: "created_date".to_string(),
            sort_order: sa::SortOrder::Descending,
        }
    }
}

/// A remote listing that can be read one page at a time.
#[async_trait::async_trait]
pub trait ListingEndpoint: Send + Sync + 'static {
    type Item: Send + 'static;

    /// What this endpoint lists, for error messages.
    fn subject(&self) -> Subject;

    /// Fetch the items starting at `request.start_index`. An empty result
    /// means there is nothing more to fetch.
    async fn fetch(&self, request: &sa::ListRequest) -> sa::ClientResult<Vec<Self::Item>>;
}

/// One loaded page, with the keys of its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub key: PageKey,
    pub items: Vec<T>,
    pub prev_key: Option<PageKey>,
    pub next_key: Option<PageKey>,
}

/// Loads one page of `endpoint`. `key` absent means page 0.
pub async fn load<E: ListingEndpoint>(
    endpoint: &E,
    sort: &SortSpec,
    key: Option<PageKey>,
    page_size: usize,
) -> Result<Page<E::Item>, PagingError> {
    let key = key.unwrap_or(0);
    let request = sa::ListRequest {
        start_index: key * page_size,
        limit: page_size,
        sort_by: sort.sort_by.clone(),
        sort_order: sort.sort_order,
    };

    tracing::debug!(
        "Loading page {key} (start={}, sort_by={}, order={:?})",
        request.start_index,
        request.sort_by,
        request.sort_order
    );
    let items = endpoint
        .fetch(&request)
        .await
        .map_err(|e| PagingError::classify(endpoint.subject(), e))?;

    Ok(Page {
        key,
        prev_key: if key == 0 { None } else { Some(key - 1) },
        next_key: if items.is_empty() { None } else { Some(key + 1) },
        items,
    })
}

/// A pending page load, detached from its cursor so it can run on another task.
pub struct PageLoad<E> {
    endpoint: Arc<E>,
    sort: SortSpec,
    key: PageKey,
    page_size: usize,
}
impl<E: ListingEndpoint> PageLoad<E> {
    pub fn key(&self) -> PageKey {
        self.key
    }

    pub async fn run(self) -> Result<Page<E::Item>, PagingError> {
        load(self.endpoint.as_ref(), &self.sort, Some(self.key), self.page_size).await
    }
}

/// Walks a listing endpoint page by page.
///
/// The cursor only tracks which page comes next; the caller keeps the items.
/// Once a page comes back empty the cursor is exhausted for good. A failed
/// load leaves the cursor where it was, so the same key can be retried.
pub struct PagingCursor<E> {
    endpoint: Arc<E>,
    sort: SortSpec,
    page_size: usize,
    next_key: Option<PageKey>,
}
impl<E: ListingEndpoint> PagingCursor<E> {
    pub fn new(endpoint: Arc<E>, sort: SortSpec, page_size: usize) -> Self {
        Self {
            endpoint,
            sort,
            page_size: page_size.max(1),
            next_key: Some(0),
        }
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_key.is_none()
    }

    /// A cursor over the same endpoint with a different sort, starting over.
    pub fn with_sort(&self, sort: SortSpec) -> Self {
        Self::new(self.endpoint.clone(), sort, self.page_size)
    }

    /// The load for the next page, or `None` once the cursor is exhausted.
    pub fn next_request(&self) -> Option<PageLoad<E>> {
        Some(PageLoad {
            endpoint: self.endpoint.clone(),
            sort: self.sort.clone(),
            key: self.next_key?,
            page_size: self.page_size,
        })
    }

    /// Moves past a successfully loaded page. Pages that are not the one the
    /// cursor is waiting for are ignored.
    pub fn advance(&mut self, page: &Page<E::Item>) {
        if self.next_key == Some(page.key) {
            self.next_key = page.next_key;
        }
    }

    /// Loads the next page and advances past it.
    pub async fn load_next(&mut self) -> Option<Result<Page<E::Item>, PagingError>> {
        let result = self.next_request()?.run().await;
        if let Ok(page) = &result {
            self.advance(page);
        }
        Some(result)
    }

    /// The page to reload so that the item at `anchor_position` stays in view.
    pub fn refresh_key(&self, anchor_position: Option<usize>) -> Option<PageKey> {
        anchor_position.map(|position| position / self.page_size)
    }
}

/// The items of every page loaded so far, in page order.
#[derive(Debug, Clone)]
pub struct PagedItems<T> {
    items: Vec<T>,
    pages_loaded: usize,
    end_reached: bool,
}
impl<T> Default for PagedItems<T> {
    fn default() -> Self {
        Self {
            items: vec![],
            pages_loaded: 0,
            end_reached: false,
        }
    }
}
impl<T> PagedItems<T> {
    pub fn append(&mut self, page: Page<T>) {
        if page.next_key.is_none() {
            self.end_reached = true;
        }
        if !page.items.is_empty() {
            self.pages_loaded += 1;
        }
        self.items.extend(page.items);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    pub fn end_reached(&self) -> bool {
        self.end_reached
    }
}

/// Loads every remaining page of `cursor`.
///
/// `on_page` is called with the number of items in each page and the total so far.
pub async fn collect_all<E: ListingEndpoint>(
    cursor: &mut PagingCursor<E>,
    on_page: impl Fn(usize, usize),
) -> Result<Vec<E::Item>, PagingError> {
    let mut paged = PagedItems::default();
    while let Some(result) = cursor.load_next().await {
        let page = result?;
        let count = page.items.len();
        paged.append(page);
        if count > 0 {
            on_page(count, paged.items().len());
        }
    }
    Ok(paged.into_items())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// A listing backed by a vector, recording every request it sees.
    struct VecEndpoint {
        items: Vec<u32>,
        requests: Mutex<Vec<sa::ListRequest>>,
        fail_with: Mutex<Option<u16>>,
    }
    impl VecEndpoint {
        fn new(len: u32) -> Arc<Self> {
            Arc::new(Self {
                items: (0..len).collect(),
                requests: Mutex::new(vec![]),
                fail_with: Mutex::new(None),
            })
        }
    }
    #[async_trait::async_trait]
    impl ListingEndpoint for VecEndpoint {
        type Item = u32;

        fn subject(&self) -> Subject {
            Subject::Albums
        }

        async fn fetch(&self, request: &sa::ListRequest) -> sa::ClientResult<Vec<u32>> {
            self.requests.lock().unwrap().push(request.clone());
            if let Some(code) = self.fail_with.lock().unwrap().take() {
                return Err(sa::ClientError::StatusError {
                    code,
                    message: None,
                });
            }
            Ok(self
                .items
                .iter()
                .skip(request.start_index)
                .take(request.limit)
                .copied()
                .collect())
        }
    }

    #[tokio::test]
    async fn test_load_computes_offsets_and_keys() {
        let endpoint = VecEndpoint::new(25);
        let sort = SortSpec::default();

        let first = load(endpoint.as_ref(), &sort, None, 10).await.unwrap();
        assert_eq!(first.key, 0);
        assert_eq!(first.items, (0..10).collect::<Vec<_>>());
        assert_eq!(first.prev_key, None);
        assert_eq!(first.next_key, Some(1));

        let third = load(endpoint.as_ref(), &sort, Some(2), 10).await.unwrap();
        assert_eq!(third.items, (20..25).collect::<Vec<_>>());
        assert_eq!(third.prev_key, Some(1));
        assert_eq!(third.next_key, Some(3));

        let past_end = load(endpoint.as_ref(), &sort, Some(3), 10).await.unwrap();
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.prev_key, Some(2));
        assert_eq!(past_end.next_key, None);

        let starts: Vec<_> = endpoint
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| (r.start_index, r.limit))
            .collect();
        assert_eq!(starts, vec![(0, 10), (20, 10), (30, 10)]);
    }

    #[tokio::test]
    async fn test_cursor_terminates_after_ceil_n_over_p_pages() {
        for (len, page_size) in [(0, 5), (1, 5), (5, 5), (23, 5), (100, 7), (6, 1)] {
            let endpoint = VecEndpoint::new(len);
            let mut cursor = PagingCursor::new(endpoint.clone(), SortSpec::default(), page_size);

            let mut non_empty = 0;
            let mut seen = vec![];
            let last = loop {
                let page = cursor.load_next().await.unwrap().unwrap();
                if page.items.is_empty() {
                    break page;
                }
                non_empty += 1;
                seen.extend(page.items);
            };

            let expected_pages = (len as usize).div_ceil(page_size);
            assert_eq!(non_empty, expected_pages, "len={len} page_size={page_size}");
            assert_eq!(last.next_key, None);
            assert_eq!(seen, (0..len).collect::<Vec<_>>());
            assert!(cursor.is_exhausted());
            assert!(cursor.load_next().await.is_none());
            assert!(cursor.next_request().is_none());
            assert_eq!(endpoint.requests.lock().unwrap().len(), expected_pages + 1);
        }
    }

    #[tokio::test]
    async fn test_failed_load_does_not_advance() {
        let endpoint = VecEndpoint::new(12);
        let mut cursor = PagingCursor::new(endpoint.clone(), SortSpec::default(), 10);

        cursor.load_next().await.unwrap().unwrap();
        *endpoint.fail_with.lock().unwrap() = Some(500);

        let error = cursor.load_next().await.unwrap().unwrap_err();
        assert_eq!(error.kind, crate::ErrorKind::ServerError);
        assert_eq!(cursor.next_request().unwrap().key(), 1);

        let retried = cursor.load_next().await.unwrap().unwrap();
        assert_eq!(retried.key, 1);
        assert_eq!(retried.items, vec![10, 11]);
    }

    #[tokio::test]
    async fn test_sort_is_fixed_per_cursor() {
        let endpoint = VecEndpoint::new(3);
        let sort = SortSpec {
            sort_by: "title".to_string(),
            sort_order: sa::SortOrder::Ascending,
        };
        let mut cursor = PagingCursor::new(endpoint.clone(), sort.clone(), 2);
        cursor.load_next().await;
        cursor.load_next().await;

        let resorted = cursor.with_sort(SortSpec::default());
        assert_eq!(resorted.next_request().unwrap().key(), 0);
        assert_eq!(resorted.sort(), &SortSpec::default());
        assert_eq!(cursor.sort(), &sort);

        let requests = endpoint.requests.lock().unwrap();
        assert!(requests.iter().all(|r| r.sort_by == "title"));
        assert!(
            requests
                .iter()
                .all(|r| r.sort_order == sa::SortOrder::Ascending)
        );
    }

    #[tokio::test]
    async fn test_collect_all_and_paged_items() {
        let endpoint = VecEndpoint::new(11);
        let mut cursor = PagingCursor::new(endpoint, SortSpec::default(), 4);
        let calls = Mutex::new(vec![]);

        let items = collect_all(&mut cursor, |count, total| {
            calls.lock().unwrap().push((count, total));
        })
        .await
        .unwrap();

        assert_eq!(items, (0..11).collect::<Vec<_>>());
        assert_eq!(*calls.lock().unwrap(), vec![(4, 4), (4, 8), (3, 11)]);
    }

    #[test]
    fn test_refresh_key() {
        let cursor = PagingCursor::new(VecEndpoint::new(0), SortSpec::default(), 20);
        assert_eq!(cursor.refresh_key(None), None);
        assert_eq!(cursor.refresh_key(Some(0)), Some(0));
        assert_eq!(cursor.refresh_key(Some(45)), Some(2));
    }

    #[test]
    fn test_stale_page_does_not_advance() {
        let mut cursor = PagingCursor::new(VecEndpoint::new(0), SortSpec::default(), 20);
        cursor.advance(&Page {
            key: 4,
            items: vec![1],
            prev_key: Some(3),
            next_key: Some(5),
        });
        assert_eq!(cursor.next_request().unwrap().key(), 0);
    }
}
