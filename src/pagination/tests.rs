//! Tests for the auto-paginator

use super::*;
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::stream::{StreamExt, TryStreamExt};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory page source keyed by URL, counting every fetch
struct FakeFetcher {
    pages: HashMap<String, Page<u32>>,
    fetches: AtomicUsize,
    seen_params: Mutex<Vec<Option<QueryParams>>>,
}

impl FakeFetcher {
    fn new(pages: Vec<(&str, Page<u32>)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(url, page)| (url.to_string(), page))
                .collect(),
            fetches: AtomicUsize::new(0),
            seen_params: Mutex::new(Vec::new()),
        }
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher<u32> for FakeFetcher {
    async fn fetch_page(&self, url: &str, params: Option<&QueryParams>) -> Result<Page<u32>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.seen_params.lock().unwrap().push(params.cloned());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("no page at {url}")))
    }
}

/// Source with pages of 3, 3 and 1 items
fn three_page_source() -> FakeFetcher {
    FakeFetcher::new(vec![
        ("/items", Page::new(vec![1, 2, 3], Some("/items?page=2".into()))),
        (
            "/items?page=2",
            Page::new(vec![4, 5, 6], Some("/items?page=3".into())),
        ),
        ("/items?page=3", Page::last(vec![7])),
    ])
}

/// Source with pages of 3, 3, 1 and 1 items
fn four_page_source() -> FakeFetcher {
    FakeFetcher::new(vec![
        ("/items", Page::new(vec![1, 2, 3], Some("/items?page=2".into()))),
        (
            "/items?page=2",
            Page::new(vec![4, 5, 6], Some("/items?page=3".into())),
        ),
        (
            "/items?page=3",
            Page::new(vec![7], Some("/items?page=4".into())),
        ),
        ("/items?page=4", Page::last(vec![8])),
    ])
}

#[tokio::test]
async fn test_full_drain_preserves_order_across_pages() {
    let fetcher = three_page_source();
    let paginated = Paginated::new(&fetcher, "/items");

    let items: Vec<u32> = paginated.items().try_collect().await.unwrap();

    assert_eq!(items, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(fetcher.fetches(), 3);
}

#[tokio::test]
async fn test_early_stop_fetches_only_what_is_needed() {
    let fetcher = four_page_source();
    let paginated = Paginated::new(&fetcher, "/items");

    let items: Vec<u32> = paginated.items().take(4).try_collect().await.unwrap();

    assert_eq!(items, vec![1, 2, 3, 4]);
    // Four items span pages one and two; pages three and four are never requested
    assert_eq!(fetcher.fetches(), 2);
}

#[tokio::test]
async fn test_stream_is_cold_until_polled() {
    let fetcher = three_page_source();
    let paginated = Paginated::new(&fetcher, "/items");

    let pages = paginated.pages();
    let items = paginated.items();
    assert_eq!(fetcher.fetches(), 0);

    drop(pages);
    drop(items);
    assert_eq!(fetcher.fetches(), 0);
}

#[tokio::test]
async fn test_each_consumption_restarts_from_page_one() {
    let fetcher = three_page_source();
    let paginated = Paginated::new(&fetcher, "/items");

    let first: Vec<u32> = paginated.items().try_collect().await.unwrap();
    let second: Vec<u32> = paginated.items().try_collect().await.unwrap();

    assert_eq!(first, second);
    // No caching between consumptions: the full fetch sequence runs twice
    assert_eq!(fetcher.fetches(), 6);
}

#[tokio::test]
async fn test_fetch_failure_is_terminal_for_the_consumption() {
    // Page two is missing from the source
    let fetcher = FakeFetcher::new(vec![(
        "/items",
        Page::new(vec![1, 2, 3], Some("/items?page=2".into())),
    )]);
    let paginated = Paginated::new(&fetcher, "/items");

    let mut stream = Box::pin(paginated.items());
    let mut emitted = Vec::new();
    let mut failure = None;
    while let Some(result) = stream.next().await {
        match result {
            Ok(item) => emitted.push(item),
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    // Already-emitted items stand; the error surfaces verbatim
    assert_eq!(emitted, vec![1, 2, 3]);
    assert!(matches!(
        failure,
        Some(Error::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_initial_params_sent_on_first_fetch_only() {
    let fetcher = three_page_source();
    let mut params = QueryParams::new();
    params.insert("per_page".to_string(), "3".to_string());
    let paginated = Paginated::new(&fetcher, "/items").with_params(params.clone());

    let _: Vec<u32> = paginated.items().try_collect().await.unwrap();

    let seen = fetcher.seen_params.lock().unwrap().clone();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], Some(params));
    assert_eq!(seen[1], None);
    assert_eq!(seen[2], None);
}

#[tokio::test]
async fn test_pages_stream_is_demand_driven() {
    let fetcher = three_page_source();
    let paginated = Paginated::new(&fetcher, "/items");

    let pages: Vec<Page<u32>> = paginated.pages().take(1).try_collect().await.unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].items, vec![1, 2, 3]);
    assert_eq!(fetcher.fetches(), 1);
}

#[tokio::test]
async fn test_empty_last_page_terminates_cleanly() {
    let fetcher = FakeFetcher::new(vec![("/items", Page::last(vec![]))]);
    let paginated = Paginated::new(&fetcher, "/items");

    let items: Vec<u32> = paginated.items().try_collect().await.unwrap();

    assert!(items.is_empty());
    assert_eq!(fetcher.fetches(), 1);
}

#[tokio::test]
async fn test_once_item_yields_single_value() {
    let stream = once_item(async { Ok(42u32) });
    let items: Vec<u32> = stream.try_collect().await.unwrap();
    assert_eq!(items, vec![42]);
}

#[tokio::test]
async fn test_once_item_propagates_failure() {
    let stream = once_item(async { Err::<u32, _>(Error::ChallengeFailed) });
    let err = stream.try_collect::<Vec<u32>>().await.unwrap_err();
    assert!(matches!(err, Error::ChallengeFailed));
}

#[test]
fn test_page_accessors() {
    let page = Page::new(vec![1, 2], Some("/next".to_string()));
    assert_eq!(page.len(), 2);
    assert!(!page.is_empty());

    let page: Page<u32> = Page::last(vec![]);
    assert!(page.is_empty());
    assert!(page.next_link.is_none());
}
